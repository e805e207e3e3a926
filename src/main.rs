use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use timeline::cli::args::{Cli, Commands};
use timeline::cli::commands::{self, Context};
use timeline::config::{Config, Paths};
use timeline::error::TimelineError;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "error".red().bold(), e);
        let code = e
            .downcast_ref::<TimelineError>()
            .map_or(1, TimelineError::exit_code);
        std::process::exit(code);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load_from_path(&Paths::default().config_file)?,
    };
    config.general.color.apply();
    let ctx = Context::new(cli.output, config);

    let output = match cli.command {
        Commands::Show(args) => commands::show(&args, &ctx)?,
        Commands::Categories(source) => commands::categories(&source, &ctx)?,
        Commands::Completions { shell, install } => commands::completions(shell, install)?,
    };

    if !output.is_empty() {
        println!("{}", output.trim_end_matches('\n'));
    }
    Ok(())
}
