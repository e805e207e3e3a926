use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::core::SortOrder;

#[derive(Parser)]
#[command(name = "timeline")]
#[command(about = "Extract and render dated timeline entries from lightweight markup")]
#[command(long_about = "timeline - dated entries from lightweight markup

Reads text made of category headers and dated entry lines:

  # Work
  Jan, 2020: Joined the platform team [https://example.com/post]
  Mar, 2021: Shipped the billing rewrite

and renders the entries in chronological order.

QUICK START:
  timeline show history.md             Oldest first
  timeline show history.md --order desc
  cat history.md | timeline show       Read from stdin
  timeline categories history.md       Categories with counts

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Overrides `general.default_output` from the config file.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Path to the config file (default: ~/.timeline/config.yaml)
    #[arg(long, global = true, env = "TIMELINE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log skipped lines and other diagnostics to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show timeline entries in chronological order
    ///
    /// Header lines (`# Category`) set the category of the entries below
    /// them. Entry lines look like `Mon, YYYY: Title [optional link]`.
    /// Anything else is ignored.
    ///
    /// # Examples
    ///
    ///   timeline show history.md
    ///   timeline show history.md --category work --since 2020
    ///   timeline show history.md --group -o json
    #[command(alias = "s")]
    Show(ShowArgs),

    /// List categories with entry counts and date spans
    ///
    /// # Examples
    ///
    ///   timeline categories history.md
    ///   timeline categories history.md -o json
    #[command(alias = "c")]
    Categories(SourceArgs),

    /// Generate shell completions
    ///
    /// Outputs completion script for the specified shell.
    /// Redirect to a file or source directly.
    ///
    /// Example: timeline completions bash > ~/.bash_completion.d/timeline
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,

        /// Show installation instructions
        #[arg(long, short = 'i')]
        install: bool,
    },
}

/// Where to read timeline text from.
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Timeline file to read; `-` or omitted reads stdin
    pub file: Option<PathBuf>,
}

/// Arguments for `show`.
#[derive(Args, Debug, Clone, Default)]
pub struct ShowArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Only entries in this category (case-insensitive)
    #[arg(long)]
    pub category: Option<String>,

    /// Only entries from this year onward
    #[arg(long)]
    pub since: Option<i32>,

    /// Only entries up to and including this year
    #[arg(long)]
    pub until: Option<i32>,

    /// Only entries that have a link
    #[arg(long)]
    pub with_link: bool,

    /// Chronological order (overrides `display.order`)
    #[arg(long, value_enum)]
    pub order: Option<SortOrder>,

    /// Group entries under their category
    #[arg(long, conflicts_with = "flat")]
    pub group: bool,

    /// Do not group, even if `display.group_by_category` is set
    #[arg(long)]
    pub flat: bool,

    /// Show at most this many entries (after sorting)
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_show_args() {
        let cli = Cli::try_parse_from([
            "timeline", "show", "history.md", "--category", "Work", "--since", "2020",
            "--order", "desc", "-n", "5", "-o", "json",
        ])
        .unwrap();

        assert_eq!(cli.output, Some(OutputFormat::Json));
        let Commands::Show(args) = cli.command else {
            panic!("expected show");
        };
        assert_eq!(args.source.file, Some(PathBuf::from("history.md")));
        assert_eq!(args.category.as_deref(), Some("Work"));
        assert_eq!(args.since, Some(2020));
        assert_eq!(args.until, None);
        assert_eq!(args.order, Some(SortOrder::Desc));
        assert_eq!(args.limit, Some(5));
    }

    #[test]
    fn test_parse_show_from_stdin() {
        let cli = Cli::try_parse_from(["timeline", "show"]).unwrap();
        let Commands::Show(args) = cli.command else {
            panic!("expected show");
        };
        assert!(args.source.file.is_none());
        assert!(cli.output.is_none());
    }

    #[test]
    fn test_completions_shell_is_validated() {
        let cli = Cli::try_parse_from(["timeline", "completions", "fish"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Completions { shell: clap_complete::Shell::Fish, install: false }
        ));
        assert!(Cli::try_parse_from(["timeline", "completions", "tcsh"]).is_err());
    }

    #[test]
    fn test_group_conflicts_with_flat() {
        assert!(Cli::try_parse_from(["timeline", "show", "--group", "--flat"]).is_err());
    }
}
