//! Command implementations for timeline.
//!
//! Each command returns the rendered output; `main` prints it.

mod completions;

use std::io::Read;
use std::path::Path;

pub use completions::completions;

use crate::cli::args::{OutputFormat, ShowArgs, SourceArgs};
use crate::config::Config;
use crate::core::{categories as summarize_categories, filter_entries, group_by_category, sort_chronologically, EntryFilter};
use crate::error::TimelineError;
use crate::output::{format_categories, format_entries, format_groups, PrettyOptions};
use crate::timeline::{parse_timeline, Entry};

/// Settings shared by every command, resolved from flags and config.
#[derive(Debug, Clone)]
pub struct Context {
    pub format: OutputFormat,
    pub config: Config,
}

impl Context {
    /// Resolve the output format: explicit flag first, then the config default.
    #[must_use]
    pub fn new(format: Option<OutputFormat>, config: Config) -> Self {
        Self {
            format: format.unwrap_or(config.general.default_output),
            config,
        }
    }

    fn pretty_options(&self) -> PrettyOptions {
        PrettyOptions {
            date_format: self.config.display.date_format.clone(),
        }
    }
}

/// Read timeline text from a file, or from stdin when the path is absent or `-`.
///
/// # Errors
///
/// Returns `TimelineError::Read` if the file cannot be read, or
/// `TimelineError::Io` if stdin cannot be read.
pub fn read_source(source: &SourceArgs) -> Result<String, TimelineError> {
    match source.file.as_deref() {
        Some(path) if path != Path::new("-") => {
            tracing::debug!(path = %path.display(), "reading timeline file");
            std::fs::read_to_string(path).map_err(|e| TimelineError::Read {
                path: path.to_path_buf(),
                source: e,
            })
        },
        _ => {
            tracing::debug!("reading timeline from stdin");
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        },
    }
}

/// Execute show command
///
/// # Errors
///
/// Returns an error if the input cannot be read, the filter is invalid, or
/// output formatting fails.
pub fn show(args: &ShowArgs, ctx: &Context) -> Result<String, TimelineError> {
    let text = read_source(&args.source)?;
    show_text(&text, args, ctx)
}

/// Run the show pipeline on already-loaded text.
///
/// # Errors
///
/// Returns an error if the filter is invalid or output formatting fails.
pub fn show_text(text: &str, args: &ShowArgs, ctx: &Context) -> Result<String, TimelineError> {
    let filter = EntryFilter {
        category: args.category.clone(),
        since: args.since,
        until: args.until,
        with_link: args.with_link,
    };
    filter.validate()?;

    let entries = parse_timeline(text);
    let mut selected: Vec<Entry> = filter_entries(&entries, &filter).into_iter().cloned().collect();
    tracing::debug!(parsed = entries.len(), selected = selected.len(), "filtered entries");

    let order = args.order.unwrap_or(ctx.config.display.order);
    sort_chronologically(&mut selected, order);

    if let Some(limit) = args.limit {
        selected.truncate(limit);
    }

    let grouped = !args.flat && (args.group || ctx.config.display.group_by_category);
    let options = ctx.pretty_options();
    if grouped {
        format_groups(&group_by_category(&selected), ctx.format, &options)
    } else {
        format_entries(&selected, "Timeline", ctx.format, &options)
    }
}

/// Execute categories command
///
/// # Errors
///
/// Returns an error if the input cannot be read or output formatting fails.
pub fn categories(source: &SourceArgs, ctx: &Context) -> Result<String, TimelineError> {
    let text = read_source(source)?;
    let entries = parse_timeline(&text);
    format_categories(&summarize_categories(&entries), ctx.format, &ctx.pretty_options())
}
