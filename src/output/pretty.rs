use std::fmt::Write;

use chrono::NaiveDate;
use colored::Colorize;

use super::{category_label, PrettyOptions};
use crate::core::{entry_date, CategoryGroup, CategorySummary};
use crate::timeline::Entry;

/// Render a date with the configured format, falling back to ISO when the
/// format needs fields a calendar date does not have.
fn format_day(date: NaiveDate, options: &PrettyOptions) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(&options.date_format)).is_err() {
        return date.to_string();
    }
    out
}

fn format_date(entry: &Entry, options: &PrettyOptions) -> String {
    format_day(entry_date(entry), options)
}

fn entries_label(count: usize) -> String {
    format!("{} entr{}", count, if count == 1 { "y" } else { "ies" })
}

/// Format one entry as a single line, optionally showing its category.
fn format_entry_line(entry: &Entry, options: &PrettyOptions, show_category: bool) -> String {
    let mut line = format!("{}  {}", format_date(entry, options).yellow(), entry.title.bold());

    if show_category && !entry.category.is_empty() {
        line.push_str(&format!("  {}", entry.category.dimmed()));
    }

    if let Some(link) = &entry.link {
        line.push_str(&format!("  {}", link.cyan().underline()));
    }

    line
}

/// Format a list of entries as a pretty table
pub fn format_entries_pretty(entries: &[Entry], title: &str, options: &PrettyOptions) -> String {
    if entries.is_empty() {
        return format!("{} (0 entries)\n  No entries", title);
    }

    let mut output = format!("{} ({})\n", title, entries_label(entries.len()));
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for entry in entries {
        output.push_str(&format_entry_line(entry, options, true));
        output.push('\n');
    }

    output
}

/// Format entries grouped under category headings
pub fn format_groups_pretty(groups: &[CategoryGroup], options: &PrettyOptions) -> String {
    if groups.is_empty() {
        return "Timeline (0 entries)\n  No entries".to_string();
    }

    let mut output = String::new();

    for (i, group) in groups.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        output.push_str(&format!(
            "{} ({})\n",
            category_label(&group.name).bold().underline(),
            group.entries.len()
        ));
        for entry in &group.entries {
            output.push_str("  ");
            output.push_str(&format_entry_line(entry, options, false));
            output.push('\n');
        }
    }

    output
}

/// Format category summaries as a pretty table
pub fn format_categories_pretty(summaries: &[CategorySummary], options: &PrettyOptions) -> String {
    if summaries.is_empty() {
        return "Categories (0)\n  No categories".to_string();
    }

    let mut output = format!("Categories ({})\n", summaries.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for summary in summaries {
        let span = if summary.first == summary.last {
            format_day(summary.first, options)
        } else {
            format!(
                "{} – {}",
                format_day(summary.first, options),
                format_day(summary.last, options)
            )
        };
        output.push_str(&format!(
            "{}  {}  {}\n",
            category_label(&summary.name).bold(),
            entries_label(summary.count).dimmed(),
            span.yellow()
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{categories, group_by_category};
    use crate::timeline::{parse_timeline, Month};

    fn plain<F: FnOnce() -> String>(f: F) -> String {
        colored::control::set_override(false);
        f()
    }

    #[test]
    fn test_format_entries_pretty_empty() {
        let out = plain(|| format_entries_pretty(&[], "Timeline", &PrettyOptions::default()));
        assert!(out.contains("Timeline (0 entries)"));
        assert!(out.contains("No entries"));
    }

    #[test]
    fn test_format_entries_pretty_line() {
        let entries = vec![
            Entry::new(Month::Mar, 2022, "Launched site", "Work").with_link("https://example.com"),
        ];
        let out = plain(|| format_entries_pretty(&entries, "Timeline", &PrettyOptions::default()));
        assert!(out.contains("Timeline (1 entry)"));
        assert!(out.contains("Mar 2022  Launched site  Work  https://example.com"));
    }

    #[test]
    fn test_format_entries_pretty_custom_date_format() {
        let entries = vec![Entry::new(Month::Jun, 2024, "x", "")];
        let options = PrettyOptions {
            date_format: "%Y-%m".to_string(),
        };
        let out = plain(|| format_entries_pretty(&entries, "Timeline", &options));
        assert!(out.contains("2024-06  x"));
    }

    #[test]
    fn test_format_entries_pretty_time_format_falls_back_to_iso() {
        let entries = vec![Entry::new(Month::Jun, 2024, "x", "")];
        let options = PrettyOptions {
            date_format: "%Y-%m %H:%M".to_string(),
        };
        let out = plain(|| format_entries_pretty(&entries, "Timeline", &options));
        assert!(out.contains("2024-06-01  x"));
    }

    #[test]
    fn test_entries_label_pluralizes() {
        assert_eq!(entries_label(0), "0 entries");
        assert_eq!(entries_label(1), "1 entry");
        assert_eq!(entries_label(3), "3 entries");
    }

    #[test]
    fn test_format_groups_pretty() {
        let entries = parse_timeline("Jan, 2019: Loose\n# Work\nJan, 2020: A\nFeb, 2020: B");
        let out = plain(|| format_groups_pretty(&group_by_category(&entries), &PrettyOptions::default()));
        assert!(out.contains("Uncategorized (1)"));
        assert!(out.contains("Work (2)"));
        assert!(out.contains("  Feb 2020  B"));
    }

    #[test]
    fn test_format_categories_pretty() {
        let entries = parse_timeline("# Work\nJan, 2020: A\nJun, 2022: B\n# Play\nMay, 2021: C");
        let out = plain(|| format_categories_pretty(&categories(&entries), &PrettyOptions::default()));
        assert!(out.contains("Categories (2)"));
        assert!(out.contains("Work  2 entries  Jan 2020 – Jun 2022"));
        assert!(out.contains("Play  1 entry  May 2021"));
    }
}
