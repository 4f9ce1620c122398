//! Report formatting and printing utilities.
//!
//! Every printer has a `_to` variant taking a writer so output can be tested.

use std::fmt::Display;
use std::io::{self, Write};
use std::path::Path;

use colored::Colorize;

use crate::migration::{EntryEvent, MigrationSummary};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Short label for a file in per-entry lines.
fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

pub fn print_reading(path: &Path) {
    println!("Reading {}...", path.display());
}

pub fn print_saving(path: &Path) {
    println!("Saving {}...", path.display());
}

/// Print one line per merge event.
pub fn print_events(events: &[EntryEvent], content: &Path, i18n: &Path) {
    print_events_to(events, content, i18n, &mut io::stdout().lock());
}

pub fn print_events_to<W: Write>(events: &[EntryEvent], content: &Path, i18n: &Path, writer: &mut W) {
    let content = file_label(content);
    let i18n = file_label(i18n);

    for event in events {
        let _ = match event {
            EntryEvent::ContentUpdated { raw_key, reference } => writeln!(
                writer,
                "  {}: {} {} {}",
                content,
                raw_key,
                "->".blue(),
                reference.cyan()
            ),
            EntryEvent::I18nAdded { key, value } => {
                writeln!(writer, "  {}: {} = {}", i18n, key.green(), value)
            }
            EntryEvent::I18nPreserved { key } => writeln!(
                writer,
                "  {}: {} {}",
                i18n,
                key,
                "(preserved)".dimmed()
            ),
        };
    }
}

/// Print the migration totals.
pub fn print_migration_summary(summary: &MigrationSummary, content: &Path, i18n: &Path, is_apply: bool) {
    print_migration_summary_to(summary, content, i18n, is_apply, &mut io::stdout().lock());
}

pub fn print_migration_summary_to<W: Write>(
    summary: &MigrationSummary,
    content: &Path,
    i18n: &Path,
    is_apply: bool,
    writer: &mut W,
) {
    let content = file_label(content);
    let i18n = file_label(i18n);

    let _ = writeln!(writer);
    let _ = writeln!(writer, "{}", "=== Summary ===".bold());
    let _ = writeln!(
        writer,
        "{} updated: {} entries",
        content, summary.content_updated
    );
    let _ = writeln!(writer, "{} new entries: {}", i18n, summary.i18n_added);
    let _ = writeln!(writer, "{} preserved: {}", i18n, summary.i18n_preserved);
    let _ = writeln!(writer, "Total processed: {} keys", summary.total);

    if !is_apply {
        let _ = writeln!(
            writer,
            "{} {}",
            "note:".bold().cyan(),
            "dry run, no files were written"
        );
    }
}

pub fn print_wrote(path: &Path) {
    println!("{} Wrote: {}", SUCCESS_MARK.green(), path.display());
}

pub fn print_not_found(path: &Path) {
    eprintln!(
        "{} File not found: {}",
        FAILURE_MARK.red(),
        path.display()
    );
}

pub fn print_read_failure(path: &Path, err: &dyn Display) {
    eprintln!(
        "{} Failed to read {}: {}",
        FAILURE_MARK.red(),
        path.display(),
        err
    );
}

pub fn print_parse_failure(path: &Path, err: &dyn Display) {
    eprintln!(
        "{} Failed to parse {}: {}",
        FAILURE_MARK.red(),
        path.display(),
        err
    );
}

/// Print a warning about files that were skipped.
pub fn print_skipped_warning(count: usize) {
    print_skipped_warning_to(count, &mut io::stderr().lock());
}

pub fn print_skipped_warning_to<W: Write>(count: usize, writer: &mut W) {
    if count > 0 {
        let _ = writeln!(
            writer,
            "{} {} file(s) skipped",
            "warning:".bold().yellow(),
            count
        );
    }
}
