//! Add command implementation

use anyhow::Result;
use colored::Colorize;

use crate::cli::context::Context;
use crate::store::{AddOutcome, LanguageFilter};

/// Set `key` to `value` in every file matched by `filter`
pub fn execute(ctx: &Context, key: &str, value: &str, filter: &LanguageFilter) -> Result<()> {
    let report = ctx.store.add(key, value, filter);

    for file in &report.files {
        match &file.result {
            Ok(outcome) => {
                let note = match outcome {
                    AddOutcome::Inserted => String::new(),
                    AddOutcome::Replaced { previous } => {
                        format!(" (was '{}')", previous).dimmed().to_string()
                    }
                    AddOutcome::Unchanged => " (unchanged)".dimmed().to_string(),
                };
                ctx.print_success(&format!(
                    "Added to {}: {} = {}{}",
                    file.lang,
                    key.cyan(),
                    value,
                    note
                ));
            }
            Err(e) => ctx.print_error(&format!("Error updating {}: {}", file.lang, e)),
        }
    }

    if report.has_errors() {
        ctx.print_warning(&format!(
            "{} of {} files were not updated",
            report.failed().count(),
            report.len()
        ));
    }

    if report.is_empty() {
        let message = match filter {
            LanguageFilter::Only(lang) => format!(
                "No translation file for language '{}' in {}",
                lang,
                ctx.store.dir().display()
            ),
            LanguageFilter::All => format!(
                "No translation files found in {}",
                ctx.store.dir().display()
            ),
        };
        ctx.print_warning(&message);
    }

    Ok(())
}
