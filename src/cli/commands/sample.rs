//! Sample command implementation

use anyhow::Result;
use colored::Colorize;

use crate::cli::context::Context;
use crate::model::sample_fragment;

/// Print the first entry of each language file, reporting bad files inline
pub fn execute(ctx: &Context) -> Result<()> {
    let report = ctx.store.sample();

    println!("{}", "Sample from each language file:".bold());
    for file in &report.files {
        match &file.result {
            Ok(entry) => {
                println!("\n{}:", file.lang.to_string().cyan());
                println!("  {}", sample_fragment(&file.lang, &entry.key, &entry.value));
            }
            Err(e) => println!("\n  {}: {} - {}", file.lang, "Error".red(), e),
        }
    }

    if report.has_errors() {
        println!();
        ctx.print_warning(&format!(
            "{} of {} files could not be sampled",
            report.failed().count(),
            report.len()
        ));
    }

    if report.is_empty() {
        ctx.print_warning(&format!(
            "No translation files found in {}",
            ctx.store.dir().display()
        ));
    }

    Ok(())
}
