//! List command implementation

use anyhow::Result;
use colored::Colorize;

use crate::cli::context::Context;
use crate::model::LanguageCode;

/// Print every discovered language code and return them
pub fn execute(ctx: &Context) -> Result<Vec<LanguageCode>> {
    let langs = ctx.store.list();

    println!("{}", "Available languages:".bold());
    for lang in &langs {
        println!("  {}", lang.to_string().cyan());
    }

    if langs.is_empty() {
        ctx.print_warning(&format!(
            "No translation files found in {}",
            ctx.store.dir().display()
        ));
    }

    Ok(langs)
}
