//! CLI command implementations

pub mod add;
pub mod list;
pub mod sample;

use anyhow::Result;

use crate::cli::args::Commands;
use crate::cli::context::Context;
use crate::model::LanguageCode;
use crate::store::LanguageFilter;

/// Dispatch a parsed subcommand
pub fn execute(ctx: &Context, command: &Commands) -> Result<()> {
    match command {
        Commands::List => list::execute(ctx).map(|_| ()),
        Commands::Sample => sample::execute(ctx),
        Commands::Add { key, value } => add::execute(ctx, key, value, &LanguageFilter::All),
        Commands::AddLang { lang, key, value } => add::execute(
            ctx,
            key,
            value,
            &LanguageFilter::Only(LanguageCode::new(lang.as_str())),
        ),
    }
}
