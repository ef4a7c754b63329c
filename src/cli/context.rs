//! Command execution context

use anyhow::Result;
use colored::Colorize;

use crate::cli::args::Cli;
use crate::store::TranslationStore;

/// Common context for command execution
pub struct Context {
    pub store: TranslationStore,
}

impl Context {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config = crate::config::load_config(cli.config.as_deref())?;
        let options = crate::config::store_options(&config, cli.dir.as_deref());
        tracing::debug!(dir = %options.dir.display(), "using translation directory");

        Ok(Self {
            store: TranslationStore::new(options),
        })
    }

    /// Print a success message
    pub fn print_success(&self, message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Print a warning message
    pub fn print_warning(&self, message: &str) {
        println!("{} {}", "⚠".yellow(), message);
    }

    /// Print an error message
    pub fn print_error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }
}
