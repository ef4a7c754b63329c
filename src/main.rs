//! stf-lang - Translation File Manager

use anyhow::Result;
use clap::Parser;

use stf_lang::cli::{commands, Cli, Context};
use stf_lang::utils::logging::init_logging;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);
    if cli.no_color {
        colored::control::set_override(false);
    }

    let ctx = Context::from_cli(&cli)?;
    commands::execute(&ctx, &cli.command)
}
