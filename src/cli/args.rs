//! CLI argument definitions using Clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "stf-lang")]
#[command(about = "Translation file manager - list, sample and update stf.<lang>.json files")]
#[command(version)]
#[command(author)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Translation directory (default: res/common/lang/translations)
    #[arg(short, long, global = true)]
    pub dir: Option<String>,

    /// Configuration file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all languages
    #[command(visible_alias = "ls")]
    List,

    /// Show the first entry of each language file
    Sample,

    /// Add or update a translation in every language file
    Add {
        /// Translation key
        key: String,
        /// Translation value
        value: String,
    },

    /// Add or update a translation in one language file
    AddLang {
        /// Language code, e.g. en or zh_CN
        lang: String,
        /// Translation key
        key: String,
        /// Translation value
        value: String,
    },
}
