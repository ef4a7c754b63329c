//! stf-lang - Translation File Manager
//!
//! Manages flat key/value translation tables kept as one JSON document per
//! language, named `stf.<lang>.json`.
//!
//! # Features
//!
//! - Discover translation files and list their language codes
//! - Show the first entry of every language table
//! - Add or update a key in every language, or in a single one
//! - Per-file error isolation with a batch report

pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
pub mod utils;

pub use error::{StoreError, StoreResult};
pub use model::{Config, LanguageCode, TranslationDocument, TranslationTable};
pub use store::{AddOutcome, BatchReport, LanguageFilter, StoreOptions, TranslationStore};
