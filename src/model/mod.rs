//! Core data models for stf-lang

mod config;
mod document;
mod language;

pub use config::{Config, StoreConfig};
pub use document::{sample_fragment, TranslationDocument, TranslationTable};
pub use language::LanguageCode;
