//! Error types for translation store operations

use thiserror::Error;

/// Errors raised while reading, validating or writing a translation file
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("document root is not a JSON object")]
    NotAnObject,

    #[error("entry '{lang}' is not a flat string table: {reason}")]
    InvalidTable { lang: String, reason: String },

    #[error("no '{0}' entry in document")]
    MissingLanguage(String),

    #[error("'{0}' entry is empty")]
    EmptyTable(String),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
