//! Translation tables and the JSON documents that hold them

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};

use super::LanguageCode;
use crate::error::{StoreError, StoreResult};

/// Flat, insertion-ordered mapping of translation key to translated text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranslationTable(IndexMap<String, String>);

impl TranslationTable {
    pub fn new() -> Self {
        Self::default()
    }

    fn from_value(lang: &LanguageCode, value: &Value) -> StoreResult<Self> {
        if !value.is_object() {
            return Err(StoreError::InvalidTable {
                lang: lang.to_string(),
                reason: format!("expected an object, found {}", kind(value)),
            });
        }
        Self::deserialize(value).map_err(|e| StoreError::InvalidTable {
            lang: lang.to_string(),
            reason: e.to_string(),
        })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Set `key` to `value`, returning the previous value.
    /// Existing keys keep their position; new keys are appended.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    /// First entry in stored order
    pub fn first(&self) -> Option<(&str, &str)> {
        self.0.first().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TranslationTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Full content of one translation file.
///
/// Only the entry keyed by the file's language is typed. Every other
/// top-level entry is carried through untouched, in its original position.
#[derive(Debug, Clone)]
pub struct TranslationDocument {
    lang: LanguageCode,
    root: Map<String, Value>,
    table: Option<TranslationTable>,
}

impl TranslationDocument {
    /// Empty document for `lang`, with no language entry yet
    pub fn new(lang: LanguageCode) -> Self {
        Self {
            lang,
            root: Map::new(),
            table: None,
        }
    }

    /// Parse and validate a document.
    ///
    /// A missing language entry is accepted here; callers decide whether
    /// that is an error (`table`) or should be created (`table_mut_or_insert`).
    pub fn parse(lang: LanguageCode, text: &str) -> StoreResult<Self> {
        let Value::Object(root) = serde_json::from_str::<Value>(text)? else {
            return Err(StoreError::NotAnObject);
        };
        let table = root
            .get(lang.as_str())
            .map(|entry| TranslationTable::from_value(&lang, entry))
            .transpose()?;
        Ok(Self { lang, root, table })
    }

    pub fn has_table(&self) -> bool {
        self.table.is_some()
    }

    pub fn table(&self) -> StoreResult<&TranslationTable> {
        self.table
            .as_ref()
            .ok_or_else(|| StoreError::MissingLanguage(self.lang.to_string()))
    }

    pub fn table_mut_or_insert(&mut self) -> &mut TranslationTable {
        self.table.get_or_insert_with(TranslationTable::new)
    }

    /// Serialize with `indent` spaces per level.
    ///
    /// Non-ASCII text is written as-is and no trailing newline is emitted.
    pub fn to_json_string(&self, indent: usize) -> StoreResult<String> {
        let mut root = self.root.clone();
        if let Some(table) = &self.table {
            // replaces in place when the key already exists
            root.insert(self.lang.to_string(), serde_json::to_value(table)?);
        }

        let indent = " ".repeat(indent);
        let mut buf = Vec::new();
        let mut ser =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(indent.as_bytes()));
        root.serialize(&mut ser)?;

        String::from_utf8(buf)
            .map_err(|e| StoreError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
    }
}

/// Minimal one-entry fragment, e.g. `{"en":{"greeting":"hello"}}`
pub fn sample_fragment(lang: &LanguageCode, key: &str, value: &str) -> String {
    let mut inner = Map::new();
    inner.insert(key.to_string(), Value::String(value.to_string()));
    let mut outer = Map::new();
    outer.insert(lang.to_string(), Value::Object(inner));
    Value::Object(outer).to_string()
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
