//! Language code derived from translation file names

use std::fmt;
use std::path::Path;

/// Identifier of a translation target, e.g. `en` or `zh_CN`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LanguageCode(String);

impl LanguageCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Derive the code from a file name such as `stf.zh_CN.json`.
    ///
    /// Exactly one `prefix` and one `suffix` are stripped. Names missing
    /// either, or leaving nothing in between, yield `None`.
    pub fn from_path(path: &Path, prefix: &str, suffix: &str) -> Option<Self> {
        let name = path.file_name()?.to_str()?;
        let code = name.strip_prefix(prefix)?.strip_suffix(suffix)?;
        if code.is_empty() {
            return None;
        }
        Some(Self(code.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for LanguageCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for LanguageCode {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for LanguageCode {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
