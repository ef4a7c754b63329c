//! Translation store: discovery, sampling and updates of `stf.<lang>.json` files
//!
//! The store holds no state between calls. Every operation rediscovers the
//! file set and handles each file in a single read-modify-write pass, so a
//! failure on one file never stops the others.

mod report;

pub use report::{BatchReport, FileReport};

use std::path::{Path, PathBuf};

use crate::error::{StoreError, StoreResult};
use crate::model::{LanguageCode, StoreConfig, TranslationDocument};
use crate::utils::path::{read_file, write_file};

/// Resolved settings for a store
#[derive(Debug, Clone)]
pub struct StoreOptions {
    pub dir: PathBuf,
    pub prefix: String,
    pub suffix: String,
    pub indent: usize,
}

impl StoreOptions {
    /// Default naming and formatting rooted at `dir`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let defaults = StoreConfig::default();
        Self {
            dir: dir.into(),
            prefix: defaults.prefix,
            suffix: defaults.suffix,
            indent: defaults.indent,
        }
    }
}

/// One discovered translation file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationFile {
    pub path: PathBuf,
    pub lang: LanguageCode,
}

impl TranslationFile {
    pub fn load(&self) -> StoreResult<TranslationDocument> {
        let text = read_file(&self.path)?;
        TranslationDocument::parse(self.lang.clone(), &text)
    }

    pub fn save(&self, doc: &TranslationDocument, indent: usize) -> StoreResult<()> {
        let text = doc.to_json_string(indent)?;
        write_file(&self.path, &text)?;
        Ok(())
    }
}

/// Which files an `add` touches
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LanguageFilter {
    #[default]
    All,
    Only(LanguageCode),
}

impl LanguageFilter {
    pub fn matches(&self, lang: &LanguageCode) -> bool {
        match self {
            LanguageFilter::All => true,
            LanguageFilter::Only(target) => target == lang,
        }
    }
}

/// First entry of a file's table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleEntry {
    pub key: String,
    pub value: String,
}

/// What `add` did to a file's table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    Inserted,
    Replaced { previous: String },
    Unchanged,
}

#[derive(Debug, Clone)]
pub struct TranslationStore {
    options: StoreOptions,
}

impl TranslationStore {
    pub fn new(options: StoreOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &StoreOptions {
        &self.options
    }

    pub fn dir(&self) -> &Path {
        &self.options.dir
    }

    /// Find all translation files, sorted by path.
    ///
    /// A missing directory yields an empty list.
    pub fn discover(&self) -> Vec<TranslationFile> {
        let opts = &self.options;
        let pattern = format!(
            "{}/{}*{}",
            glob::Pattern::escape(&opts.dir.to_string_lossy()),
            glob::Pattern::escape(&opts.prefix),
            glob::Pattern::escape(&opts.suffix)
        );
        tracing::debug!(%pattern, "discovering translation files");

        let paths = match glob::glob(&pattern) {
            Ok(paths) => paths,
            Err(e) => {
                tracing::debug!(error = %e, "invalid discovery pattern");
                return Vec::new();
            }
        };

        let mut files: Vec<TranslationFile> = paths
            .filter_map(|entry| match entry {
                Ok(path) => Some(path),
                Err(e) => {
                    tracing::debug!(error = %e, "skipping unreadable path");
                    None
                }
            })
            .filter(|path| path.is_file())
            .filter_map(|path| {
                let lang = LanguageCode::from_path(&path, &opts.prefix, &opts.suffix)?;
                Some(TranslationFile { path, lang })
            })
            .collect();
        files.sort_by(|a, b| a.path.cmp(&b.path));

        tracing::debug!(count = files.len(), "discovery finished");
        files
    }

    /// Language codes of all discovered files
    pub fn list(&self) -> Vec<LanguageCode> {
        self.discover().into_iter().map(|f| f.lang).collect()
    }

    /// First key/value of every file's table
    pub fn sample(&self) -> BatchReport<SampleEntry> {
        let mut report = BatchReport::new();
        for file in self.discover() {
            let result = sample_file(&file);
            if let Err(e) = &result {
                tracing::debug!(lang = %file.lang, error = %e, "sample failed");
            }
            report.push(FileReport {
                lang: file.lang,
                path: file.path,
                result,
            });
        }
        report
    }

    /// Set `key` to `value` in every file selected by `filter`.
    ///
    /// A file lacking its language entry gets a new one.
    pub fn add(&self, key: &str, value: &str, filter: &LanguageFilter) -> BatchReport<AddOutcome> {
        let mut report = BatchReport::new();
        for file in self.discover() {
            if !filter.matches(&file.lang) {
                continue;
            }
            let result = self.add_to_file(&file, key, value);
            if let Err(e) = &result {
                tracing::debug!(lang = %file.lang, error = %e, "update failed");
            }
            report.push(FileReport {
                lang: file.lang,
                path: file.path,
                result,
            });
        }
        report
    }

    fn add_to_file(&self, file: &TranslationFile, key: &str, value: &str) -> StoreResult<AddOutcome> {
        let mut doc = file.load()?;
        if !doc.has_table() {
            tracing::debug!(lang = %file.lang, "creating missing language entry");
        }

        let outcome = match doc.table_mut_or_insert().set(key, value) {
            None => AddOutcome::Inserted,
            Some(previous) if previous == value => AddOutcome::Unchanged,
            Some(previous) => AddOutcome::Replaced { previous },
        };

        file.save(&doc, self.options.indent)?;
        tracing::debug!(lang = %file.lang, path = %file.path.display(), "written");
        Ok(outcome)
    }
}

fn sample_file(file: &TranslationFile) -> StoreResult<SampleEntry> {
    let doc = file.load()?;
    let (key, value) = doc
        .table()?
        .first()
        .ok_or_else(|| StoreError::EmptyTable(file.lang.to_string()))?;
    Ok(SampleEntry {
        key: key.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::{tempdir, TempDir};

    fn store_with(files: &[(&str, &str)]) -> (TempDir, TranslationStore) {
        let dir = tempdir().unwrap();
        for (name, content) in files {
            fs::write(dir.path().join(name), content).unwrap();
        }
        let store = TranslationStore::new(StoreOptions::new(dir.path()));
        (dir, store)
    }

    fn read(dir: &TempDir, name: &str) -> String {
        fs::read_to_string(dir.path().join(name)).unwrap()
    }

    #[test]
    fn test_list_sorted() {
        let (_dir, store) = store_with(&[
            ("stf.zh_CN.json", "{}"),
            ("stf.en.json", "{}"),
            ("other.json", "{}"),
            ("stf.en.json.bak", "{}"),
        ]);
        assert_eq!(store.list(), vec![LanguageCode::new("en"), LanguageCode::new("zh_CN")]);
    }

    #[test]
    fn test_missing_directory_is_empty() {
        let dir = tempdir().unwrap();
        let store = TranslationStore::new(StoreOptions::new(dir.path().join("nope")));
        assert!(store.discover().is_empty());
        assert!(store.sample().is_empty());
    }

    #[test]
    fn test_directory_with_glob_characters() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("lang[1]");
        fs::create_dir(&nested).unwrap();
        fs::write(nested.join("stf.en.json"), "{}").unwrap();

        let store = TranslationStore::new(StoreOptions::new(&nested));
        assert_eq!(store.list(), vec![LanguageCode::new("en")]);
    }

    #[test]
    fn test_sample_isolates_failures() {
        let (_dir, store) = store_with(&[
            ("stf.de.json", "{not json"),
            ("stf.en.json", r#"{"en": {"greeting": "hello", "bye": "bye"}}"#),
            ("stf.fr.json", r#"{"fr": {}}"#),
            ("stf.ja.json", r#"{"en": {"x": "y"}}"#),
        ]);
        let report = store.sample();
        assert_eq!(report.len(), 4);

        let ok: Vec<_> = report.succeeded().collect();
        assert_eq!(ok.len(), 1);
        assert_eq!(ok[0].0, "en");
        assert_eq!(ok[0].1.key, "greeting");
        assert_eq!(ok[0].1.value, "hello");

        let errors: Vec<_> = report.failed().collect();
        assert!(matches!(errors[0].result, Err(StoreError::Json(_))));
        assert!(matches!(errors[1].result, Err(StoreError::EmptyTable(_))));
        assert!(matches!(errors[2].result, Err(StoreError::MissingLanguage(_))));
    }

    #[test]
    fn test_add_all_languages() {
        let (dir, store) = store_with(&[
            ("stf.en.json", r#"{"en": {"greeting": "hello"}}"#),
            ("stf.zh_CN.json", r#"{"zh_CN": {"greeting": "你好"}}"#),
        ]);
        let report = store.add("farewell", "bye", &LanguageFilter::All);
        assert!(!report.has_errors());
        assert_eq!(report.len(), 2);

        assert_eq!(
            read(&dir, "stf.en.json"),
            "{\n  \"en\": {\n    \"greeting\": \"hello\",\n    \"farewell\": \"bye\"\n  }\n}"
        );
        let zh = read(&dir, "stf.zh_CN.json");
        assert!(zh.contains("\"greeting\": \"你好\""));
        assert!(zh.contains("\"farewell\": \"bye\""));
    }

    #[test]
    fn test_add_is_idempotent() {
        let (dir, store) = store_with(&[("stf.en.json", r#"{"en": {"a": "1"}}"#)]);
        let first = store.add("b", "2", &LanguageFilter::All);
        let after_first = read(&dir, "stf.en.json");
        let second = store.add("b", "2", &LanguageFilter::All);

        assert_eq!(first.files[0].result.as_ref().unwrap(), &AddOutcome::Inserted);
        assert_eq!(second.files[0].result.as_ref().unwrap(), &AddOutcome::Unchanged);
        assert_eq!(read(&dir, "stf.en.json"), after_first);
    }

    #[test]
    fn test_add_replaces_value() {
        let (dir, store) = store_with(&[("stf.en.json", r#"{"en": {"a": "1", "b": "2"}}"#)]);
        let report = store.add("a", "one", &LanguageFilter::All);
        assert_eq!(
            report.files[0].result.as_ref().unwrap(),
            &AddOutcome::Replaced {
                previous: "1".into()
            }
        );
        let doc = TranslationDocument::parse(LanguageCode::new("en"), &read(&dir, "stf.en.json")).unwrap();
        assert_eq!(doc.table().unwrap().first(), Some(("a", "one")));
        assert_eq!(doc.table().unwrap().get("b"), Some("2"));
    }

    #[test]
    fn test_add_single_language_leaves_others_untouched() {
        let fr = "{\"fr\":{\"farewell\":\"au revoir\"}}";
        let (dir, store) = store_with(&[
            ("stf.en.json", r#"{"en": {}}"#),
            ("stf.fr.json", fr),
        ]);
        let filter = LanguageFilter::Only(LanguageCode::new("en"));
        let report = store.add("farewell", "bye", &filter);

        assert_eq!(report.len(), 1);
        assert_eq!(report.files[0].lang, "en");
        assert_eq!(read(&dir, "stf.fr.json"), fr);
        assert!(read(&dir, "stf.en.json").contains("\"farewell\": \"bye\""));
    }

    #[test]
    fn test_add_unknown_language_touches_nothing() {
        let (_dir, store) = store_with(&[("stf.en.json", "{}")]);
        let filter = LanguageFilter::Only(LanguageCode::new("xx"));
        assert!(store.add("k", "v", &filter).is_empty());
    }

    #[test]
    fn test_add_creates_missing_language_entry() {
        let (dir, store) = store_with(&[("stf.en.json", r#"{"legacy": {"k": "v"}}"#)]);
        store.add("k", "v", &LanguageFilter::All);
        let text = read(&dir, "stf.en.json");
        assert!(text.contains("\"legacy\""));
        assert!(text.contains("\"en\": {\n    \"k\": \"v\"\n  }"));
    }

    #[test]
    fn test_add_continues_past_bad_file() {
        let bad = "{\"de\": [";
        let (dir, store) = store_with(&[
            ("stf.de.json", bad),
            ("stf.en.json", r#"{"en": {}}"#),
        ]);
        let report = store.add("k", "v", &LanguageFilter::All);

        assert_eq!(report.failed().count(), 1);
        assert_eq!(report.succeeded().count(), 1);
        assert_eq!(read(&dir, "stf.de.json"), bad);
        assert!(read(&dir, "stf.en.json").contains("\"k\": \"v\""));
    }

    #[test]
    fn test_add_empty_key() {
        let (dir, store) = store_with(&[("stf.en.json", r#"{"en": {"a": "1"}}"#)]);
        let report = store.add("", "v", &LanguageFilter::All);
        assert!(!report.has_errors());
        assert_eq!(
            read(&dir, "stf.en.json"),
            "{\n  \"en\": {\n    \"a\": \"1\",\n    \"\": \"v\"\n  }\n}"
        );
    }

    #[test]
    fn test_custom_indent() {
        let (dir, store) = store_with(&[("stf.en.json", "{}")]);
        let mut options = store.options().clone();
        options.indent = 4;
        TranslationStore::new(options).add("k", "v", &LanguageFilter::All);
        assert_eq!(
            read(&dir, "stf.en.json"),
            "{\n    \"en\": {\n        \"k\": \"v\"\n    }\n}"
        );
    }
}
