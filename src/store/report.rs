//! Per-file results of a batch operation

use std::path::PathBuf;

use crate::error::StoreResult;
use crate::model::LanguageCode;

/// Outcome for one translation file
#[derive(Debug)]
pub struct FileReport<T> {
    pub lang: LanguageCode,
    pub path: PathBuf,
    pub result: StoreResult<T>,
}

/// Ordered outcomes for every file a batch operation visited
#[derive(Debug)]
pub struct BatchReport<T> {
    pub files: Vec<FileReport<T>>,
}

impl<T> BatchReport<T> {
    pub fn new() -> Self {
        Self { files: Vec::new() }
    }

    pub fn push(&mut self, report: FileReport<T>) {
        self.files.push(report);
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn has_errors(&self) -> bool {
        self.files.iter().any(|f| f.result.is_err())
    }

    pub fn succeeded(&self) -> impl Iterator<Item = (&LanguageCode, &T)> {
        self.files
            .iter()
            .filter_map(|f| f.result.as_ref().ok().map(|v| (&f.lang, v)))
    }

    pub fn failed(&self) -> impl Iterator<Item = &FileReport<T>> {
        self.files.iter().filter(|f| f.result.is_err())
    }
}

impl<T> Default for BatchReport<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;

    #[test]
    fn test_split_success_and_failure() {
        let mut report = BatchReport::new();
        report.push(FileReport {
            lang: LanguageCode::new("en"),
            path: PathBuf::from("stf.en.json"),
            result: Ok(1),
        });
        report.push(FileReport {
            lang: LanguageCode::new("fr"),
            path: PathBuf::from("stf.fr.json"),
            result: Err(StoreError::EmptyTable("fr".into())),
        });

        assert_eq!(report.len(), 2);
        assert!(report.has_errors());
        assert_eq!(report.succeeded().count(), 1);
        assert_eq!(report.failed().next().unwrap().lang, "fr");
    }
}
