//! Catalog rebuild use case
//!
//! Orchestrates the full scan: list the corpus, run the document scanner
//! over every note, replace the catalog contents and sort chronologically.

use crate::domain::catalog::Catalog;
use crate::domain::tags::DocumentScanner;
use crate::error::Result;
use crate::infrastructure::repository::DocumentSource;
use crate::infrastructure::Config;
use log::debug;
use std::path::Path;

/// Service that rebuilds a catalog from a document corpus
pub struct RebuildCatalogService<'a, S: DocumentSource> {
    source: &'a S,
}

impl<'a, S: DocumentSource> RebuildCatalogService<'a, S> {
    pub fn new(source: &'a S) -> Self {
        RebuildCatalogService { source }
    }

    /// Replace `catalog` with a fresh, date-sorted scan of the corpus.
    ///
    /// Settings are taken from the resolved `config` once, up front. Items
    /// are staged locally and swapped in at the end, so a failed document
    /// read leaves the previous catalog contents untouched and no partial
    /// state is ever visible.
    pub fn execute(&self, config: &Config, catalog: &mut Catalog) -> Result<()> {
        let scanner = DocumentScanner::with_prefix(&config.tag_prefix);
        let documents = self
            .source
            .list_documents(config.include_subdirectories)?;
        let document_count = documents.len();

        let mut items = Vec::new();
        for filename in documents {
            let text = self.source.read_document(&filename)?;
            items.extend(scanner.scan(Path::new(&filename), &text));
        }

        debug!(
            "rebuilt catalog: {} documents scanned, {} review items",
            document_count,
            items.len()
        );

        catalog.set_all(items);
        catalog.sort_by_date();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RevtagError;
    use chrono::NaiveDate;
    use std::path::PathBuf;

    /// In-memory corpus standing in for the filesystem
    struct MemorySource {
        documents: Vec<(String, String)>,
        fail_on: Option<String>,
    }

    impl MemorySource {
        fn new(documents: Vec<(&str, &str)>) -> Self {
            MemorySource {
                documents: documents
                    .into_iter()
                    .map(|(name, text)| (name.to_string(), text.to_string()))
                    .collect(),
                fail_on: None,
            }
        }
    }

    impl DocumentSource for MemorySource {
        fn list_documents(&self, _include_subdirectories: bool) -> Result<Vec<String>> {
            Ok(self.documents.iter().map(|(name, _)| name.clone()).collect())
        }

        fn read_document(&self, filename: &str) -> Result<String> {
            if self.fail_on.as_deref() == Some(filename) {
                return Err(RevtagError::Config(format!("unreadable: {}", filename)));
            }
            self.documents
                .iter()
                .find(|(name, _)| name == filename)
                .map(|(_, text)| text.clone())
                .ok_or_else(|| RevtagError::Config(format!("missing: {}", filename)))
        }
    }

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_rebuild_aggregates_and_sorts_across_documents() {
        let source = MemorySource::new(vec![
            ("a.md", "# A\n#review/2026/3/1\n"),
            ("b.md", "# B\n#review/2026/1/15\n#review/2026/2/1\n"),
        ]);
        let service = RebuildCatalogService::new(&source);
        let mut catalog = Catalog::new();

        service.execute(&Config::new(), &mut catalog).unwrap();

        let dates: Vec<NaiveDate> = catalog.items().iter().map(|i| i.date).collect();
        assert_eq!(
            dates,
            vec![ymd(2026, 1, 15), ymd(2026, 2, 1), ymd(2026, 3, 1)]
        );
        assert_eq!(catalog.items()[0].source_file, PathBuf::from("b.md"));
        assert_eq!(catalog.items()[0].title_path, vec!["B"]);
    }

    #[test]
    fn test_rebuild_replaces_previous_contents() {
        let populated = MemorySource::new(vec![("a.md", "#review/2026/1/1\n")]);
        let empty = MemorySource::new(vec![]);
        let mut catalog = Catalog::new();

        RebuildCatalogService::new(&populated)
            .execute(&Config::new(), &mut catalog)
            .unwrap();
        assert_eq!(catalog.len(), 1);

        // A second rebuild over an empty corpus fully replaces, never merges
        RebuildCatalogService::new(&empty)
            .execute(&Config::new(), &mut catalog)
            .unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_rebuild_equal_dates_keep_corpus_order() {
        let source = MemorySource::new(vec![
            ("a.md", "#review/2026/1/1\n"),
            ("b.md", "#review/2026/1/1\n"),
        ]);
        let mut catalog = Catalog::new();

        RebuildCatalogService::new(&source)
            .execute(&Config::new(), &mut catalog)
            .unwrap();

        assert_eq!(catalog.items()[0].source_file, PathBuf::from("a.md"));
        assert_eq!(catalog.items()[1].source_file, PathBuf::from("b.md"));
    }

    #[test]
    fn test_rebuild_uses_configured_prefix() {
        let source = MemorySource::new(vec![(
            "a.md",
            "#study/2026/1/1 and #review/2026/2/2\n",
        )]);
        let mut config = Config::new();
        config.tag_prefix = "study".to_string();
        let mut catalog = Catalog::new();

        RebuildCatalogService::new(&source)
            .execute(&config, &mut catalog)
            .unwrap();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.items()[0].tag, "#study/2026/1/1");
    }

    #[test]
    fn test_rebuild_failed_read_keeps_previous_catalog() {
        let good = MemorySource::new(vec![("a.md", "#review/2026/1/1\n")]);
        let mut catalog = Catalog::new();
        RebuildCatalogService::new(&good)
            .execute(&Config::new(), &mut catalog)
            .unwrap();

        let mut failing = MemorySource::new(vec![
            ("a.md", "#review/2026/5/5\n"),
            ("b.md", "#review/2026/6/6\n"),
        ]);
        failing.fail_on = Some("b.md".to_string());

        let result = RebuildCatalogService::new(&failing).execute(&Config::new(), &mut catalog);

        assert!(result.is_err());
        // The failed rebuild published nothing
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.items()[0].date, ymd(2026, 1, 1));
    }
}
