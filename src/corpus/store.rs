// file: src/corpus/store.rs
// description: flat JSON persistence for the document collection
// reference: https://docs.rs/serde_json

use crate::error::{CorpusError, Result};
use crate::models::Document;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Wire format for one store entry, keyed by title in the outer map.
/// `tokens` and `word_freq` are optional so older stores stay readable.
#[derive(Debug, Serialize, Deserialize)]
struct StoredDocument {
    content: String,
    #[serde(default)]
    tokens: Vec<String>,
    #[serde(default)]
    word_freq: HashMap<String, usize>,
}

/// Outcome of a load: how many entries were restored and which were skipped
/// for lacking a `content` field or otherwise failing to deserialize.
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub loaded: usize,
    pub skipped: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub total_documents: usize,
    pub exported_at: String,
}

#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
    pretty: bool,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>, pretty: bool) -> Self {
        Self {
            path: path.into(),
            pretty,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the store file, restoring documents in file order. A missing
    /// file is not an error; it yields an empty collection.
    pub fn load(&self) -> Result<(Vec<Document>, LoadReport)> {
        if !self.path.exists() {
            debug!("No existing store found at {:?}, starting fresh", self.path);
            return Ok((Vec::new(), LoadReport::default()));
        }

        let contents =
            fs::read_to_string(&self.path).map_err(|source| CorpusError::FileOperation {
                path: self.path.clone(),
                source,
            })?;

        let entries: Map<String, Value> = serde_json::from_str(&contents)?;

        let mut documents = Vec::new();
        let mut skipped = Vec::new();

        for (title, value) in entries {
            match serde_json::from_value::<StoredDocument>(value) {
                Ok(stored) => {
                    documents.push(Document::restore(
                        title,
                        stored.content,
                        stored.tokens,
                        stored.word_freq,
                    ));
                }
                Err(e) => {
                    warn!("Skipping malformed store entry '{}': {}", title, e);
                    skipped.push(title);
                }
            }
        }

        let report = LoadReport {
            loaded: documents.len(),
            skipped,
        };

        info!(
            "Loaded {} documents from {:?} ({} skipped)",
            report.loaded,
            self.path,
            report.skipped.len()
        );

        Ok((documents, report))
    }

    /// Writes the full collection to the bound path.
    pub fn save(&self, documents: &[Document]) -> Result<()> {
        self.write(documents, &self.path, self.pretty)?;
        debug!("Saved {} documents to {:?}", documents.len(), self.path);
        Ok(())
    }

    /// Same serialization as `save`, to an arbitrary destination. Does not
    /// rebind the store path.
    pub fn export(&self, documents: &[Document], path: &Path, pretty: bool) -> Result<ExportSummary> {
        self.write(documents, path, pretty)?;

        let summary = ExportSummary {
            path: path.to_path_buf(),
            total_documents: documents.len(),
            exported_at: Utc::now().to_rfc3339(),
        };

        info!(
            "Exported {} documents to {:?}",
            summary.total_documents, summary.path
        );
        Ok(summary)
    }

    fn write(&self, documents: &[Document], path: &Path, pretty: bool) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| CorpusError::FileOperation {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        let mut entries = Map::new();
        for doc in documents {
            let stored = StoredDocument {
                content: doc.content.clone(),
                tokens: doc.tokens.clone(),
                word_freq: doc.word_freq.clone(),
            };
            entries.insert(doc.title.clone(), serde_json::to_value(stored)?);
        }

        let payload = if pretty {
            serde_json::to_string_pretty(&entries)?
        } else {
            serde_json::to_string(&entries)?
        };

        fs::write(path, payload).map_err(|source| CorpusError::FileOperation {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn processed_doc(title: &str, content: &str) -> Document {
        let mut doc = Document::new(title, content);
        doc.tokenize();
        doc.compute_word_frequency();
        doc
    }

    #[test]
    fn test_load_missing_file_starts_fresh() {
        let dir = tempdir().unwrap();
        let store = JsonStore::new(dir.path().join("corpus.json"), false);

        let (documents, report) = store.load().unwrap();
        assert!(documents.is_empty());
        assert_eq!(report.loaded, 0);
        assert!(report.skipped.is_empty());
    }

    #[test]
    fn test_save_load_round_trip_preserves_fields_and_order() {
        let dir = tempdir().unwrap();
        let store = JsonStore::new(dir.path().join("corpus.json"), true);

        let docs = vec![
            processed_doc("Doc 1", "The quick brown fox jumps over the lazy dog."),
            processed_doc("Doc 2", "Natural Language Processing is a fascinating field."),
            Document::new("Doc 3", "Unprocessed content."),
        ];
        store.save(&docs).unwrap();

        let (restored, report) = store.load().unwrap();
        assert_eq!(report.loaded, 3);
        assert!(report.skipped.is_empty());

        for (original, loaded) in docs.iter().zip(&restored) {
            assert_eq!(loaded.title, original.title);
            assert_eq!(loaded.content, original.content);
            assert_eq!(loaded.tokens, original.tokens);
            assert_eq!(loaded.word_freq, original.word_freq);
        }
    }

    #[test]
    fn test_load_defaults_missing_tokens_and_word_freq() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("corpus.json");
        fs::write(&path, r#"{"Doc 1": {"content": "Hello world"}}"#).unwrap();

        let store = JsonStore::new(&path, false);
        let (documents, report) = store.load().unwrap();

        assert_eq!(report.loaded, 1);
        assert_eq!(documents[0].content, "Hello world");
        assert!(documents[0].tokens.is_empty());
        assert!(documents[0].word_freq.is_empty());
    }

    #[test]
    fn test_load_skips_entries_without_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("corpus.json");
        fs::write(
            &path,
            r#"{"Good": {"content": "kept"}, "Bad": {"tokens": ["orphaned"]}}"#,
        )
        .unwrap();

        let store = JsonStore::new(&path, false);
        let (documents, report) = store.load().unwrap();

        assert_eq!(report.loaded, 1);
        assert_eq!(documents[0].title, "Good");
        assert_eq!(report.skipped, vec!["Bad".to_string()]);
    }

    #[test]
    fn test_export_writes_to_other_path_and_reports() {
        let dir = tempdir().unwrap();
        let store = JsonStore::new(dir.path().join("corpus.json"), false);
        let target = dir.path().join("exports/out.json");

        let docs = vec![processed_doc("Doc 1", "Some text here.")];
        let summary = store.export(&docs, &target, true).unwrap();

        assert_eq!(summary.total_documents, 1);
        assert_eq!(summary.path, target);
        assert!(target.exists());
        // Store path untouched
        assert!(!store.path().exists());
    }
}
