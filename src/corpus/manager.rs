// file: src/corpus/manager.rs
// description: in-memory document collection with persistence binding
// reference: internal data structures

use crate::config::StoreConfig;
use crate::corpus::import;
use crate::corpus::store::{ExportSummary, JsonStore, LoadReport};
use crate::error::{CorpusError, Result};
use crate::models::Document;
use crate::pipeline::{PreprocessStats, Preprocessor};
use crate::utils::Validator;
use std::path::Path;
use tracing::{info, warn};

/// The managed document collection. Documents keep insertion order; every
/// mutating operation persists the whole collection to the bound store.
pub struct Corpus {
    documents: Vec<Document>,
    store: JsonStore,
    allow_duplicate_titles: bool,
    load_report: LoadReport,
}

impl Corpus {
    /// Opens the corpus bound to the configured store path, restoring any
    /// previously persisted documents. A missing store file yields an empty
    /// corpus.
    pub fn open(config: &StoreConfig) -> Result<Self> {
        let store = JsonStore::new(&config.path, config.pretty);
        let (documents, load_report) = store.load()?;

        for title in &load_report.skipped {
            warn!("Store entry '{}' was skipped during load", title);
        }

        Ok(Self {
            documents,
            store,
            allow_duplicate_titles: config.allow_duplicate_titles,
            load_report,
        })
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn load_report(&self) -> &LoadReport {
        &self.load_report
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// First document with the given title, if any.
    pub fn get(&self, title: &str) -> Option<&Document> {
        self.documents.iter().find(|doc| doc.title == title)
    }

    /// Adds a document and persists the collection. Duplicate titles are
    /// rejected unless the corpus was opened with `allow_duplicate_titles`.
    pub fn add_document(&mut self, title: impl Into<String>, content: impl Into<String>) -> Result<()> {
        let title = title.into();
        Validator::validate_title(&title)?;

        if !self.allow_duplicate_titles && self.get(&title).is_some() {
            return Err(CorpusError::DuplicateTitle(title));
        }

        self.documents.push(Document::new(title, content));
        self.save()
    }

    /// Titles in insertion order.
    pub fn list_documents(&self) -> Vec<String> {
        self.documents.iter().map(|doc| doc.title.clone()).collect()
    }

    /// Titles of documents whose content contains `keyword`, matched
    /// case-insensitively as a plain substring.
    pub fn search_documents(&self, keyword: &str) -> Vec<String> {
        let needle = keyword.to_lowercase();
        self.documents
            .iter()
            .filter(|doc| doc.content.to_lowercase().contains(&needle))
            .map(|doc| doc.title.clone())
            .collect()
    }

    /// Removes every document with the given title and persists. Errors when
    /// no document matches.
    pub fn delete_document(&mut self, title: &str) -> Result<usize> {
        let before = self.documents.len();
        self.documents.retain(|doc| doc.title != title);
        let removed = before - self.documents.len();

        if removed == 0 {
            return Err(CorpusError::DocumentNotFound(title.to_string()));
        }

        self.save()?;
        info!("Deleted {} document(s) titled '{}'", removed, title);
        Ok(removed)
    }

    /// Runs the preprocessing pipeline over every document in order, then
    /// persists the collection once.
    pub fn preprocess(&mut self, preprocessor: &Preprocessor) -> Result<PreprocessStats> {
        let stats = preprocessor.run(&mut self.documents);
        self.save()?;
        Ok(stats)
    }

    pub fn save(&self) -> Result<()> {
        self.store.save(&self.documents)
    }

    /// Writes the collection to an arbitrary path using the store
    /// serialization. The bound store path is unchanged.
    pub fn export(&self, path: &Path, pretty: bool) -> Result<ExportSummary> {
        self.store.export(&self.documents, path, pretty)
    }

    /// Imports a document from a `Title:`-headed text file. Duplicate-title
    /// and format failures surface as typed errors; nothing is persisted on
    /// failure. Returns the imported title.
    pub fn add_document_from_file(&mut self, path: &Path) -> Result<String> {
        let imported = import::parse_document_file(path)?;
        self.add_document(imported.title.clone(), imported.content)?;
        info!("Imported document '{}' from {:?}", imported.title, path);
        Ok(imported.title)
    }
}
