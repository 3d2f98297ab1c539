// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod analysis;
pub mod config;
pub mod corpus;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod utils;

pub use analysis::{RuleLemmatizer, SnowballStemmer, StopwordFilter, WordReducer};
pub use config::{AnalysisConfig, Config, StoreConfig};
pub use corpus::{Corpus, ExportSummary, ImportedDocument, JsonStore, LoadReport};
pub use error::{CorpusError, Result};
pub use models::{Document, DocumentStatistics};
pub use pipeline::{PreprocessStats, Preprocessor, ProgressTracker};
pub use utils::Validator;
