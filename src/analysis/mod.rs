// file: src/analysis/mod.rs
// description: text analysis module exports
// reference: internal module structure

pub mod morphology;
pub mod stopwords;
pub mod tokenizer;

pub use morphology::{RuleLemmatizer, SnowballStemmer, WordReducer};
pub use stopwords::StopwordFilter;
pub use tokenizer::tokenize;
