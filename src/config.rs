// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::analysis::StopwordFilter;
use crate::error::{CorpusError, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub store: StoreConfig,
    pub analysis: AnalysisConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    pub path: PathBuf,
    pub pretty: bool,
    pub allow_duplicate_titles: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnalysisConfig {
    #[serde(default)]
    pub stopwords: Vec<String>,
    pub top_words: usize,
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder.add_source(config::File::from(Path::new("config/default.toml")));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("CORPUS_MANAGER")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| CorpusError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| CorpusError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            store: StoreConfig {
                path: PathBuf::from("data/corpus.json"),
                pretty: true,
                allow_duplicate_titles: false,
            },
            analysis: AnalysisConfig {
                stopwords: vec![],
                top_words: 5,
            },
        }
    }

    fn validate(&self) -> Result<()> {
        if self.store.path.as_os_str().is_empty() {
            return Err(CorpusError::Config(
                "store path must not be empty".to_string(),
            ));
        }

        if self.analysis.top_words == 0 {
            return Err(CorpusError::Config(
                "top_words must be greater than 0".to_string(),
            ));
        }

        // Tokens are lower-cased before filtering, so mixed-case stopwords never match.
        if let Some(word) = self
            .analysis
            .stopwords
            .iter()
            .find(|w| w.chars().any(|c| c.is_uppercase()))
        {
            return Err(CorpusError::Config(format!(
                "stopwords must be lower-case: {}",
                word
            )));
        }

        Ok(())
    }
}

impl AnalysisConfig {
    /// Configured stopword list, falling back to the built-in English set.
    pub fn stopword_filter(&self) -> StopwordFilter {
        if self.stopwords.is_empty() {
            StopwordFilter::english()
        } else {
            StopwordFilter::from_words(self.stopwords.iter().map(String::as_str))
        }
    }
}
