// file: src/pipeline/preprocess.rs
// description: tokenize/filter/frequency pipeline over a document collection
// reference: sequential preprocessing of corpus documents

use crate::analysis::StopwordFilter;
use crate::models::Document;
use crate::pipeline::progress::{PreprocessStats, ProgressTracker};
use tracing::{debug, info};

/// Runs tokenize → remove stopwords → compute word frequency over documents
/// in order. Holds the stopword filter; progress display is opt-in for
/// interactive use.
pub struct Preprocessor {
    stopwords: StopwordFilter,
    show_progress: bool,
}

impl Preprocessor {
    pub fn new(stopwords: StopwordFilter) -> Self {
        Self {
            stopwords,
            show_progress: false,
        }
    }

    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    pub fn run(&self, documents: &mut [Document]) -> PreprocessStats {
        let mut stats = PreprocessStats::new();
        let tracker = self
            .show_progress
            .then(|| ProgressTracker::new(documents.len()));
        let start = std::time::Instant::now();

        for doc in documents.iter_mut() {
            doc.tokenize();
            let before = doc.tokens.len();

            doc.remove_stopwords(&self.stopwords);
            doc.compute_word_frequency();

            let kept = doc.tokens.len();
            stats.documents_processed += 1;
            stats.tokens_kept += kept;
            stats.tokens_removed += before - kept;

            debug!(
                "Preprocessed '{}': {} tokens kept, {} removed",
                doc.title,
                kept,
                before - kept
            );

            if let Some(ref tracker) = tracker {
                tracker.inc(&doc.title);
            }
        }

        if let Some(tracker) = tracker {
            tracker.finish();
        }

        stats.duration = start.elapsed();
        info!(
            "Preprocessed {} documents in {:.2}s ({} tokens kept, {} removed)",
            stats.documents_processed,
            stats.duration.as_secs_f64(),
            stats.tokens_kept,
            stats.tokens_removed
        );

        stats
    }
}
