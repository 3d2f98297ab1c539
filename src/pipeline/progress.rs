// file: src/pipeline/progress.rs
// description: progress reporting and statistics for corpus preprocessing
// reference: uses indicatif for progress bars

use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Default)]
pub struct PreprocessStats {
    pub documents_processed: usize,
    pub tokens_kept: usize,
    pub tokens_removed: usize,
    pub duration: Duration,
}

impl PreprocessStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tokens_seen(&self) -> usize {
        self.tokens_kept + self.tokens_removed
    }

    pub fn removal_rate(&self) -> f64 {
        let seen = self.tokens_seen();
        if seen == 0 {
            return 0.0;
        }
        (self.tokens_removed as f64 / seen as f64) * 100.0
    }

    pub fn documents_per_second(&self) -> f64 {
        let secs = self.duration.as_secs_f64();
        if secs == 0.0 {
            return 0.0;
        }
        self.documents_processed as f64 / secs
    }
}

pub struct ProgressTracker {
    bar: ProgressBar,
    start: Instant,
}

impl ProgressTracker {
    pub fn new(total_documents: usize) -> Self {
        let bar = ProgressBar::new(total_documents as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .expect("Failed to create progress bar template")
                .progress_chars("█▓▒░"),
        );

        Self {
            bar,
            start: Instant::now(),
        }
    }

    pub fn inc(&self, title: &str) {
        self.bar.set_message(title.to_string());
        self.bar.inc(1);
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn finish(&self) {
        self.bar.finish_with_message("Preprocessing complete");
    }
}
