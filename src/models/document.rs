// file: src/models/document.rs
// description: core document model with derived analysis fields
// reference: internal data structures

use crate::analysis::morphology::WordReducer;
use crate::analysis::stopwords::StopwordFilter;
use crate::analysis::tokenizer;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::collections::HashMap;

/// A single named text document plus its derived analysis artifacts.
///
/// `content` is fixed at construction; `tokens`, `word_freq`, and the
/// stemmed/lemmatized sequences are populated by the processing methods.
/// Once `compute_word_frequency` has run, later token mutations refresh
/// `word_freq` so its keys always match the current token set.
#[derive(Debug, Clone)]
pub struct Document {
    pub title: String,
    pub content: String,
    pub content_hash: String,
    pub tokens: Vec<String>,
    pub word_freq: HashMap<String, usize>,
    pub stemmed_tokens: Vec<String>,
    pub lemmatized_tokens: Vec<String>,
    freq_computed: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DocumentStatistics {
    pub total_tokens: usize,
    pub unique_tokens: usize,
    pub avg_token_length: f64,
    pub top_words: Vec<(String, usize)>,
}

impl Document {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        let content = content.into();
        let content_hash = Self::compute_hash(&content);

        Self {
            title: title.into(),
            content,
            content_hash,
            tokens: Vec::new(),
            word_freq: HashMap::new(),
            stemmed_tokens: Vec::new(),
            lemmatized_tokens: Vec::new(),
            freq_computed: false,
        }
    }

    /// Rebuilds a document from persisted fields.
    pub fn restore(
        title: impl Into<String>,
        content: impl Into<String>,
        tokens: Vec<String>,
        word_freq: HashMap<String, usize>,
    ) -> Self {
        let freq_computed = !word_freq.is_empty();
        let mut doc = Self::new(title, content);
        doc.tokens = tokens;
        doc.word_freq = word_freq;
        doc.freq_computed = freq_computed;
        doc
    }

    fn compute_hash(content: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(content.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    /// Recomputes `tokens` from `content`: lower-cased maximal runs of word
    /// characters. Idempotent for unchanged content.
    pub fn tokenize(&mut self) {
        self.tokens = tokenizer::tokenize(&self.content);
        self.refresh_word_freq();
    }

    /// Drops every token present in the filter. Destructive; re-tokenize to
    /// start over.
    pub fn remove_stopwords(&mut self, stopwords: &StopwordFilter) {
        self.tokens.retain(|token| !stopwords.contains(token));
        self.refresh_word_freq();
    }

    /// Counts occurrences of each token in the current token sequence.
    pub fn compute_word_frequency(&mut self) {
        self.freq_computed = true;
        self.word_freq = count_frequencies(&self.tokens);
    }

    fn refresh_word_freq(&mut self) {
        if self.freq_computed {
            self.word_freq = count_frequencies(&self.tokens);
        }
    }

    pub fn stem_words(&mut self, stemmer: &dyn WordReducer) {
        self.stemmed_tokens = self.tokens.iter().map(|t| stemmer.reduce(t)).collect();
    }

    pub fn lemmatize_words(&mut self, lemmatizer: &dyn WordReducer) {
        self.lemmatized_tokens = self.tokens.iter().map(|t| lemmatizer.reduce(t)).collect();
    }

    /// Summary over the current tokens and frequency table. Top words are
    /// ordered by count descending, ties broken by token ascending.
    pub fn statistics(&self, top_n: usize) -> DocumentStatistics {
        let total_tokens = self.tokens.len();
        let unique_tokens = self
            .tokens
            .iter()
            .collect::<std::collections::HashSet<_>>()
            .len();

        let avg_token_length = if total_tokens == 0 {
            0.0
        } else {
            let char_count: usize = self.tokens.iter().map(|t| t.chars().count()).sum();
            let mean = char_count as f64 / total_tokens as f64;
            (mean * 100.0).round() / 100.0
        };

        let mut entries: Vec<(String, usize)> = self
            .word_freq
            .iter()
            .map(|(word, count)| (word.clone(), *count))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        entries.truncate(top_n);

        DocumentStatistics {
            total_tokens,
            unique_tokens,
            avg_token_length,
            top_words: entries,
        }
    }
}

fn count_frequencies(tokens: &[String]) -> HashMap<String, usize> {
    let mut freq = HashMap::new();
    for token in tokens {
        *freq.entry(token.clone()).or_insert(0) += 1;
    }
    freq
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct SuffixMarker;

    impl WordReducer for SuffixMarker {
        fn reduce(&self, word: &str) -> String {
            format!("{}+", word)
        }
    }

    #[test]
    fn test_document_creation() {
        let doc = Document::new("Sample", "The quick brown fox.");
        assert_eq!(doc.title, "Sample");
        assert!(!doc.content_hash.is_empty());
        assert!(doc.tokens.is_empty());
        assert!(doc.word_freq.is_empty());
    }

    #[test]
    fn test_tokenize_lowercases_and_splits_on_punctuation() {
        let mut doc = Document::new("Sample", "Hello, World! It's 2024_ok.");
        doc.tokenize();
        assert_eq!(doc.tokens, vec!["hello", "world", "it", "s", "2024_ok"]);
    }

    #[test]
    fn test_tokenize_is_idempotent() {
        let mut doc = Document::new("Sample", "The quick brown fox jumps over the lazy dog.");
        doc.tokenize();
        let first = doc.tokens.clone();

        let mut rejoined = Document::new("Rejoined", first.join(" "));
        rejoined.tokenize();
        assert_eq!(rejoined.tokens, first);
    }

    #[test]
    fn test_remove_stopwords_filters_in_place() {
        let mut doc = Document::new("Sample", "The quick brown fox jumps over the lazy dog.");
        doc.tokenize();
        doc.remove_stopwords(&StopwordFilter::from_words(["the"]));

        assert_eq!(
            doc.tokens,
            vec!["quick", "brown", "fox", "jumps", "over", "lazy", "dog"]
        );
    }

    #[test]
    fn test_word_frequency_counts_sum_to_token_count() {
        let mut doc = Document::new("Sample", "the cat and the dog and the bird");
        doc.tokenize();
        doc.compute_word_frequency();

        let total: usize = doc.word_freq.values().sum();
        assert_eq!(total, doc.tokens.len());
        assert_eq!(doc.word_freq["the"], 3);
        assert_eq!(doc.word_freq["and"], 2);
    }

    #[test]
    fn test_word_freq_refreshes_after_stopword_removal() {
        let mut doc = Document::new("Sample", "the cat and the dog");
        doc.tokenize();
        doc.compute_word_frequency();
        doc.remove_stopwords(&StopwordFilter::from_words(["the"]));

        assert!(!doc.word_freq.contains_key("the"));
        let total: usize = doc.word_freq.values().sum();
        assert_eq!(total, doc.tokens.len());
    }

    #[test]
    fn test_stem_and_lemmatize_use_injected_reducer() {
        let mut doc = Document::new("Sample", "running dogs");
        doc.tokenize();
        doc.stem_words(&SuffixMarker);
        doc.lemmatize_words(&SuffixMarker);

        assert_eq!(doc.stemmed_tokens, vec!["running+", "dogs+"]);
        assert_eq!(doc.lemmatized_tokens, vec!["running+", "dogs+"]);
        // Source tokens are untouched
        assert_eq!(doc.tokens, vec!["running", "dogs"]);
    }

    #[test]
    fn test_statistics_empty_document() {
        let doc = Document::new("Empty", "");
        let stats = doc.statistics(5);

        assert_eq!(stats.total_tokens, 0);
        assert_eq!(stats.unique_tokens, 0);
        assert_eq!(stats.avg_token_length, 0.0);
        assert!(stats.top_words.is_empty());
    }

    #[test]
    fn test_statistics_top_words_tie_break_is_lexicographic() {
        let mut doc = Document::new("Sample", "b b a a c d e f");
        doc.tokenize();
        doc.compute_word_frequency();
        let stats = doc.statistics(3);

        assert_eq!(
            stats.top_words,
            vec![
                ("a".to_string(), 2),
                ("b".to_string(), 2),
                ("c".to_string(), 1)
            ]
        );
    }

    #[test]
    fn test_statistics_average_length_rounds_to_two_decimals() {
        let mut doc = Document::new("Sample", "ab abc");
        doc.tokenize();
        let stats = doc.statistics(5);
        assert_eq!(stats.avg_token_length, 2.5);

        let mut doc = Document::new("Sample", "a ab ab");
        doc.tokenize();
        let stats = doc.statistics(5);
        // 5 chars over 3 tokens
        assert_eq!(stats.avg_token_length, 1.67);
    }

    #[test]
    fn test_restore_marks_frequency_as_computed() {
        let mut freq = HashMap::new();
        freq.insert("cat".to_string(), 1);
        let mut doc = Document::restore("Sample", "cat dog", vec!["cat".into(), "dog".into()], freq);

        doc.remove_stopwords(&StopwordFilter::from_words(["cat"]));
        assert_eq!(doc.tokens, vec!["dog"]);
        assert!(doc.word_freq.contains_key("dog"));
        assert!(!doc.word_freq.contains_key("cat"));
    }

    #[test]
    fn test_hash_consistency() {
        let a = Document::new("A", "Same content");
        let b = Document::new("B", "Same content");
        assert_eq!(a.content_hash, b.content_hash);
    }
}
