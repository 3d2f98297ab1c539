// file: src/analysis/stopwords.rs
// description: stopword set wrapper with a built-in English default list
// reference: standard English stopword list

use lazy_static::lazy_static;
use std::collections::HashSet;

lazy_static! {
    static ref ENGLISH: HashSet<&'static str> = {
        [
            "a", "about", "above", "after", "again", "against", "all", "am", "an", "and",
            "any", "are", "as", "at", "be", "because", "been", "before", "being", "below",
            "between", "both", "but", "by", "could", "did", "do", "does", "doing", "down",
            "during", "each", "few", "for", "from", "further", "had", "has", "have",
            "having", "he", "her", "here", "hers", "herself", "him", "himself", "his",
            "how", "i", "if", "in", "into", "is", "it", "its", "itself", "me", "more",
            "most", "my", "myself", "no", "nor", "not", "of", "off", "on", "once", "only",
            "or", "other", "ought", "our", "ours", "ourselves", "out", "over", "own",
            "same", "she", "should", "so", "some", "such", "than", "that", "the", "their",
            "theirs", "them", "themselves", "then", "there", "these", "they", "this",
            "those", "through", "to", "too", "under", "until", "up", "very", "was", "we",
            "were", "what", "when", "where", "which", "while", "who", "whom", "why",
            "with", "would", "you", "your", "yours", "yourself", "yourselves",
        ]
        .iter()
        .copied()
        .collect()
    };
}

/// Membership filter over lower-cased tokens. Matching is case-sensitive, so
/// callers must supply lower-case words.
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    words: HashSet<String>,
}

impl StopwordFilter {
    pub fn from_words<'a>(words: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            words: words.into_iter().map(str::to_string).collect(),
        }
    }

    /// Built-in English stopword list.
    pub fn english() -> Self {
        Self {
            words: ENGLISH.iter().map(|w| w.to_string()).collect(),
        }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_words_membership() {
        let filter = StopwordFilter::from_words(["the", "is"]);
        assert!(filter.contains("the"));
        assert!(!filter.contains("fox"));
        assert_eq!(filter.len(), 2);
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let filter = StopwordFilter::from_words(["the"]);
        assert!(!filter.contains("The"));
    }

    #[test]
    fn test_english_list_covers_common_words() {
        let filter = StopwordFilter::english();
        for word in ["the", "is", "and", "in", "on", "at"] {
            assert!(filter.contains(word), "missing stopword: {}", word);
        }
        assert!(!filter.contains("fox"));
    }
}
