// file: src/analysis/morphology.rs
// description: word-level morphological reduction behind a pluggable interface
// reference: https://docs.rs/rust-stemmers

use rust_stemmers::{Algorithm, Stemmer};
use std::collections::HashMap;

/// Single word-to-word reduction, the seam for stemming and lemmatization.
/// Implementations receive one lower-cased token and return one normalized
/// token.
pub trait WordReducer {
    fn reduce(&self, word: &str) -> String;
}

/// Snowball stemmer wrapper.
pub struct SnowballStemmer {
    stemmer: Stemmer,
}

impl SnowballStemmer {
    pub fn english() -> Self {
        Self {
            stemmer: Stemmer::create(Algorithm::English),
        }
    }
}

impl WordReducer for SnowballStemmer {
    fn reduce(&self, word: &str) -> String {
        self.stemmer.stem(word).to_string()
    }
}

/// Rule-based English lemmatizer: an irregular-form table consulted first,
/// then ordered suffix rewrites. A rewrite is accepted only when the result
/// keeps at least two characters and a vowel; otherwise the word passes
/// through unchanged.
pub struct RuleLemmatizer {
    exceptions: HashMap<&'static str, &'static str>,
}

const SUFFIX_RULES: &[(&str, &str)] = &[
    ("sses", "ss"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("xes", "x"),
    ("ies", "y"),
    ("ing", ""),
    ("ed", ""),
    ("s", ""),
];

const IRREGULAR_FORMS: &[(&str, &str)] = &[
    ("men", "man"),
    ("women", "woman"),
    ("children", "child"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("geese", "goose"),
    ("mice", "mouse"),
    ("people", "person"),
    ("was", "be"),
    ("were", "be"),
    ("been", "be"),
    ("has", "have"),
    ("had", "have"),
    ("does", "do"),
    ("goes", "go"),
    ("went", "go"),
    ("ran", "run"),
    ("said", "say"),
    ("made", "make"),
];

impl RuleLemmatizer {
    pub fn english() -> Self {
        Self {
            exceptions: IRREGULAR_FORMS.iter().copied().collect(),
        }
    }
}

impl Default for RuleLemmatizer {
    fn default() -> Self {
        Self::english()
    }
}

impl WordReducer for RuleLemmatizer {
    fn reduce(&self, word: &str) -> String {
        if let Some(lemma) = self.exceptions.get(word) {
            return (*lemma).to_string();
        }

        for &(suffix, replacement) in SUFFIX_RULES {
            if word.len() <= suffix.len() || !word.ends_with(suffix) {
                continue;
            }

            // "class", "bus", "this" keep their final s
            if suffix == "s"
                && (word.ends_with("ss") || word.ends_with("us") || word.ends_with("is"))
            {
                continue;
            }

            let stem = &word[..word.len() - suffix.len()];
            let candidate = if replacement.is_empty() {
                undouble(stem)
            } else {
                format!("{}{}", stem, replacement)
            };

            if candidate.chars().count() >= 2 && has_vowel(&candidate) {
                return candidate;
            }
        }

        word.to_string()
    }
}

fn has_vowel(s: &str) -> bool {
    s.chars().any(|c| "aeiouy".contains(c))
}

// Collapses a trailing doubled consonant left by -ing/-ed removal
// ("runn" -> "run"), keeping legitimate doubles like "fall" and "pass".
fn undouble(stem: &str) -> String {
    let chars: Vec<char> = stem.chars().collect();
    if chars.len() >= 2 {
        let last = chars[chars.len() - 1];
        let prev = chars[chars.len() - 2];
        if last == prev && !"aeioulls".contains(last) {
            return chars[..chars.len() - 1].iter().collect();
        }
    }
    stem.to_string()
}
