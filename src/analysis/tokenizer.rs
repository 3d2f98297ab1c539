// file: src/analysis/tokenizer.rs
// description: word tokenization over lower-cased text
// reference: https://docs.rs/regex

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Maximal runs of word characters (letters, digits, underscore)
    static ref WORD: Regex = Regex::new(r"\w+").expect("WORD regex is valid");
}

/// Lower-cases `text` and extracts every maximal word-character run,
/// discarding punctuation and whitespace boundaries.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD.find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}
