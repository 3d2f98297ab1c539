// file: src/utils/validation.rs
// description: data validation utilities and helpers
// reference: input validation patterns

use crate::error::{CorpusError, Result};
use std::path::Path;

pub struct Validator;

impl Validator {
    pub fn validate_title(title: &str) -> Result<()> {
        if title.trim().is_empty() {
            return Err(CorpusError::Validation(
                "Title must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_content_not_empty(content: &str) -> Result<()> {
        if content.trim().is_empty() {
            return Err(CorpusError::Validation("Content is empty".to_string()));
        }
        Ok(())
    }

    pub fn validate_document_file(path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(CorpusError::Validation(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        if !path.is_file() {
            return Err(CorpusError::Validation(format!(
                "Path is not a file: {}",
                path.display()
            )));
        }

        Ok(())
    }

    pub fn truncate_text(text: &str, max_length: usize) -> String {
        if text.chars().count() <= max_length {
            text.to_string()
        } else {
            format!("{}...", text.chars().take(max_length).collect::<String>())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_validate_title() {
        assert!(Validator::validate_title("Doc 1").is_ok());
        assert!(Validator::validate_title("").is_err());
        assert!(Validator::validate_title("   ").is_err());
    }

    #[test]
    fn test_validate_content_not_empty() {
        assert!(Validator::validate_content_not_empty("content").is_ok());
        assert!(Validator::validate_content_not_empty("").is_err());
        assert!(Validator::validate_content_not_empty("   ").is_err());
    }

    #[test]
    fn test_validate_document_file() {
        let temp = TempDir::new().unwrap();
        let file_path = temp.path().join("doc.txt");
        fs::write(&file_path, "Title: Test\nBody").unwrap();

        assert!(Validator::validate_document_file(&file_path).is_ok());
        assert!(Validator::validate_document_file(temp.path()).is_err());
        assert!(Validator::validate_document_file(Path::new("/nonexistent")).is_err());
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(Validator::truncate_text("short", 10), "short");
        assert_eq!(
            Validator::truncate_text("this is a very long text", 10),
            "this is a ..."
        );
    }
}
