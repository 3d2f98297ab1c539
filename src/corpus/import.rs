// file: src/corpus/import.rs
// description: line-oriented text-file document import
// reference: plain-text import format (Title: header plus content lines)

use crate::error::{CorpusError, Result};
use crate::utils::Validator;
use std::fs;
use std::path::Path;

const TITLE_PREFIX: &str = "title:";

#[derive(Debug, Clone, PartialEq)]
pub struct ImportedDocument {
    pub title: String,
    pub content: String,
}

/// Parses a document description file: the first non-blank line must be
/// `Title: <title>` (prefix matched case-insensitively), every following
/// non-blank line is joined with single spaces as the content. Blank lines
/// are ignored throughout.
pub fn parse_document_file(path: &Path) -> Result<ImportedDocument> {
    let raw = fs::read_to_string(path).map_err(|source| CorpusError::FileOperation {
        path: path.to_path_buf(),
        source,
    })?;

    let lines: Vec<&str> = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if lines.len() < 2 {
        return Err(CorpusError::ImportFormat {
            path: path.to_path_buf(),
            message: "expected a title line and at least one content line".to_string(),
        });
    }

    let first = lines[0];
    let has_prefix = first
        .get(..TITLE_PREFIX.len())
        .is_some_and(|p| p.eq_ignore_ascii_case(TITLE_PREFIX));
    if !has_prefix {
        return Err(CorpusError::ImportFormat {
            path: path.to_path_buf(),
            message: "first line must start with 'Title:'".to_string(),
        });
    }

    let title = first[TITLE_PREFIX.len()..].trim();
    if title.is_empty() {
        return Err(CorpusError::ImportFormat {
            path: path.to_path_buf(),
            message: "title must not be empty".to_string(),
        });
    }

    let content = lines[1..].join(" ");
    Validator::validate_content_not_empty(&content)?;

    Ok(ImportedDocument {
        title: title.to_string(),
        content,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_parse_joins_content_lines_and_skips_blanks() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "doc.txt", "Title: Demo\nHello world\n\nSecond line\n");

        let imported = parse_document_file(&path).unwrap();
        assert_eq!(imported.title, "Demo");
        assert_eq!(imported.content, "Hello world Second line");
    }

    #[test]
    fn test_parse_title_prefix_is_case_insensitive() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "doc.txt", "TITLE: Upper\nBody text\n");

        let imported = parse_document_file(&path).unwrap();
        assert_eq!(imported.title, "Upper");
    }

    #[test]
    fn test_parse_rejects_too_few_lines() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "doc.txt", "Title: Lonely\n\n\n");

        let err = parse_document_file(&path).unwrap_err();
        assert!(matches!(err, CorpusError::ImportFormat { .. }));
    }

    #[test]
    fn test_parse_rejects_missing_title_prefix() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "doc.txt", "Demo\nHello world\n");

        let err = parse_document_file(&path).unwrap_err();
        assert!(matches!(err, CorpusError::ImportFormat { .. }));
    }

    #[test]
    fn test_parse_rejects_empty_title() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "doc.txt", "Title:   \nHello world\n");

        let err = parse_document_file(&path).unwrap_err();
        assert!(matches!(err, CorpusError::ImportFormat { .. }));
    }

    #[test]
    fn test_parse_missing_file() {
        let err = parse_document_file(Path::new("/nonexistent/doc.txt")).unwrap_err();
        assert!(matches!(err, CorpusError::FileOperation { .. }));
    }
}
