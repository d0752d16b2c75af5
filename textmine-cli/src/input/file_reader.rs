//! File reading utilities

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Reads input files as UTF-8 text
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Read the non-blank lines of a file, trimmed
    pub fn read_lines(path: &Path) -> Result<Vec<String>> {
        Ok(Self::read_text(path)?
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_text_success() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.txt");

        let content = "twenty one\nfour-teen";
        fs::write(&file_path, content).unwrap();

        assert_eq!(FileReader::read_text(&file_path).unwrap(), content);
    }

    #[test]
    fn test_read_text_nonexistent_file() {
        let result = FileReader::read_text(Path::new("/nonexistent/file.txt"));

        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("Failed to read file"));
    }

    #[test]
    fn test_read_lines_skips_blank_lines() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("phrases.txt");
        fs::write(&file_path, "  one hundred \n\n\t\nseven\r\n").unwrap();

        assert_eq!(
            FileReader::read_lines(&file_path).unwrap(),
            vec!["one hundred", "seven"]
        );
    }
}
