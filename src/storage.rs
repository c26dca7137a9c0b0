// SPDX-License-Identifier: MIT

//! Durable storage for generated content
//!
//! Every file-producing agent saves its markdown output through an
//! [`OutputStore`]. Names are timestamp-qualified so concurrent requests
//! never collide, and the containing directory is created on demand.

use std::path::{Path, PathBuf};

use chrono::Local;
use tokio::fs;

use crate::error::CompassError;

/// Maximum length of the sanitized filename stem
const MAX_STEM_LEN: usize = 30;

/// Append-only store for generated markdown files
#[derive(Debug, Clone)]
pub struct OutputStore {
    root: PathBuf,
}

impl OutputStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Save content under a timestamp-qualified name and return the path
    pub async fn save(
        &self,
        content: &str,
        stem: &str,
        extension: &str,
    ) -> Result<PathBuf, CompassError> {
        fs::create_dir_all(&self.root).await?;

        let timestamp = Local::now().format("%Y%m%d_%H%M%S");
        let filename = format!("{}_{}.{}", sanitize_stem(stem), timestamp, extension);
        let path = self.root.join(filename);

        fs::write(&path, content).await?;
        log::info!("Saved output to {}", path.display());

        Ok(path)
    }
}

/// Replace whitespace with underscores and truncate to a filesystem-friendly
/// length, keeping only alphanumerics, '-' and '_'
fn sanitize_stem(stem: &str) -> String {
    let cleaned: String = stem
        .chars()
        .map(|c| {
            if c.is_whitespace() {
                '_'
            } else if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    cleaned.chars().take(MAX_STEM_LEN).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_replaces_whitespace() {
        assert_eq!(sanitize_stem("find ai jobs"), "find_ai_jobs");
    }

    #[test]
    fn test_sanitize_truncates() {
        let long = "a".repeat(100);
        assert_eq!(sanitize_stem(&long).len(), MAX_STEM_LEN);
    }

    #[test]
    fn test_sanitize_strips_special_chars() {
        assert_eq!(sanitize_stem("what/is:ai?"), "what_is_ai_");
    }

    #[tokio::test]
    async fn test_save_creates_dir_and_file() {
        let root = std::env::temp_dir().join(format!(
            "compass_store_test_{}",
            Local::now().format("%Y%m%d%H%M%S%f")
        ));
        let store = OutputStore::new(&root);

        let path = store.save("# Hello", "tutorial test", "md").await.unwrap();

        assert!(path.exists());
        assert!(path
            .file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with("tutorial_test_"));
        assert_eq!(path.extension().unwrap(), "md");

        let content = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(content, "# Hello");

        let _ = tokio::fs::remove_dir_all(&root).await;
    }
}
