//! Async file utilities for docfed.
//!
//! Unified file discovery and reading used by the content crate: the
//! resolver reads individual pages, and static path enumeration walks
//! the whole content tree.

use async_walkdir::WalkDir;
use futures::StreamExt;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::{Error, Result};

/// Options for discovering content files.
#[derive(Debug, Clone, Default)]
pub struct FindOptions {
    /// File extension to match (without dot), e.g. "mdx"
    pub extension: Option<&'static str>,
    /// Maximum directory depth to search (None = unlimited)
    pub max_depth: Option<usize>,
}

impl FindOptions {
    /// Create options for finding MDX documentation pages.
    pub fn mdx() -> Self {
        Self {
            extension: Some("mdx"),
            max_depth: None,
        }
    }

    /// Set maximum search depth.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }
}

/// Information about a discovered file.
#[derive(Debug, Clone)]
pub struct FileInfo {
    /// Full path to the file.
    pub path: PathBuf,
    /// File stem (filename without extension).
    pub stem: String,
    /// Path relative to the search base.
    pub relative_path: PathBuf,
}

/// Find all files matching the options under a directory.
pub async fn find_all_files(base_path: &Path, options: FindOptions) -> Result<Vec<FileInfo>> {
    let mut files = Vec::new();
    let mut walker = WalkDir::new(base_path);

    while let Some(entry_result) = walker.next().await {
        // Walk errors are not plain io::Error; wrap them.
        let entry = entry_result.map_err(|e| Error::io(std::io::Error::other(e)))?;
        let path = entry.path();

        if path.is_dir() {
            continue;
        }

        if let Some(max_depth) = options.max_depth {
            let depth = path
                .strip_prefix(base_path)
                .map(|p| p.components().count())
                .unwrap_or(0);
            if depth > max_depth {
                continue;
            }
        }

        if let Some(ext) = options.extension {
            if path.extension().and_then(|e| e.to_str()) != Some(ext) {
                continue;
            }
        }

        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("unknown")
            .to_string();

        let relative_path = path.strip_prefix(base_path).unwrap_or(&path).to_path_buf();

        files.push(FileInfo {
            path: path.to_path_buf(),
            stem,
            relative_path,
        });
    }

    Ok(files)
}

/// Read a file's contents as a string.
pub async fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .await
        .map_err(|e| Error::io_with_path(e, path))
}

/// Check if a path exists.
pub async fn exists(path: &Path) -> bool {
    fs::try_exists(path).await.unwrap_or(false)
}
