//! Content store - read-only access to the blog content directory

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Recognized content file extensions
const CONTENT_EXTENSIONS: &[&str] = &["md", "mdx"];

/// Errors from the content store
#[derive(Debug, Error)]
pub enum StoreError {
    /// No content file backs the requested id
    #[error("no content file for `{0}`")]
    NotFound(String),

    /// The directory exists but could not be read, or a file read failed
    #[error("content store I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read-only accessor over a single content directory.
///
/// An absent directory is a valid empty state (the site renders
/// "no posts yet"), distinct from a directory that exists but cannot
/// be read - that surfaces as [`StoreError::Io`] so callers can tell
/// the two apart even if they choose to treat both as empty.
#[derive(Debug, Clone)]
pub struct ContentStore {
    dir: PathBuf,
}

impl ContentStore {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// List slugs for every content file in the directory.
    ///
    /// Returns an empty list (not an error) when the directory does not
    /// exist. The listing order is the directory order and carries no
    /// meaning; callers sort.
    pub fn list_ids(&self) -> Result<Vec<String>, StoreError> {
        if !self.dir.exists() {
            tracing::debug!("Content directory {:?} does not exist", self.dir);
            return Ok(Vec::new());
        }

        let mut ids = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.is_file() && is_content_file(&path) {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    ids.push(stem.to_string());
                }
            }
        }

        Ok(ids)
    }

    /// Read the full text of the content file identified by `id`.
    pub fn read(&self, id: &str) -> Result<String, StoreError> {
        for ext in CONTENT_EXTENSIONS {
            let path = self.dir.join(format!("{}.{}", id, ext));
            if path.is_file() {
                return Ok(fs::read_to_string(&path)?);
            }
        }
        Err(StoreError::NotFound(id.to_string()))
    }
}

/// Check if a path has a recognized content extension
fn is_content_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| CONTENT_EXTENSIONS.contains(&e))
        .unwrap_or(false)
}
