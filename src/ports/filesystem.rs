// src/ports/filesystem.rs
// File system port (interface)

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur during file system lookups
#[derive(Error, Debug)]
pub enum FileSystemError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),
}

/// What sits at an existing path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    File,
    Directory,
}

/// Port for the file system lookups the validators need
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait FileSystem: Send + Sync {
    /// Kind of the entry at `path`, or `None` when nothing exists there
    async fn path_kind(&self, path: &Path) -> Result<Option<PathKind>, FileSystemError>;

    /// Expand a path (e.g., expand ~ to home directory)
    fn expand_path(&self, path: &Path) -> PathBuf;
}
