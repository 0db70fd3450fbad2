// src/adapters/filesystem.rs
// Real file system adapter implementation

use std::io;
use std::path::{Path, PathBuf};

use crate::ports::filesystem::{FileSystem, FileSystemError, PathKind};

/// File system backed by `tokio::fs`
pub struct RealFileSystem;

#[async_trait::async_trait]
impl FileSystem for RealFileSystem {
    async fn path_kind(&self, path: &Path) -> Result<Option<PathKind>, FileSystemError> {
        match tokio::fs::metadata(path).await {
            Ok(metadata) if metadata.is_dir() => Ok(Some(PathKind::Directory)),
            Ok(_) => Ok(Some(PathKind::File)),
            Err(e) => match e.kind() {
                io::ErrorKind::NotFound => Ok(None),
                io::ErrorKind::PermissionDenied => Err(FileSystemError::PermissionDenied(
                    path.to_string_lossy().to_string(),
                )),
                _ => Err(FileSystemError::IoError(e)),
            },
        }
    }

    fn expand_path(&self, path: &Path) -> PathBuf {
        let binding = path.to_string_lossy();
        let expanded = shellexpand::tilde(&binding);
        PathBuf::from(expanded.as_ref())
    }
}
