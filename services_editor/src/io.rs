//! Document I/O
//!
//! Whole-file UTF-8 reads and writes. Writes overwrite in place with no
//! atomic rename; content is transferred verbatim in both directions, so a
//! load followed by a save reproduces the original bytes.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Document I/O error
#[derive(Debug, Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),

    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    #[error("Not valid UTF-8: {0}")]
    InvalidUtf8(PathBuf),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl IoError {
    fn from_std(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            ErrorKind::NotFound => IoError::NotFound(path.to_path_buf()),
            ErrorKind::PermissionDenied => IoError::PermissionDenied(path.to_path_buf()),
            _ => IoError::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }
}

/// Editor I/O abstraction
pub trait EditorIo {
    fn load(&mut self, path: &Path) -> Result<String, IoError>;
    fn save(&mut self, path: &Path, content: &str) -> Result<(), IoError>;
}

/// Filesystem-backed editor I/O
#[derive(Debug, Default)]
pub struct FsEditorIo;

impl FsEditorIo {
    pub fn new() -> Self {
        Self
    }
}

impl EditorIo for FsEditorIo {
    fn load(&mut self, path: &Path) -> Result<String, IoError> {
        let bytes = fs::read(path).map_err(|e| IoError::from_std(path, e))?;
        String::from_utf8(bytes).map_err(|_| IoError::InvalidUtf8(path.to_path_buf()))
    }

    fn save(&mut self, path: &Path, content: &str) -> Result<(), IoError> {
        fs::write(path, content).map_err(|e| IoError::from_std(path, e))
    }
}

/// In-memory editor I/O for tests
#[derive(Debug, Default)]
pub struct MemoryEditorIo {
    files: BTreeMap<PathBuf, Vec<u8>>,
    fail_saves: bool,
}

impl MemoryEditorIo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<Vec<u8>>) -> Self {
        self.files.insert(path.into(), content.into());
        self
    }

    /// Make every save fail, for save-error paths
    pub fn failing_saves(mut self) -> Self {
        self.fail_saves = true;
        self
    }

    pub fn contents(&self, path: &Path) -> Option<&[u8]> {
        self.files.get(path).map(|v| v.as_slice())
    }
}

impl EditorIo for MemoryEditorIo {
    fn load(&mut self, path: &Path) -> Result<String, IoError> {
        let bytes = self
            .files
            .get(path)
            .ok_or_else(|| IoError::NotFound(path.to_path_buf()))?;
        String::from_utf8(bytes.clone()).map_err(|_| IoError::InvalidUtf8(path.to_path_buf()))
    }

    fn save(&mut self, path: &Path, content: &str) -> Result<(), IoError> {
        if self.fail_saves {
            return Err(IoError::PermissionDenied(path.to_path_buf()));
        }
        self.files
            .insert(path.to_path_buf(), content.as_bytes().to_vec());
        Ok(())
    }
}
