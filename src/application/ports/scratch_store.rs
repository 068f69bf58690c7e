use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

/// Stages uploaded bytes on disk for providers that read from a path.
#[async_trait]
pub trait ScratchStore: Send + Sync {
    async fn stage(&self, data: &[u8]) -> Result<ScratchFile, ScratchStoreError>;
}

/// Owned handle to a staged file.
///
/// The file is removed by [`ScratchFile::release`] or, failing that, when the
/// handle is dropped.
#[derive(Debug)]
pub struct ScratchFile {
    path: PathBuf,
    released: bool,
}

impl ScratchFile {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            released: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Deletes the staged file. A file that is already gone is not an error.
    pub fn release(mut self) -> Result<(), ScratchStoreError> {
        self.released = true;
        remove_if_present(&self.path).map_err(|e| ScratchStoreError::ReleaseFailed {
            path: self.path.display().to_string(),
            source: e,
        })
    }
}

impl Drop for ScratchFile {
    fn drop(&mut self) {
        if self.released {
            return;
        }
        if let Err(e) = remove_if_present(&self.path) {
            tracing::warn!(
                path = %self.path.display(),
                error = %e,
                "Failed to remove scratch file on drop"
            );
        }
    }
}

fn remove_if_present(path: &Path) -> io::Result<()> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ScratchStoreError {
    #[error("failed to create scratch file: {0}")]
    CreateFailed(io::Error),
    #[error("failed to write scratch file: {0}")]
    WriteFailed(io::Error),
    #[error("failed to remove scratch file {path}: {source}")]
    ReleaseFailed { path: String, source: io::Error },
}
