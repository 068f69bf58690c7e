use std::io::{self, Write};
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::application::ports::{ScratchFile, ScratchStore, ScratchStoreError};

const SCRATCH_PREFIX: &str = "upload-";
const SCRATCH_SUFFIX: &str = ".audio";

/// Stages uploads as randomly named files under a base directory.
pub struct LocalScratchStore {
    base_path: PathBuf,
}

impl LocalScratchStore {
    pub fn new(base_path: PathBuf) -> Result<Self, ScratchStoreError> {
        std::fs::create_dir_all(&base_path).map_err(ScratchStoreError::CreateFailed)?;
        Ok(Self { base_path })
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}

fn stage_blocking(base_path: &Path, data: &[u8]) -> Result<ScratchFile, ScratchStoreError> {
    let mut file = tempfile::Builder::new()
        .prefix(SCRATCH_PREFIX)
        .suffix(SCRATCH_SUFFIX)
        .tempfile_in(base_path)
        .map_err(ScratchStoreError::CreateFailed)?;

    // On failure the NamedTempFile is dropped and removes itself.
    file.write_all(data)
        .and_then(|_| file.flush())
        .map_err(ScratchStoreError::WriteFailed)?;

    let path = file
        .into_temp_path()
        .keep()
        .map_err(|e| ScratchStoreError::CreateFailed(e.error))?;

    Ok(ScratchFile::new(path))
}

#[async_trait]
impl ScratchStore for LocalScratchStore {
    async fn stage(&self, data: &[u8]) -> Result<ScratchFile, ScratchStoreError> {
        let base_path = self.base_path.clone();
        let data = data.to_vec();

        tokio::task::spawn_blocking(move || stage_blocking(&base_path, &data))
            .await
            .map_err(|e| ScratchStoreError::WriteFailed(io::Error::other(e)))?
    }
}
