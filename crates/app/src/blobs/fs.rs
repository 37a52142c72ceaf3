//! Filesystem-backed blob store.

use std::{io, path::PathBuf};

use async_trait::async_trait;
use tokio::fs;

use crate::blobs::{BlobStore, errors::BlobStoreError};

/// Blob store writing under a local media root, served by a static file host
/// at a configured public base URL.
#[derive(Debug, Clone)]
pub struct FsBlobStore {
    root: PathBuf,
    public_base_url: String,
}

impl FsBlobStore {
    #[must_use]
    pub fn new(root: PathBuf, public_base_url: String) -> Self {
        Self {
            root,
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
        }
    }

    fn resolve(&self, name: &str) -> Result<PathBuf, BlobStoreError> {
        // Names are server-generated; anything that could escape the root is
        // rejected outright.
        if name.is_empty() || name.contains('/') || name.contains("..") {
            return Err(BlobStoreError::InvalidName(name.to_string()));
        }

        Ok(self.root.join(name))
    }
}

#[async_trait]
impl BlobStore for FsBlobStore {
    async fn upload(&self, name: &str, bytes: Vec<u8>) -> Result<String, BlobStoreError> {
        let path = self.resolve(name)?;

        fs::create_dir_all(&self.root).await?;
        fs::write(&path, bytes).await?;

        Ok(format!("{}/{name}", self.public_base_url))
    }

    async fn delete(&self, name: &str) -> Result<(), BlobStoreError> {
        let path = self.resolve(name)?;

        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(error) => Err(BlobStoreError::Io(error)),
        }
    }
}
