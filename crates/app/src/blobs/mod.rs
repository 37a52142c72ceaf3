//! Blob storage for menu item images.

use async_trait::async_trait;
use mockall::automock;

pub mod errors;
pub mod fs;

pub use errors::BlobStoreError;
pub use fs::FsBlobStore;

/// Stores opaque blobs under server-chosen names and serves them by URL.
#[automock]
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Store `bytes` under `name`, returning the public URL of the blob.
    async fn upload(&self, name: &str, bytes: Vec<u8>) -> Result<String, BlobStoreError>;

    /// Remove the blob stored under `name`. Removing an absent blob is not an
    /// error.
    async fn delete(&self, name: &str) -> Result<(), BlobStoreError>;
}
