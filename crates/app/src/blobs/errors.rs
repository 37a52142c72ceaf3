//! Blob store errors.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BlobStoreError {
    #[error("invalid blob name: {0}")]
    InvalidName(String),

    #[error("blob i/o failed")]
    Io(#[from] io::Error),
}
