//! Identity provider errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("unknown or expired token")]
    UnknownToken,

    #[error("user already exists")]
    AlreadyExists,

    #[error("identity provider request failed")]
    Http(#[from] reqwest::Error),

    #[error("unexpected identity provider response: {0}")]
    UnexpectedResponse(String),
}
