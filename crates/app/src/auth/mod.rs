//! Authentication collaborators.
//!
//! Identity is owned by an external provider; this module only carries the
//! client for it and the claims the rest of the system trusts.

pub mod errors;
pub mod identity;
pub mod models;

pub use errors::IdentityError;
pub use identity::*;
