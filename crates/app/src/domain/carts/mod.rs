//! Carts
//!
//! The reconciliation core: applying signed quantity deltas to a user's cart
//! and pricing it against the current menu catalog.

pub mod errors;
pub mod pricing;
pub mod records;
mod repositories;
pub mod service;
pub mod transitions;

pub use errors::CartsServiceError;
pub use service::*;
