//! Shared application domain, persistence, and external collaborators.

pub mod auth;
pub mod blobs;
pub mod context;
pub mod database;
pub mod domain;
pub mod payments;

#[cfg(test)]
mod test;

mod uuids;
