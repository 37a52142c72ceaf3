//! Shared test infrastructure for database-backed service tests.

mod context;

pub(crate) use context::TestContext;
pub(crate) use db::TestDb;
