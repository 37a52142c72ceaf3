//! Database connection management

use sqlx::{PgPool, Postgres, Transaction, query};

use crate::auth::models::UserUuid;

/// SQL used to serialize cart reconciliation per user within a transaction.
pub const USER_ADVISORY_LOCK_SQL: &str = "SELECT pg_advisory_xact_lock(hashtextextended($1, 0))";

#[derive(Debug, Clone)]
pub struct Db {
    pool: PgPool,
}

impl Db {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Begin a plain transaction.
    ///
    /// # Errors
    ///
    /// Returns an error when starting the transaction fails.
    pub async fn begin(&self) -> Result<Transaction<'static, Postgres>, sqlx::Error> {
        self.pool.begin().await
    }

    /// Begin a transaction holding an advisory lock keyed on the user.
    ///
    /// Two transactions for the same user cannot interleave between taking
    /// the lock and commit, so concurrent cart reconciliations for one user
    /// are applied one at a time.
    ///
    /// # Errors
    ///
    /// Returns an error when starting the transaction or taking the lock fails.
    pub async fn begin_user_transaction(
        &self,
        user: UserUuid,
    ) -> Result<Transaction<'static, Postgres>, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        query(USER_ADVISORY_LOCK_SQL)
            .bind(user.into_uuid().to_string())
            .execute(&mut *tx)
            .await?;

        Ok(tx)
    }
}

/// Connect to `PostgreSQL`.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPool::connect(database_url).await
}
