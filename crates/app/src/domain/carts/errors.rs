//! Carts service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use crate::domain::carts::transitions::TransitionError;

#[derive(Debug, Error)]
pub enum CartsServiceError {
    #[error("cart not found")]
    CartNotFound,

    #[error("menu item not found")]
    MenuItemNotFound,

    #[error("conflicting concurrent cart update")]
    Conflict,

    #[error("quantity out of range")]
    InvalidQuantity,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for CartsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::CartNotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            // The unique index on carts.user_uuid catches two writers racing
            // to create the same user's cart.
            Some(ErrorKind::UniqueViolation) => Self::Conflict,
            Some(ErrorKind::ForeignKeyViolation) => Self::MenuItemNotFound,
            Some(ErrorKind::CheckViolation | ErrorKind::NotNullViolation) => Self::InvalidData,
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}

impl From<TransitionError> for CartsServiceError {
    fn from(error: TransitionError) -> Self {
        match error {
            TransitionError::QuantityOutOfRange => Self::InvalidQuantity,
        }
    }
}
