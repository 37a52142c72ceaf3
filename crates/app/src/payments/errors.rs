//! Payments errors.

use thiserror::Error;

use crate::domain::carts::CartsServiceError;

#[derive(Debug, Error)]
pub enum PaymentGatewayError {
    #[error("payment gateway request failed")]
    Http(#[from] reqwest::Error),

    #[error("unexpected payment gateway response: {0}")]
    UnexpectedResponse(String),
}

#[derive(Debug, Error)]
pub enum PaymentsServiceError {
    #[error("cart is empty or absent")]
    EmptyCart,

    #[error("cart could not be loaded")]
    Cart(#[from] CartsServiceError),

    #[error(transparent)]
    Gateway(#[from] PaymentGatewayError),
}

impl From<sqlx::Error> for PaymentsServiceError {
    fn from(error: sqlx::Error) -> Self {
        Self::Cart(error.into())
    }
}
