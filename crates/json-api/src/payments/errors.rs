//! Errors

use tracing::error;

use ristoro_app::payments::PaymentsServiceError;

use crate::{carts, envelope::ApiError};

pub(crate) fn into_api_error(error: PaymentsServiceError) -> ApiError {
    match error {
        PaymentsServiceError::EmptyCart => {
            ApiError::bad_request("Cart is empty; nothing to pay for")
        }
        PaymentsServiceError::Cart(source) => carts::errors::into_api_error(source),
        PaymentsServiceError::Gateway(source) => {
            error!("payment gateway error: {source}");

            ApiError::internal()
        }
    }
}
