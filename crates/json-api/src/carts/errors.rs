//! Errors

use tracing::error;

use ristoro_app::domain::carts::CartsServiceError;

use crate::envelope::ApiError;

pub(crate) fn into_api_error(error: CartsServiceError) -> ApiError {
    match error {
        CartsServiceError::CartNotFound => ApiError::not_found("Cart not found"),
        CartsServiceError::MenuItemNotFound => ApiError::not_found("Menu item not found"),
        CartsServiceError::Conflict => {
            ApiError::conflict("Cart was modified concurrently; retry the request")
        }
        CartsServiceError::InvalidQuantity => ApiError::bad_request("Quantity out of range"),
        CartsServiceError::InvalidData => ApiError::bad_request("Invalid cart data"),
        CartsServiceError::Sql(source) => {
            error!("cart storage error: {source}");

            ApiError::internal()
        }
    }
}
