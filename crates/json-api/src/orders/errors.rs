//! Errors

use tracing::error;

use ristoro_app::domain::orders::OrdersServiceError;

use crate::envelope::ApiError;

pub(crate) fn into_api_error(error: OrdersServiceError) -> ApiError {
    match error {
        OrdersServiceError::NotFound => ApiError::not_found("Order not found"),
        OrdersServiceError::AlreadyExists => ApiError::conflict("Order already exists"),
        OrdersServiceError::InvalidReference => ApiError::bad_request("Related resource not found"),
        OrdersServiceError::MissingRequiredData => ApiError::bad_request("Missing required data"),
        OrdersServiceError::InvalidData => ApiError::bad_request("Invalid order data"),
        OrdersServiceError::InvalidStatus(source) => ApiError::bad_request(source.to_string()),
        OrdersServiceError::Sql(source) => {
            error!("order storage error: {source}");

            ApiError::internal()
        }
    }
}
