//! Errors

use tracing::error;

use ristoro_app::domain::menu::MenuServiceError;

use crate::envelope::ApiError;

pub(crate) fn into_api_error(error: MenuServiceError) -> ApiError {
    match error {
        MenuServiceError::NotFound => ApiError::not_found("Menu item not found"),
        MenuServiceError::AlreadyExists => ApiError::conflict("Menu item already exists"),
        MenuServiceError::InvalidReference => ApiError::bad_request("Related resource not found"),
        MenuServiceError::MissingRequiredData => ApiError::bad_request("Missing required data"),
        MenuServiceError::InvalidData | MenuServiceError::InvalidPrice(_) => {
            ApiError::bad_request("Invalid menu item data")
        }
        MenuServiceError::Sql(source) => {
            error!("menu storage error: {source}");

            ApiError::internal()
        }
    }
}
