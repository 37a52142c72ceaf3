//! Errors

use tracing::error;

use ristoro_app::auth::IdentityError;

use crate::envelope::ApiError;

pub(crate) fn into_api_error(error: IdentityError) -> ApiError {
    match error {
        IdentityError::InvalidCredentials => ApiError::unauthorized("Invalid email or password"),
        IdentityError::UnknownToken => ApiError::unauthorized("Invalid or expired token"),
        IdentityError::AlreadyExists => ApiError::conflict("User already exists"),
        IdentityError::Http(source) => {
            error!("identity provider request failed: {source}");

            ApiError::internal()
        }
        IdentityError::UnexpectedResponse(detail) => {
            error!("unexpected identity provider response: {detail}");

            ApiError::internal()
        }
    }
}
