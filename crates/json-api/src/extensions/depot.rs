//! Depot helper extensions.

use std::any::Any;

use salvo::Depot;

use ristoro_app::auth::models::{AuthenticatedUser, Role};

use crate::envelope::ApiError;

/// Helpers for mapping depot extraction failures to envelope errors.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, ApiError>;

    /// The caller resolved by the auth middleware.
    fn current_user(&self) -> Result<&AuthenticatedUser, ApiError>;

    /// The caller, required to hold the admin role.
    fn require_admin(&self) -> Result<&AuthenticatedUser, ApiError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, ApiError> {
        self.obtain::<T>().map_err(|_ignored| ApiError::internal())
    }

    fn current_user(&self) -> Result<&AuthenticatedUser, ApiError> {
        self.obtain::<AuthenticatedUser>()
            .map_err(|_ignored| ApiError::unauthorized("Not authenticated"))
    }

    fn require_admin(&self) -> Result<&AuthenticatedUser, ApiError> {
        let user = self.current_user()?;

        if user.role != Role::Admin {
            return Err(ApiError::forbidden("Admin role required"));
        }

        Ok(user)
    }
}
