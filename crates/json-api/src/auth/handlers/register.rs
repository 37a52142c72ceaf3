use std::sync::Arc;

use salvo::{Depot, Request};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use ristoro_app::auth::models::{AuthenticatedUser, NewUser, Role};

use crate::{
    auth::errors::into_api_error,
    envelope::{ApiError, Envelope},
    extensions::*,
    state::State,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RegisterRequest {
    name: String,
    email: String,
    password: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UserResponse {
    uuid: Uuid,
    name: String,
    email: String,
    role: Role,
}

impl From<AuthenticatedUser> for UserResponse {
    fn from(user: AuthenticatedUser) -> Self {
        Self {
            uuid: user.uuid.into_uuid(),
            name: user.name,
            email: user.email,
            role: user.role,
        }
    }
}

#[salvo::handler]
pub(crate) async fn register(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Envelope<UserResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let body: RegisterRequest = req
        .parse_json()
        .await
        .map_err(|_error| ApiError::bad_request("Invalid registration payload"))?;

    if body.name.trim().is_empty() || body.email.trim().is_empty() || body.password.is_empty() {
        return Err(ApiError::bad_request(
            "Name, email and password are required",
        ));
    }

    let user = state
        .app
        .identity
        .register(NewUser {
            name: body.name,
            email: body.email,
            password: body.password,
        })
        .await
        .map_err(into_api_error)?;

    Ok(Envelope::created(user.into()))
}
