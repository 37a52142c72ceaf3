use std::sync::Arc;

use salvo::{Depot, Request};
use serde::{Deserialize, Serialize};

use ristoro_app::auth::models::Credentials;

use crate::{
    auth::errors::into_api_error,
    envelope::{ApiError, Envelope},
    extensions::*,
    state::State,
};

use super::register::UserResponse;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LoginResponse {
    token: String,
    user: UserResponse,
}

#[salvo::handler]
pub(crate) async fn login(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Envelope<LoginResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let body: LoginRequest = req
        .parse_json()
        .await
        .map_err(|_error| ApiError::bad_request("Invalid login payload"))?;

    let issued = state
        .app
        .identity
        .login(Credentials {
            email: body.email,
            password: body.password,
        })
        .await
        .map_err(into_api_error)?;

    Ok(Envelope::ok(LoginResponse {
        token: issued.token,
        user: issued.user.into(),
    }))
}
