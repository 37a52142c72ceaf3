//! Auth middleware.

use std::sync::Arc;

use salvo::{Depot, FlowCtrl, Request, Response, http::header::AUTHORIZATION};
use tracing::error;

use ristoro_app::auth::IdentityError;

use crate::{envelope::ApiError, state::State};

#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let Some(token) = extract_bearer_token(req) else {
        res.render(ApiError::unauthorized(
            "Missing or invalid Authorization header",
        ));

        return;
    };

    let state = match depot.obtain::<Arc<State>>() {
        Ok(state) => state,
        Err(_error) => {
            res.render(ApiError::internal());

            return;
        }
    };

    let user = match state.app.identity.authenticate_bearer(token).await {
        Ok(user) => user,
        Err(IdentityError::UnknownToken | IdentityError::InvalidCredentials) => {
            res.render(ApiError::unauthorized("Invalid bearer token"));

            return;
        }
        Err(error) => {
            error!("failed to resolve bearer token: {error}");

            res.render(ApiError::internal());

            return;
        }
    };

    depot.inject(user);

    ctrl.call_next(req, depot, res).await;
}

fn extract_bearer_token(req: &Request) -> Option<&str> {
    let value = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let mut parts = value.splitn(2, ' ');

    let scheme = parts.next()?;
    let token = parts.next()?.trim();

    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return None;
    }

    Some(token)
}
