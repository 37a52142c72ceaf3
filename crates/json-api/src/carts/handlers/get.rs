use std::sync::Arc;

use salvo::{Depot, Request};

use crate::{
    carts::errors::into_api_error,
    envelope::{ApiError, Envelope},
    extensions::*,
    state::State,
};

use super::{CartResponse, user_uuid_param};

#[salvo::handler]
pub(crate) async fn get(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Envelope<CartResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let user = user_uuid_param(req)?;

    let cart = state
        .app
        .carts
        .get_cart(user)
        .await
        .map_err(into_api_error)?;

    Ok(Envelope::ok(cart.into()))
}
