use std::sync::Arc;

use salvo::{Depot, Request};
use uuid::Uuid;

use crate::{
    envelope::{ApiError, Envelope},
    extensions::*,
    orders::errors::into_api_error,
    state::State,
};

use super::OrderResponse;

/// List orders, optionally filtered to one user via `userId`.
#[salvo::handler]
pub(crate) async fn index(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Envelope<Vec<OrderResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let user = match req.queries().get("userId") {
        None => None,
        Some(raw) => Some(
            raw.parse::<Uuid>()
                .map_err(|_error| ApiError::bad_request("Invalid userId query parameter"))?
                .into(),
        ),
    };

    let orders = state
        .app
        .orders
        .list_orders(user)
        .await
        .map_err(into_api_error)?;

    Ok(Envelope::ok(orders.into_iter().map(Into::into).collect()))
}
