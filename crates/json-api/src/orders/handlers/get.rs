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

#[salvo::handler]
pub(crate) async fn get(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Envelope<OrderResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let uuid = req
        .param::<Uuid>("uuid")
        .ok_or_else(|| ApiError::bad_request("Invalid order UUID"))?;

    let order = state
        .app
        .orders
        .get_order(uuid.into())
        .await
        .map_err(into_api_error)?;

    Ok(Envelope::ok(order.into()))
}
