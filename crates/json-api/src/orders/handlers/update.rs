use std::sync::Arc;

use salvo::{Depot, Request};
use serde::Deserialize;
use uuid::Uuid;

use ristoro_app::domain::orders::{
    data::OrderUpdate,
    records::ParseOrderStatusError,
};

use crate::{
    envelope::{ApiError, Envelope},
    extensions::*,
    orders::errors::into_api_error,
    state::State,
};

use super::OrderResponse;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdateOrderRequest {
    /// Storage form of the status; absent keeps the stored one.
    status: Option<String>,
    payment_intent_id: Option<String>,
}

#[salvo::handler]
pub(crate) async fn update(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Envelope<OrderResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let uuid = req
        .param::<Uuid>("uuid")
        .ok_or_else(|| ApiError::bad_request("Invalid order UUID"))?;

    let body: UpdateOrderRequest = req
        .parse_json()
        .await
        .map_err(|_error| ApiError::bad_request("Invalid order payload"))?;

    let status = match body.status.as_deref() {
        None => None,
        Some(raw) => Some(
            raw.parse()
                .map_err(|error: ParseOrderStatusError| ApiError::bad_request(error.to_string()))?,
        ),
    };

    let order = state
        .app
        .orders
        .update_order(
            uuid.into(),
            OrderUpdate {
                status,
                payment_intent_id: body.payment_intent_id,
            },
        )
        .await
        .map_err(into_api_error)?;

    Ok(Envelope::ok(order.into()))
}
