use std::sync::Arc;

use salvo::{Depot, Request};
use serde::Deserialize;
use uuid::Uuid;

use ristoro_app::domain::orders::{
    data::{NewOrder, NewOrderDetail},
    records::{OrderDetailUuid, OrderStatus, OrderUuid, ParseOrderStatusError},
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
pub(crate) struct CreateOrderRequest {
    user_uuid: Uuid,
    pickup_name: String,
    pickup_phone: String,
    pickup_email: String,
    /// Order total in minor units (cents).
    total: u64,
    /// Total number of items; absent means the sum of the detail quantities.
    total_items: Option<u32>,
    payment_intent_id: Option<String>,
    /// Storage form of the status; defaults to `Pending`.
    status: Option<String>,
    details: Vec<CreateOrderDetail>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateOrderDetail {
    menu_item_uuid: Uuid,
    item_name: String,
    unit_price: u64,
    quantity: u32,
}

#[salvo::handler]
pub(crate) async fn create(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Envelope<OrderResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let body: CreateOrderRequest = req
        .parse_json()
        .await
        .map_err(|_error| ApiError::bad_request("Invalid order payload"))?;

    if body.details.is_empty() {
        return Err(ApiError::bad_request("An order needs at least one detail"));
    }

    let status = match body.status.as_deref() {
        None => OrderStatus::Pending,
        Some(raw) => raw
            .parse()
            .map_err(|error: ParseOrderStatusError| ApiError::bad_request(error.to_string()))?,
    };

    let total_items = body.total_items.unwrap_or_else(|| {
        body.details
            .iter()
            .map(|detail| detail.quantity)
            .fold(0, u32::saturating_add)
    });

    let details = body
        .details
        .into_iter()
        .map(|detail| NewOrderDetail {
            uuid: OrderDetailUuid::new(),
            menu_item_uuid: detail.menu_item_uuid.into(),
            item_name: detail.item_name,
            unit_price: detail.unit_price,
            quantity: detail.quantity,
        })
        .collect();

    let order = state
        .app
        .orders
        .create_order(NewOrder {
            uuid: OrderUuid::new(),
            user_uuid: body.user_uuid.into(),
            pickup_name: body.pickup_name,
            pickup_phone: body.pickup_phone,
            pickup_email: body.pickup_email,
            total: body.total,
            total_items,
            payment_intent_id: body.payment_intent_id,
            status,
            details,
        })
        .await
        .map_err(into_api_error)?;

    Ok(Envelope::created(order.into()))
}
