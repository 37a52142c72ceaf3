mod create;
mod get;
mod index;
mod update;

use serde::Serialize;
use uuid::Uuid;

use ristoro_app::domain::orders::records::{OrderDetailRecord, OrderRecord};

pub(crate) use create::*;
pub(crate) use get::*;
pub(crate) use index::*;
pub(crate) use update::*;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrderResponse {
    uuid: Uuid,
    user_uuid: Uuid,
    pickup_name: String,
    pickup_phone: String,
    pickup_email: String,
    /// Order total in minor units, captured at order time.
    total: u64,
    /// Total number of items across all details, captured at order time.
    total_items: u32,
    payment_intent_id: Option<String>,
    status: String,
    details: Vec<OrderDetailResponse>,
    created_at: String,
    updated_at: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrderDetailResponse {
    uuid: Uuid,
    menu_item_uuid: Uuid,
    item_name: String,
    unit_price: u64,
    quantity: u32,
}

impl From<OrderRecord> for OrderResponse {
    fn from(record: OrderRecord) -> Self {
        Self {
            uuid: record.uuid.into_uuid(),
            user_uuid: record.user_uuid.into_uuid(),
            pickup_name: record.pickup_name,
            pickup_phone: record.pickup_phone,
            pickup_email: record.pickup_email,
            total: record.total,
            total_items: record.total_items,
            payment_intent_id: record.payment_intent_id,
            status: record.status.as_str().to_string(),
            details: record.details.into_iter().map(Into::into).collect(),
            created_at: record.created_at.to_string(),
            updated_at: record.updated_at.to_string(),
        }
    }
}

impl From<OrderDetailRecord> for OrderDetailResponse {
    fn from(record: OrderDetailRecord) -> Self {
        Self {
            uuid: record.uuid.into_uuid(),
            menu_item_uuid: record.menu_item_uuid.into_uuid(),
            item_name: record.item_name,
            unit_price: record.unit_price,
            quantity: record.quantity,
        }
    }
}
