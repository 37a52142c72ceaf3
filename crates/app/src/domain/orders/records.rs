//! Order Records

use std::str::FromStr;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{auth::models::UserUuid, domain::menu::records::MenuItemUuid, uuids::TypedUuid};

/// Order UUID
pub type OrderUuid = TypedUuid<OrderRecord>;

/// Order Record
#[derive(Debug, Clone)]
pub struct OrderRecord {
    pub uuid: OrderUuid,
    pub user_uuid: UserUuid,
    pub pickup_name: String,
    pub pickup_phone: String,
    pub pickup_email: String,
    /// Order total in minor units, captured at order time.
    pub total: u64,
    /// Total number of items across all details, captured at order time.
    pub total_items: u32,
    pub payment_intent_id: Option<String>,
    pub status: OrderStatus,
    pub details: Vec<OrderDetailRecord>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Order Detail UUID
pub type OrderDetailUuid = TypedUuid<OrderDetailRecord>;

/// Order Detail Record
///
/// Name and unit price are captured at order time so later menu edits do not
/// rewrite order history.
#[derive(Debug, Clone)]
pub struct OrderDetailRecord {
    pub uuid: OrderDetailUuid,
    pub menu_item_uuid: MenuItemUuid,
    pub item_name: String,
    pub unit_price: u64,
    pub quantity: u32,
}

/// Kitchen-side lifecycle of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Confirmed,
    BeingCooked,
    ReadyForPickup,
    Completed,
    Cancelled,
}

impl OrderStatus {
    /// Stable wire/storage form of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Confirmed => "Confirmed",
            Self::BeingCooked => "Being Cooked",
            Self::ReadyForPickup => "Ready for Pickup",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown order status: {0}")]
pub struct ParseOrderStatusError(pub String);

impl FromStr for OrderStatus {
    type Err = ParseOrderStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(Self::Pending),
            "Confirmed" => Ok(Self::Confirmed),
            "Being Cooked" => Ok(Self::BeingCooked),
            "Ready for Pickup" => Ok(Self::ReadyForPickup),
            "Completed" => Ok(Self::Completed),
            "Cancelled" => Ok(Self::Cancelled),
            other => Err(ParseOrderStatusError(other.to_string())),
        }
    }
}
