//! Order Data

use crate::{
    auth::models::UserUuid,
    domain::{
        menu::records::MenuItemUuid,
        orders::records::{OrderDetailUuid, OrderStatus, OrderUuid},
    },
};

/// New Order Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub uuid: OrderUuid,
    pub user_uuid: UserUuid,
    pub pickup_name: String,
    pub pickup_phone: String,
    pub pickup_email: String,
    pub total: u64,
    pub total_items: u32,
    pub payment_intent_id: Option<String>,
    pub status: OrderStatus,
    pub details: Vec<NewOrderDetail>,
}

/// New Order Detail Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrderDetail {
    pub uuid: OrderDetailUuid,
    pub menu_item_uuid: MenuItemUuid,
    pub item_name: String,
    pub unit_price: u64,
    pub quantity: u32,
}

/// Order Update Data
///
/// Absent fields keep their stored values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrderUpdate {
    pub status: Option<OrderStatus>,
    pub payment_intent_id: Option<String>,
}
