mod apply_delta;
mod get;

use salvo::Request;
use serde::Serialize;
use uuid::Uuid;

use ristoro_app::{
    auth::models::UserUuid,
    domain::carts::records::{CartLineRecord, CartRecord},
};

use crate::envelope::ApiError;

pub(crate) use apply_delta::*;
pub(crate) use get::*;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CartResponse {
    /// Absent when the user currently has no cart.
    uuid: Option<Uuid>,
    user_uuid: Uuid,
    /// Cart total in minor units (cents).
    total: u64,
    lines: Vec<CartLineResponse>,
    created_at: Option<String>,
    updated_at: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CartLineResponse {
    uuid: Uuid,
    menu_item_uuid: Uuid,
    quantity: u32,
    /// Current menu price in minor units; absent when the menu item no
    /// longer exists.
    unit_price: Option<u64>,
}

impl CartResponse {
    /// The shape of "no cart": zero total, no lines.
    pub(crate) fn empty(user: UserUuid) -> Self {
        Self {
            uuid: None,
            user_uuid: user.into_uuid(),
            total: 0,
            lines: Vec::new(),
            created_at: None,
            updated_at: None,
        }
    }
}

impl From<CartRecord> for CartResponse {
    fn from(record: CartRecord) -> Self {
        Self {
            uuid: Some(record.uuid.into_uuid()),
            user_uuid: record.user_uuid.into_uuid(),
            total: record.total,
            lines: record.lines.into_iter().map(Into::into).collect(),
            created_at: Some(record.created_at.to_string()),
            updated_at: Some(record.updated_at.to_string()),
        }
    }
}

impl From<CartLineRecord> for CartLineResponse {
    fn from(record: CartLineRecord) -> Self {
        Self {
            uuid: record.uuid.into_uuid(),
            menu_item_uuid: record.menu_item_uuid.into_uuid(),
            quantity: record.quantity,
            unit_price: record.unit_price,
        }
    }
}

/// The `userId` query parameter every cart route keys on.
fn user_uuid_param(req: &Request) -> Result<UserUuid, ApiError> {
    req.query::<Uuid>("userId")
        .map(Into::into)
        .ok_or_else(|| ApiError::bad_request("A valid userId query parameter is required"))
}
