//! Cart Records

use jiff::Timestamp;

use crate::{auth::models::UserUuid, domain::menu::records::MenuItemUuid, uuids::TypedUuid};

/// Cart UUID
pub type CartUuid = TypedUuid<CartRecord>;

/// Cart Record
///
/// A user has at most one cart at any time. `total` is derived from the lines
/// and the current menu prices whenever the cart is read; it is never stored.
#[derive(Debug, Clone)]
pub struct CartRecord {
    pub uuid: CartUuid,
    pub user_uuid: UserUuid,
    pub total: u64,
    pub lines: Vec<CartLineRecord>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Cart Line UUID
pub type CartLineUuid = TypedUuid<CartLineRecord>;

/// Cart Line Record
///
/// One (menu item, quantity) pairing within a cart. Stored quantities are
/// always at least one; a line that would drop to zero is deleted instead.
#[derive(Debug, Clone)]
pub struct CartLineRecord {
    pub uuid: CartLineUuid,
    pub menu_item_uuid: MenuItemUuid,
    pub quantity: u32,
    /// Current menu price joined at read time; `None` when the referenced
    /// menu item no longer exists.
    pub unit_price: Option<u64>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
