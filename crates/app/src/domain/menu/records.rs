//! Menu Item Records

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// Menu Item UUID
pub type MenuItemUuid = TypedUuid<MenuItemRecord>;

/// Menu Item Record
#[derive(Debug, Clone)]
pub struct MenuItemRecord {
    pub uuid: MenuItemUuid,
    pub name: String,
    pub description: String,
    pub category: String,
    pub special_tag: Option<String>,
    /// Price in minor units (cents).
    pub price: u64,
    pub image_url: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
