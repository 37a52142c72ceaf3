//! Menu Item Data

use crate::domain::menu::records::MenuItemUuid;

/// New Menu Item Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewMenuItem {
    pub uuid: MenuItemUuid,
    pub name: String,
    pub description: String,
    pub category: String,
    pub special_tag: Option<String>,
    pub price: u64,
    pub image_url: String,
}

/// Menu Item Update Data
///
/// The image URL is optional: an update without a replacement image keeps the
/// stored one.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItemUpdate {
    pub name: String,
    pub description: String,
    pub category: String,
    pub special_tag: Option<String>,
    pub price: u64,
    pub image_url: Option<String>,
}
