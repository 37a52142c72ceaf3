mod create;
mod delete;
mod get;
mod index;
mod update;

use serde::Serialize;
use uuid::Uuid;

use ristoro_app::domain::menu::records::MenuItemRecord;

pub(crate) use create::*;
pub(crate) use delete::*;
pub(crate) use get::*;
pub(crate) use index::*;
pub(crate) use update::*;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MenuItemResponse {
    uuid: Uuid,
    name: String,
    description: String,
    category: String,
    special_tag: Option<String>,
    /// Price in minor units (cents).
    price: u64,
    image_url: String,
    created_at: String,
    updated_at: String,
}

/// Blob name for a menu item image: the item UUID plus the uploaded file's
/// extension, so a re-upload with the same extension overwrites in place.
fn image_blob_name(uuid: Uuid, original_file_name: Option<&str>) -> String {
    let extension = original_file_name
        .and_then(|name| std::path::Path::new(name).extension())
        .and_then(|ext| ext.to_str());

    match extension {
        Some(ext) => format!("{uuid}.{ext}"),
        None => uuid.to_string(),
    }
}

/// Blob name embedded in a stored image URL.
fn image_blob_name_from_url(url: &str) -> Option<&str> {
    url.rsplit('/').next().filter(|name| !name.is_empty())
}

impl From<MenuItemRecord> for MenuItemResponse {
    fn from(record: MenuItemRecord) -> Self {
        Self {
            uuid: record.uuid.into_uuid(),
            name: record.name,
            description: record.description,
            category: record.category,
            special_tag: record.special_tag,
            price: record.price,
            image_url: record.image_url,
            created_at: record.created_at.to_string(),
            updated_at: record.updated_at.to_string(),
        }
    }
}
