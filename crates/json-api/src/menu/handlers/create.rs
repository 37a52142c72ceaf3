use std::sync::Arc;

use salvo::{Depot, Request};
use serde::Deserialize;
use tracing::warn;

use ristoro_app::domain::menu::{data::NewMenuItem, records::MenuItemUuid};

use crate::{
    envelope::{ApiError, Envelope},
    extensions::*,
    menu::errors::into_api_error,
    state::State,
};

use super::{MenuItemResponse, image_blob_name};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateMenuItemForm {
    name: String,
    description: String,
    category: String,
    special_tag: Option<String>,
    /// Price in minor units (cents).
    price: u64,
}

#[salvo::handler]
pub(crate) async fn create(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Envelope<MenuItemResponse>, ApiError> {
    depot.require_admin()?;

    let state = depot.obtain_or_500::<Arc<State>>()?.clone();

    let form: CreateMenuItemForm = req
        .parse_form()
        .await
        .map_err(|_error| ApiError::bad_request("Invalid menu item form"))?;

    if form.name.trim().is_empty() {
        return Err(ApiError::bad_request("Name is required"));
    }

    let Some(file) = req.file("file").await else {
        return Err(ApiError::bad_request("An image file is required"));
    };

    let bytes = tokio::fs::read(file.path())
        .await
        .or_500("failed to read uploaded image")?;

    let uuid = MenuItemUuid::new();
    let blob_name = image_blob_name(uuid.into_uuid(), file.name());

    let image_url = state
        .app
        .blobs
        .upload(&blob_name, bytes)
        .await
        .or_500("failed to store menu item image")?;

    let created = state
        .app
        .menu
        .create_menu_item(NewMenuItem {
            uuid,
            name: form.name,
            description: form.description,
            category: form.category,
            special_tag: form.special_tag,
            price: form.price,
            image_url,
        })
        .await;

    match created {
        Ok(record) => Ok(Envelope::created(record.into())),
        Err(error) => {
            // The blob was stored before the row; drop it again so a failed
            // create leaves nothing behind.
            if let Err(cleanup) = state.app.blobs.delete(&blob_name).await {
                warn!("failed to remove image of failed menu item create: {cleanup}");
            }

            Err(into_api_error(error))
        }
    }
}
