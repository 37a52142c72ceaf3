use std::sync::Arc;

use salvo::{Depot, Request};
use serde::Deserialize;
use tracing::warn;
use uuid::Uuid;

use ristoro_app::domain::menu::data::MenuItemUpdate;

use crate::{
    envelope::{ApiError, Envelope},
    extensions::*,
    menu::errors::into_api_error,
    state::State,
};

use super::{MenuItemResponse, image_blob_name, image_blob_name_from_url};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdateMenuItemForm {
    name: String,
    description: String,
    category: String,
    special_tag: Option<String>,
    /// Price in minor units (cents).
    price: u64,
}

#[salvo::handler]
pub(crate) async fn update(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Envelope<MenuItemResponse>, ApiError> {
    depot.require_admin()?;

    let state = depot.obtain_or_500::<Arc<State>>()?.clone();

    let uuid = req
        .param::<Uuid>("uuid")
        .ok_or_else(|| ApiError::bad_request("Invalid menu item UUID"))?;

    let form: UpdateMenuItemForm = req
        .parse_form()
        .await
        .map_err(|_error| ApiError::bad_request("Invalid menu item form"))?;

    let existing = state
        .app
        .menu
        .get_menu_item(uuid.into())
        .await
        .map_err(into_api_error)?;

    // A request without a replacement image keeps the stored one.
    let mut new_blob_name = None;
    let mut image_url = None;

    if let Some(file) = req.file("file").await {
        let bytes = tokio::fs::read(file.path())
            .await
            .or_500("failed to read uploaded image")?;

        let blob_name = image_blob_name(uuid, file.name());

        let url = state
            .app
            .blobs
            .upload(&blob_name, bytes)
            .await
            .or_500("failed to store menu item image")?;

        new_blob_name = Some(blob_name);
        image_url = Some(url);
    }

    let updated = state
        .app
        .menu
        .update_menu_item(
            uuid.into(),
            MenuItemUpdate {
                name: form.name,
                description: form.description,
                category: form.category,
                special_tag: form.special_tag,
                price: form.price,
                image_url,
            },
        )
        .await;

    match updated {
        Ok(record) => {
            // A replaced image may live under a different blob name than the
            // old one; only then is there something stale to remove.
            if let (Some(new_name), Some(old_name)) = (
                new_blob_name.as_deref(),
                image_blob_name_from_url(&existing.image_url),
            ) && new_name != old_name
                && let Err(cleanup) = state.app.blobs.delete(old_name).await
            {
                warn!("failed to remove replaced menu item image: {cleanup}");
            }

            Ok(Envelope::ok(record.into()))
        }
        Err(error) => {
            // Only remove the freshly stored blob when it did not overwrite
            // the image the row still points at.
            if let Some(blob_name) = new_blob_name
                && image_blob_name_from_url(&existing.image_url) != Some(blob_name.as_str())
                && let Err(cleanup) = state.app.blobs.delete(&blob_name).await
            {
                warn!("failed to remove image of failed menu item update: {cleanup}");
            }

            Err(into_api_error(error))
        }
    }
}
