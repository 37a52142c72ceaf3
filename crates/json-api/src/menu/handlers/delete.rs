use std::sync::Arc;

use salvo::{Depot, Request};
use tracing::warn;
use uuid::Uuid;

use crate::{
    envelope::{ApiError, Envelope},
    extensions::*,
    menu::errors::into_api_error,
    state::State,
};

use super::image_blob_name_from_url;

#[salvo::handler]
pub(crate) async fn delete(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Envelope<()>, ApiError> {
    depot.require_admin()?;

    let state = depot.obtain_or_500::<Arc<State>>()?;

    let uuid = req
        .param::<Uuid>("uuid")
        .ok_or_else(|| ApiError::bad_request("Invalid menu item UUID"))?;

    let existing = state
        .app
        .menu
        .get_menu_item(uuid.into())
        .await
        .map_err(into_api_error)?;

    state
        .app
        .menu
        .delete_menu_item(uuid.into())
        .await
        .map_err(into_api_error)?;

    // The row is gone; a leftover blob is only worth a warning.
    if let Some(blob_name) = image_blob_name_from_url(&existing.image_url)
        && let Err(cleanup) = state.app.blobs.delete(blob_name).await
    {
        warn!("failed to remove image of deleted menu item: {cleanup}");
    }

    Ok(Envelope::ok(()))
}
