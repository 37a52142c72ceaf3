use std::sync::Arc;

use salvo::{Depot, Request};
use uuid::Uuid;

use crate::{
    envelope::{ApiError, Envelope},
    extensions::*,
    menu::errors::into_api_error,
    state::State,
};

use super::MenuItemResponse;

#[salvo::handler]
pub(crate) async fn get(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Envelope<MenuItemResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let uuid = req
        .param::<Uuid>("uuid")
        .ok_or_else(|| ApiError::bad_request("Invalid menu item UUID"))?;

    let menu_item = state
        .app
        .menu
        .get_menu_item(uuid.into())
        .await
        .map_err(into_api_error)?;

    Ok(Envelope::ok(menu_item.into()))
}

#[cfg(test)]
mod tests {
    use salvo::{
        http::StatusCode,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;
    use uuid::Uuid;

    use ristoro_app::domain::menu::{MenuServiceError, MockMenuService};

    use crate::test_helpers::{make_menu_item, service_with_menu};

    #[tokio::test]
    async fn test_get_returns_the_menu_item() -> TestResult {
        let item = make_menu_item("Tiramisu", 4_50);
        let uuid = item.uuid;

        let mut menu = MockMenuService::new();

        menu.expect_get_menu_item()
            .once()
            .withf(move |requested| *requested == uuid)
            .return_once(move |_| Ok(item));

        let service = service_with_menu(menu);

        let mut res = TestClient::get(format!("http://example.com/menu-items/{uuid}"))
            .send(&service)
            .await;

        let body: serde_json::Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body["result"]["name"], "Tiramisu");

        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_menu_item_returns_404() -> TestResult {
        let mut menu = MockMenuService::new();

        menu.expect_get_menu_item()
            .once()
            .return_once(|_| Err(MenuServiceError::NotFound));

        let service = service_with_menu(menu);

        let res = TestClient::get(format!("http://example.com/menu-items/{}", Uuid::now_v7()))
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
