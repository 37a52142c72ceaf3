use std::sync::Arc;

use salvo::Depot;

use crate::{
    envelope::{ApiError, Envelope},
    extensions::*,
    menu::errors::into_api_error,
    state::State,
};

use super::MenuItemResponse;

#[salvo::handler]
pub(crate) async fn index(depot: &mut Depot) -> Result<Envelope<Vec<MenuItemResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let menu_items = state
        .app
        .menu
        .list_menu_items()
        .await
        .map_err(into_api_error)?;

    Ok(Envelope::ok(
        menu_items.into_iter().map(Into::into).collect(),
    ))
}

#[cfg(test)]
mod tests {
    use salvo::{
        http::StatusCode,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;

    use ristoro_app::domain::menu::MockMenuService;

    use crate::test_helpers::{make_menu_item, service_with_menu};

    #[tokio::test]
    async fn test_index_lists_menu_items() -> TestResult {
        let mut menu = MockMenuService::new();

        menu.expect_list_menu_items()
            .once()
            .return_once(|| Ok(vec![make_menu_item("Margherita", 9_00)]));

        let service = service_with_menu(menu);

        let mut res = TestClient::get("http://example.com/menu-items")
            .send(&service)
            .await;

        let body: serde_json::Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body["result"][0]["name"], "Margherita");
        assert_eq!(body["result"][0]["price"], 900);

        Ok(())
    }
}
