use std::sync::Arc;

use salvo::{Depot, Request};
use uuid::Uuid;

use crate::{
    carts::errors::into_api_error,
    envelope::{ApiError, Envelope},
    extensions::*,
    state::State,
};

use super::{CartResponse, user_uuid_param};

/// Apply a signed quantity delta to one menu item in the caller's cart.
///
/// A cart that empties out (or never existed while the delta was
/// non-positive) answers with the empty cart shape rather than an error.
#[salvo::handler]
pub(crate) async fn apply_delta(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Envelope<CartResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let user = user_uuid_param(req)?;

    let menu_item = req
        .query::<Uuid>("menuItemId")
        .ok_or_else(|| ApiError::bad_request("A valid menuItemId query parameter is required"))?;

    let delta = req
        .query::<i32>("updateQuantityBy")
        .ok_or_else(|| {
            ApiError::bad_request("A valid updateQuantityBy query parameter is required")
        })?;

    let cart = state
        .app
        .carts
        .apply_delta(user, menu_item.into(), delta)
        .await
        .map_err(into_api_error)?;

    let response = cart.map_or_else(|| CartResponse::empty(user), Into::into);

    Ok(Envelope::ok(response))
}

#[cfg(test)]
mod tests {
    use salvo::{
        http::StatusCode,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;
    use uuid::Uuid;

    use ristoro_app::domain::carts::{CartsServiceError, MockCartsService};

    use crate::test_helpers::{TEST_USER_UUID, make_cart, service_with_carts};

    fn cart_url(menu_item: Uuid, delta: i32) -> String {
        format!(
            "http://example.com/cart?userId={TEST_USER_UUID}&menuItemId={menu_item}&updateQuantityBy={delta}"
        )
    }

    #[tokio::test]
    async fn test_positive_delta_returns_the_reconciled_cart() -> TestResult {
        let menu_item = Uuid::now_v7();

        let mut carts = MockCartsService::new();

        carts
            .expect_apply_delta()
            .once()
            .withf(move |user, item, delta| {
                user.into_uuid() == TEST_USER_UUID && item.into_uuid() == menu_item && *delta == 2
            })
            .return_once(|user, _, _| Ok(Some(make_cart(user, &[(9_00, 2)]))));

        let service = service_with_carts(carts);

        let mut res = TestClient::post(cart_url(menu_item, 2)).send(&service).await;

        let body: serde_json::Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body["isSuccess"], true);
        assert_eq!(body["result"]["total"], 18_00);

        Ok(())
    }

    #[tokio::test]
    async fn test_emptied_cart_answers_with_the_empty_shape() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_apply_delta()
            .once()
            .return_once(|_, _, _| Ok(None));

        let service = service_with_carts(carts);

        let mut res = TestClient::post(cart_url(Uuid::now_v7(), -5)).send(&service).await;

        let body: serde_json::Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body["result"]["uuid"], serde_json::Value::Null);
        assert_eq!(body["result"]["total"], 0);
        assert_eq!(body["result"]["lines"], serde_json::json!([]));

        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_menu_item_returns_404() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_apply_delta()
            .once()
            .return_once(|_, _, _| Err(CartsServiceError::MenuItemNotFound));

        let service = service_with_carts(carts);

        let res = TestClient::post(cart_url(Uuid::now_v7(), 1)).send(&service).await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_missing_delta_returns_400() -> TestResult {
        let mut carts = MockCartsService::new();

        carts.expect_apply_delta().never();

        let service = service_with_carts(carts);

        let res = TestClient::post(format!(
            "http://example.com/cart?userId={TEST_USER_UUID}&menuItemId={}",
            Uuid::now_v7()
        ))
        .send(&service)
        .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_concurrent_conflict_returns_409() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_apply_delta()
            .once()
            .return_once(|_, _, _| Err(CartsServiceError::Conflict));

        let service = service_with_carts(carts);

        let res = TestClient::post(cart_url(Uuid::now_v7(), 1)).send(&service).await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));

        Ok(())
    }
}
