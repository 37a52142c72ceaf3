use std::sync::Arc;

use salvo::{Depot, Request};
use serde::Serialize;
use uuid::Uuid;

use ristoro_app::{auth::models::UserUuid, payments::PaymentSession};

use crate::{
    carts::CartResponse,
    envelope::{ApiError, Envelope},
    extensions::*,
    payments::errors::into_api_error,
    state::State,
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PaymentSessionResponse {
    intent_id: String,
    client_secret: String,
    /// Amount in minor units the intent was created for.
    amount: u64,
    currency: String,
    cart: CartResponse,
}

impl From<PaymentSession> for PaymentSessionResponse {
    fn from(session: PaymentSession) -> Self {
        Self {
            intent_id: session.intent.intent_id,
            client_secret: session.intent.client_secret,
            amount: session.amount,
            currency: session.currency,
            cart: session.cart.into(),
        }
    }
}

/// Create a payment intent covering the caller's current cart total.
#[salvo::handler]
pub(crate) async fn create(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Envelope<PaymentSessionResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let user: UserUuid = req
        .query::<Uuid>("userId")
        .map(Into::into)
        .ok_or_else(|| ApiError::bad_request("A valid userId query parameter is required"))?;

    let session = state
        .app
        .payments
        .create_payment(user)
        .await
        .map_err(into_api_error)?;

    Ok(Envelope::created(session.into()))
}

#[cfg(test)]
mod tests {
    use salvo::{
        http::StatusCode,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;

    use ristoro_app::payments::{
        MockPaymentsService, PaymentIntent, PaymentSession, PaymentsServiceError,
    };

    use crate::test_helpers::{TEST_USER_UUID, make_cart, service_with_payments};

    #[tokio::test]
    async fn test_create_returns_the_intent_and_priced_cart() -> TestResult {
        let mut payments = MockPaymentsService::new();

        payments
            .expect_create_payment()
            .once()
            .withf(|user| user.into_uuid() == TEST_USER_UUID)
            .return_once(|user| {
                let cart = make_cart(user, &[(9_00, 2)]);

                Ok(PaymentSession {
                    intent: PaymentIntent {
                        intent_id: "pi_123".to_string(),
                        client_secret: "pi_123_secret".to_string(),
                    },
                    amount: cart.total,
                    currency: "usd".to_string(),
                    cart,
                })
            });

        let service = service_with_payments(payments);

        let mut res = TestClient::post(format!(
            "http://example.com/payments?userId={TEST_USER_UUID}"
        ))
        .send(&service)
        .await;

        let body: serde_json::Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(body["result"]["intentId"], "pi_123");
        assert_eq!(body["result"]["amount"], 18_00);
        assert_eq!(body["result"]["cart"]["total"], 18_00);

        Ok(())
    }

    #[tokio::test]
    async fn test_empty_cart_returns_400() -> TestResult {
        let mut payments = MockPaymentsService::new();

        payments
            .expect_create_payment()
            .once()
            .return_once(|_| Err(PaymentsServiceError::EmptyCart));

        let service = service_with_payments(payments);

        let res = TestClient::post(format!(
            "http://example.com/payments?userId={TEST_USER_UUID}"
        ))
        .send(&service)
        .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
