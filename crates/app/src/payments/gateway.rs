//! HTTP client for the external payment gateway.

use async_trait::async_trait;
use mockall::automock;
use reqwest::Client;
use serde::Deserialize;

use crate::payments::errors::PaymentGatewayError;

/// An intent created with the gateway; the client secret is handed to the
/// caller so the frontend can complete the payment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentIntent {
    pub intent_id: String,
    pub client_secret: String,
}

/// Creates payment intents for an amount in minor units.
#[automock]
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn create_intent(
        &self,
        amount: u64,
        currency: &str,
    ) -> Result<PaymentIntent, PaymentGatewayError>;
}

/// Configuration for the Stripe-compatible gateway.
#[derive(Debug, Clone)]
pub struct StripeConfig {
    /// Secret API key.
    pub secret_key: String,

    /// API base URL, e.g. `"https://api.stripe.com"`.
    pub api_base: String,
}

/// Payment gateway client over the Stripe payment-intents API.
#[derive(Debug, Clone)]
pub struct StripeGateway {
    config: StripeConfig,
    http: Client,
}

impl StripeGateway {
    /// Create a new client from the given configuration.
    #[must_use]
    pub fn new(config: StripeConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }
}

#[async_trait]
impl PaymentGateway for StripeGateway {
    async fn create_intent(
        &self,
        amount: u64,
        currency: &str,
    ) -> Result<PaymentIntent, PaymentGatewayError> {
        let url = format!("{}/v1/payment_intents", self.config.api_base);

        let params = [
            ("amount", amount.to_string()),
            ("currency", currency.to_string()),
            ("automatic_payment_methods[enabled]", "true".to_string()),
        ];

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.config.secret_key)
            .form(&params)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(PaymentGatewayError::UnexpectedResponse(format!(
                "payment intent creation failed with status {status}: {text}"
            )));
        }

        let parsed: PaymentIntentResponse = response.json().await?;

        Ok(PaymentIntent {
            intent_id: parsed.id,
            client_secret: parsed.client_secret,
        })
    }
}

#[derive(Debug, Deserialize)]
struct PaymentIntentResponse {
    id: String,
    client_secret: String,
}
