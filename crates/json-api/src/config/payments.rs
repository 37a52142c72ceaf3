//! Payment Gateway Config

use clap::Args;

/// Payment gateway settings.
#[derive(Debug, Args)]
pub struct PaymentsConfig {
    /// Gateway secret API key
    #[arg(long, env = "STRIPE_SECRET_KEY", hide_env_values = true)]
    pub stripe_secret_key: String,

    /// Gateway API base URL
    #[arg(long, env = "STRIPE_API_BASE", default_value = "https://api.stripe.com")]
    pub stripe_api_base: String,

    /// Currency payment intents are created in
    #[arg(long, env = "PAYMENT_CURRENCY", default_value = "usd")]
    pub currency: String,
}
