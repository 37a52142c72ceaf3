//! Identity Provider Config

use clap::Args;

/// Identity provider settings.
#[derive(Debug, Args)]
pub struct IdentityProviderConfig {
    /// Identity provider address
    #[arg(long, env = "IDENTITY_ADDR")]
    pub addr: String,
}
