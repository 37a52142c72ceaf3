//! HTTP client for the external identity provider.

use async_trait::async_trait;
use mockall::automock;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::{
    errors::IdentityError,
    models::{AuthenticatedUser, Credentials, IssuedToken, NewUser, Role},
};

/// Configuration for connecting to the identity provider.
#[derive(Debug, Clone)]
pub struct IdentityConfig {
    /// Identity provider address, e.g. `"http://localhost:8710"`.
    pub addr: String,
}

/// Issues and resolves signed user tokens.
///
/// The application never inspects token contents itself; it trusts the claims
/// the provider hands back.
#[automock]
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Register a new user.
    async fn register(&self, new_user: NewUser) -> Result<AuthenticatedUser, IdentityError>;

    /// Exchange credentials for a signed bearer token.
    async fn login(&self, credentials: Credentials) -> Result<IssuedToken, IdentityError>;

    /// Resolve a bearer token into the claims it carries.
    async fn authenticate_bearer(&self, token: &str) -> Result<AuthenticatedUser, IdentityError>;
}

/// Identity provider client over its JSON API.
#[derive(Debug, Clone)]
pub struct RemoteIdentityProvider {
    config: IdentityConfig,
    http: Client,
}

impl RemoteIdentityProvider {
    /// Create a new client from the given configuration.
    #[must_use]
    pub fn new(config: IdentityConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }
}

#[async_trait]
impl IdentityProvider for RemoteIdentityProvider {
    async fn register(&self, new_user: NewUser) -> Result<AuthenticatedUser, IdentityError> {
        let url = format!("{}/v1/users", self.config.addr);

        let response = self.http.post(&url).json(&new_user).send().await?;

        if response.status() == StatusCode::CONFLICT {
            return Err(IdentityError::AlreadyExists);
        }

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(IdentityError::UnexpectedResponse(format!(
                "register failed with status {status}: {text}"
            )));
        }

        let claims: ClaimsResponse = response.json().await?;

        Ok(claims.into())
    }

    async fn login(&self, credentials: Credentials) -> Result<IssuedToken, IdentityError> {
        let url = format!("{}/v1/sessions", self.config.addr);

        let response = self.http.post(&url).json(&credentials).send().await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            return Err(IdentityError::InvalidCredentials);
        }

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(IdentityError::UnexpectedResponse(format!(
                "login failed with status {status}: {text}"
            )));
        }

        let parsed: SessionResponse = response.json().await?;

        Ok(IssuedToken {
            token: parsed.token,
            user: parsed.user.into(),
        })
    }

    async fn authenticate_bearer(&self, token: &str) -> Result<AuthenticatedUser, IdentityError> {
        let url = format!("{}/v1/sessions/introspect", self.config.addr);

        let response = self
            .http
            .post(&url)
            .json(&serde_json::json!({ "token": token }))
            .send()
            .await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            return Err(IdentityError::UnknownToken);
        }

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(IdentityError::UnexpectedResponse(format!(
                "introspection failed with status {status}: {text}"
            )));
        }

        let claims: ClaimsResponse = response.json().await?;

        Ok(claims.into())
    }
}

#[derive(Debug, Deserialize)]
struct ClaimsResponse {
    uuid: Uuid,
    name: String,
    email: String,
    role: Role,
}

impl From<ClaimsResponse> for AuthenticatedUser {
    fn from(claims: ClaimsResponse) -> Self {
        Self {
            uuid: claims.uuid.into(),
            name: claims.name,
            email: claims.email,
            role: claims.role,
        }
    }
}

#[derive(Debug, Deserialize)]
struct SessionResponse {
    token: String,
    user: ClaimsResponse,
}
