//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    auth::IdentityProvider,
    blobs::BlobStore,
    database::{self, Db},
    domain::{
        carts::{CartsService, PgCartsService},
        menu::{MenuService, PgMenuService},
        orders::{OrdersService, PgOrdersService},
    },
    payments::{GatewayPaymentsService, PaymentGateway, PaymentsService},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

/// Wired-up services handed to the HTTP layer.
#[derive(Clone)]
pub struct AppContext {
    pub menu: Arc<dyn MenuService>,
    pub carts: Arc<dyn CartsService>,
    pub orders: Arc<dyn OrdersService>,
    pub payments: Arc<dyn PaymentsService>,
    pub identity: Arc<dyn IdentityProvider>,
    pub blobs: Arc<dyn BlobStore>,
}

impl AppContext {
    /// Build application context from a database URL and the external
    /// collaborators.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_database_url(
        url: &str,
        identity: Arc<dyn IdentityProvider>,
        blobs: Arc<dyn BlobStore>,
        gateway: Arc<dyn PaymentGateway>,
        currency: String,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        let db = Db::new(pool);

        Ok(Self {
            menu: Arc::new(PgMenuService::new(db.clone())),
            carts: Arc::new(PgCartsService::new(db.clone())),
            orders: Arc::new(PgOrdersService::new(db.clone())),
            payments: Arc::new(GatewayPaymentsService::new(db, gateway, currency)),
            identity,
            blobs,
        })
    }
}
