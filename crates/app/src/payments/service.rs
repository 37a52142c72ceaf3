//! Payments service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;

use crate::{
    auth::models::UserUuid,
    database::Db,
    domain::carts::{records::CartRecord, service::PgCartsService},
    payments::{
        errors::PaymentsServiceError,
        gateway::{PaymentGateway, PaymentIntent},
    },
};

/// A created payment intent together with the priced cart it covers.
#[derive(Debug, Clone)]
pub struct PaymentSession {
    pub intent: PaymentIntent,
    pub amount: u64,
    pub currency: String,
    pub cart: CartRecord,
}

#[derive(Clone)]
pub struct GatewayPaymentsService {
    db: Db,
    carts: PgCartsService,
    gateway: Arc<dyn PaymentGateway>,
    currency: String,
}

impl GatewayPaymentsService {
    #[must_use]
    pub fn new(db: Db, gateway: Arc<dyn PaymentGateway>, currency: String) -> Self {
        Self {
            carts: PgCartsService::new(db.clone()),
            db,
            gateway,
            currency,
        }
    }
}

#[async_trait]
impl PaymentsService for GatewayPaymentsService {
    async fn create_payment(&self, user: UserUuid) -> Result<PaymentSession, PaymentsServiceError> {
        let mut tx = self.db.begin().await?;

        let cart = self.carts.load_cart(&mut tx, user).await?;

        tx.commit().await?;

        let Some(cart) = cart else {
            return Err(PaymentsServiceError::EmptyCart);
        };

        if cart.lines.is_empty() || cart.total == 0 {
            return Err(PaymentsServiceError::EmptyCart);
        }

        // The gateway call happens outside the transaction; the amount is
        // whatever the pricer computed at read time.
        let intent = self
            .gateway
            .create_intent(cart.total, &self.currency)
            .await?;

        Ok(PaymentSession {
            intent,
            amount: cart.total,
            currency: self.currency.clone(),
            cart,
        })
    }
}

#[automock]
#[async_trait]
pub trait PaymentsService: Send + Sync {
    /// Price the user's cart and create a payment intent for its total.
    async fn create_payment(&self, user: UserUuid) -> Result<PaymentSession, PaymentsServiceError>;
}
