//! Orders service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    auth::models::UserUuid,
    database::Db,
    domain::orders::{
        data::{NewOrder, OrderUpdate},
        errors::OrdersServiceError,
        records::{OrderRecord, OrderUuid},
        repository::PgOrdersRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgOrdersService {
    db: Db,
    repository: PgOrdersRepository,
}

impl PgOrdersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgOrdersRepository::new(),
        }
    }
}

#[async_trait]
impl OrdersService for PgOrdersService {
    async fn list_orders(
        &self,
        user: Option<UserUuid>,
    ) -> Result<Vec<OrderRecord>, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let mut orders = self.repository.list_orders(&mut tx, user).await?;

        for order in &mut orders {
            order.details = self.repository.get_order_details(&mut tx, order.uuid).await?;
        }

        tx.commit().await?;

        Ok(orders)
    }

    async fn get_order(&self, order: OrderUuid) -> Result<OrderRecord, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let mut order = self.repository.get_order(&mut tx, order).await?;

        order.details = self.repository.get_order_details(&mut tx, order.uuid).await?;

        tx.commit().await?;

        Ok(order)
    }

    async fn create_order(&self, order: NewOrder) -> Result<OrderRecord, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let created = self.repository.create_order(&mut tx, order).await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn update_order(
        &self,
        order: OrderUuid,
        update: OrderUpdate,
    ) -> Result<OrderRecord, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let mut updated = self.repository.update_order(&mut tx, order, update).await?;

        updated.details = self
            .repository
            .get_order_details(&mut tx, updated.uuid)
            .await?;

        tx.commit().await?;

        Ok(updated)
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Retrieves orders, newest first, optionally filtered to one user.
    async fn list_orders(
        &self,
        user: Option<UserUuid>,
    ) -> Result<Vec<OrderRecord>, OrdersServiceError>;

    /// Retrieve a single order with its details.
    async fn get_order(&self, order: OrderUuid) -> Result<OrderRecord, OrdersServiceError>;

    /// Creates an order header together with its details.
    async fn create_order(&self, order: NewOrder) -> Result<OrderRecord, OrdersServiceError>;

    /// Updates an order's status and/or payment intent reference.
    async fn update_order(
        &self,
        order: OrderUuid,
        update: OrderUpdate,
    ) -> Result<OrderRecord, OrdersServiceError>;
}
