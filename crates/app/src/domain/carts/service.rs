//! Carts service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::{Postgres, Transaction};

use crate::{
    auth::models::UserUuid,
    database::Db,
    domain::{
        carts::{
            errors::CartsServiceError,
            pricing,
            records::{CartLineUuid, CartRecord, CartUuid},
            repositories::{PgCartLinesRepository, PgCartsRepository},
            transitions::{self, CartTransition},
        },
        menu::records::MenuItemUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgCartsService {
    db: Db,
    carts_repository: PgCartsRepository,
    lines_repository: PgCartLinesRepository,
}

impl PgCartsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            carts_repository: PgCartsRepository::new(),
            lines_repository: PgCartLinesRepository::new(),
        }
    }

    pub(crate) async fn load_cart(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
    ) -> Result<Option<CartRecord>, CartsServiceError> {
        let Some(mut cart) = self.carts_repository.get_cart_by_user(tx, user).await? else {
            return Ok(None);
        };

        let lines = self.lines_repository.get_cart_lines(tx, cart.uuid).await?;

        cart.total = pricing::price(&lines);
        cart.lines = lines;

        Ok(Some(cart))
    }
}

#[async_trait]
impl CartsService for PgCartsService {
    async fn get_cart(&self, user: UserUuid) -> Result<CartRecord, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let cart = self.load_cart(&mut tx, user).await?;

        tx.commit().await?;

        cart.ok_or(CartsServiceError::CartNotFound)
    }

    async fn apply_delta(
        &self,
        user: UserUuid,
        menu_item: MenuItemUuid,
        delta: i32,
    ) -> Result<Option<CartRecord>, CartsServiceError> {
        // The advisory lock serializes reconciliations per user, so two
        // concurrent deltas cannot both observe the pre-mutation cart.
        let mut tx = self.db.begin_user_transaction(user).await?;

        if !self
            .carts_repository
            .menu_item_exists(&mut tx, menu_item)
            .await?
        {
            return Err(CartsServiceError::MenuItemNotFound);
        }

        let cart = self.load_cart(&mut tx, user).await?;
        let existing_uuid = cart.as_ref().map(|cart| cart.uuid);

        let transition = transitions::reconcile(cart.as_ref(), menu_item, delta)?;

        match transition {
            CartTransition::Noop => {}
            CartTransition::CreateCartWithLine { quantity } => {
                let created = self
                    .carts_repository
                    .create_cart(&mut tx, CartUuid::new(), user)
                    .await?;

                self.lines_repository
                    .insert_line(&mut tx, created.uuid, CartLineUuid::new(), menu_item, quantity)
                    .await?;
            }
            CartTransition::InsertLine { quantity } => {
                let cart_uuid = existing_uuid.ok_or(CartsServiceError::CartNotFound)?;

                self.lines_repository
                    .insert_line(&mut tx, cart_uuid, CartLineUuid::new(), menu_item, quantity)
                    .await?;
            }
            CartTransition::UpdateLine { line, quantity } => {
                self.lines_repository
                    .update_line_quantity(&mut tx, line, quantity)
                    .await?;
            }
            CartTransition::RemoveLine { line, remove_cart } => {
                self.lines_repository.delete_line(&mut tx, line).await?;

                if remove_cart {
                    let cart_uuid = existing_uuid.ok_or(CartsServiceError::CartNotFound)?;

                    self.carts_repository.delete_cart(&mut tx, cart_uuid).await?;
                }
            }
        }

        // Re-read within the transaction so the returned cart reflects the
        // mutation and a freshly computed total.
        let reconciled = self.load_cart(&mut tx, user).await?;

        tx.commit().await?;

        Ok(reconciled)
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Retrieve and price the user's cart.
    async fn get_cart(&self, user: UserUuid) -> Result<CartRecord, CartsServiceError>;

    /// Apply a signed quantity delta for a menu item to the user's cart,
    /// creating or removing the cart and its lines as required.
    ///
    /// Returns the reconciled, freshly priced cart, or `None` when no cart
    /// remains after the operation.
    async fn apply_delta(
        &self,
        user: UserUuid,
        menu_item: MenuItemUuid,
        delta: i32,
    ) -> Result<Option<CartRecord>, CartsServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{domain::menu::MenuService, test::TestContext};

    use super::*;

    async fn count_carts(ctx: &TestContext, user: UserUuid) -> i64 {
        sqlx::query_scalar("SELECT count(*) FROM carts WHERE user_uuid = $1")
            .bind(user.into_uuid())
            .fetch_one(ctx.db.pool())
            .await
            .expect("Failed to count carts")
    }

    #[tokio::test]
    async fn first_positive_delta_creates_one_cart_with_one_line() -> TestResult {
        let ctx = TestContext::new().await;
        let item = ctx.create_menu_item("Margherita", 9_00).await;
        let user = UserUuid::new();

        let cart = ctx
            .carts
            .apply_delta(user, item.uuid, 2)
            .await?
            .expect("a cart should exist after a positive delta");

        assert_eq!(cart.user_uuid, user);
        assert_eq!(cart.lines.len(), 1);
        assert_eq!(cart.lines[0].menu_item_uuid, item.uuid);
        assert_eq!(cart.lines[0].quantity, 2);
        assert_eq!(cart.lines[0].unit_price, Some(9_00));
        assert_eq!(cart.total, 18_00);
        assert_eq!(count_carts(&ctx, user).await, 1);

        Ok(())
    }

    #[tokio::test]
    async fn repeated_deltas_merge_into_the_existing_line() -> TestResult {
        let ctx = TestContext::new().await;
        let item = ctx.create_menu_item("Margherita", 9_00).await;
        let user = UserUuid::new();

        ctx.carts.apply_delta(user, item.uuid, 2).await?;

        let cart = ctx
            .carts
            .apply_delta(user, item.uuid, 3)
            .await?
            .expect("the cart should survive a further increment");

        assert_eq!(cart.lines.len(), 1);
        assert_eq!(cart.lines[0].quantity, 5);
        assert_eq!(cart.total, 45_00);
        assert_eq!(count_carts(&ctx, user).await, 1);

        Ok(())
    }

    #[tokio::test]
    async fn cancelling_the_only_line_removes_line_and_cart() -> TestResult {
        let ctx = TestContext::new().await;
        let item = ctx.create_menu_item("Margherita", 9_00).await;
        let user = UserUuid::new();

        ctx.carts.apply_delta(user, item.uuid, 2).await?;

        let reconciled = ctx.carts.apply_delta(user, item.uuid, -2).await?;

        assert!(reconciled.is_none(), "no cart should remain");

        let result = ctx.carts.get_cart(user).await;

        assert!(
            matches!(result, Err(CartsServiceError::CartNotFound)),
            "expected CartNotFound after cleanup, got {result:?}"
        );
        assert_eq!(count_carts(&ctx, user).await, 0);

        let lines: i64 = sqlx::query_scalar("SELECT count(*) FROM cart_lines")
            .fetch_one(ctx.db.pool())
            .await?;

        assert_eq!(lines, 0);

        Ok(())
    }

    #[tokio::test]
    async fn zero_delta_clears_the_line_in_storage() -> TestResult {
        let ctx = TestContext::new().await;
        let pizza = ctx.create_menu_item("Margherita", 9_00).await;
        let dessert = ctx.create_menu_item("Tiramisu", 4_50).await;
        let user = UserUuid::new();

        ctx.carts.apply_delta(user, pizza.uuid, 3).await?;
        ctx.carts.apply_delta(user, dessert.uuid, 1).await?;

        let cart = ctx
            .carts
            .apply_delta(user, pizza.uuid, 0)
            .await?
            .expect("the cart should keep its other line");

        assert_eq!(cart.lines.len(), 1);
        assert_eq!(cart.lines[0].menu_item_uuid, dessert.uuid);
        assert_eq!(cart.total, 4_50);

        Ok(())
    }

    #[tokio::test]
    async fn unknown_menu_item_is_rejected_without_mutation() -> TestResult {
        let ctx = TestContext::new().await;
        let user = UserUuid::new();

        let result = ctx.carts.apply_delta(user, MenuItemUuid::new(), 1).await;

        assert!(
            matches!(result, Err(CartsServiceError::MenuItemNotFound)),
            "expected MenuItemNotFound, got {result:?}"
        );
        assert_eq!(count_carts(&ctx, user).await, 0);

        Ok(())
    }

    #[tokio::test]
    async fn deleted_menu_item_prices_as_zero_on_read() -> TestResult {
        let ctx = TestContext::new().await;
        let pizza = ctx.create_menu_item("Margherita", 9_00).await;
        let dessert = ctx.create_menu_item("Tiramisu", 4_50).await;
        let user = UserUuid::new();

        ctx.carts.apply_delta(user, pizza.uuid, 2).await?;
        ctx.carts.apply_delta(user, dessert.uuid, 1).await?;

        ctx.menu.delete_menu_item(pizza.uuid).await?;

        let cart = ctx.carts.get_cart(user).await?;

        let orphan = cart
            .lines
            .iter()
            .find(|line| line.menu_item_uuid == pizza.uuid)
            .expect("the orphaned line should survive the menu deletion");

        assert_eq!(orphan.unit_price, None);
        assert_eq!(cart.total, 4_50);

        Ok(())
    }

    #[tokio::test]
    async fn concurrent_increments_converge_to_one_cart() -> TestResult {
        let ctx = TestContext::new().await;
        let item = ctx.create_menu_item("Margherita", 9_00).await;
        let user = UserUuid::new();

        let first = {
            let carts = ctx.carts.clone();
            let item = item.uuid;

            tokio::spawn(async move { carts.apply_delta(user, item, 1).await })
        };

        let second = {
            let carts = ctx.carts.clone();
            let item = item.uuid;

            tokio::spawn(async move { carts.apply_delta(user, item, 1).await })
        };

        first.await??;
        second.await??;

        let cart = ctx.carts.get_cart(user).await?;

        assert_eq!(cart.lines.len(), 1);
        assert_eq!(cart.lines[0].quantity, 2);
        assert_eq!(count_carts(&ctx, user).await, 1);

        Ok(())
    }
}
