//! Menu service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::menu::{
        data::{MenuItemUpdate, NewMenuItem},
        errors::MenuServiceError,
        records::{MenuItemRecord, MenuItemUuid},
        repository::PgMenuRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgMenuService {
    db: Db,
    repository: PgMenuRepository,
}

impl PgMenuService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgMenuRepository::new(),
        }
    }
}

#[async_trait]
impl MenuService for PgMenuService {
    async fn list_menu_items(&self) -> Result<Vec<MenuItemRecord>, MenuServiceError> {
        let mut tx = self.db.begin().await?;

        let menu_items = self.repository.list_menu_items(&mut tx).await?;

        tx.commit().await?;

        Ok(menu_items)
    }

    async fn get_menu_item(
        &self,
        menu_item: MenuItemUuid,
    ) -> Result<MenuItemRecord, MenuServiceError> {
        let mut tx = self.db.begin().await?;

        let menu_item = self.repository.get_menu_item(&mut tx, menu_item).await?;

        tx.commit().await?;

        Ok(menu_item)
    }

    async fn create_menu_item(
        &self,
        menu_item: NewMenuItem,
    ) -> Result<MenuItemRecord, MenuServiceError> {
        let mut tx = self.db.begin().await?;

        let created = self.repository.create_menu_item(&mut tx, menu_item).await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn update_menu_item(
        &self,
        menu_item: MenuItemUuid,
        update: MenuItemUpdate,
    ) -> Result<MenuItemRecord, MenuServiceError> {
        let mut tx = self.db.begin().await?;

        let updated = self
            .repository
            .update_menu_item(&mut tx, menu_item, update)
            .await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn delete_menu_item(&self, menu_item: MenuItemUuid) -> Result<(), MenuServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.delete_menu_item(&mut tx, menu_item).await?;

        if rows_affected == 0 {
            return Err(MenuServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait MenuService: Send + Sync {
    /// Retrieves all menu items.
    async fn list_menu_items(&self) -> Result<Vec<MenuItemRecord>, MenuServiceError>;

    /// Retrieve a single menu item.
    async fn get_menu_item(
        &self,
        menu_item: MenuItemUuid,
    ) -> Result<MenuItemRecord, MenuServiceError>;

    /// Creates a new menu item.
    async fn create_menu_item(
        &self,
        menu_item: NewMenuItem,
    ) -> Result<MenuItemRecord, MenuServiceError>;

    /// Updates an existing menu item.
    async fn update_menu_item(
        &self,
        menu_item: MenuItemUuid,
        update: MenuItemUpdate,
    ) -> Result<MenuItemRecord, MenuServiceError>;

    /// Deletes a menu item with the given UUID.
    async fn delete_menu_item(&self, menu_item: MenuItemUuid) -> Result<(), MenuServiceError>;
}
