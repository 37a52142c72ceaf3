//! Test context for service-level integration tests.

use crate::{
    database::Db,
    domain::{
        carts::PgCartsService,
        menu::{
            MenuService, PgMenuService,
            data::NewMenuItem,
            records::{MenuItemRecord, MenuItemUuid},
        },
    },
};

use super::db::TestDb;

/// Wired-up Postgres services over an isolated per-test database.
pub(crate) struct TestContext {
    pub(crate) db: TestDb,
    pub(crate) menu: PgMenuService,
    pub(crate) carts: PgCartsService,
}

impl TestContext {
    pub(crate) async fn new() -> Self {
        let test_db = TestDb::new().await;

        let db = Db::new(test_db.pool().clone());

        Self {
            menu: PgMenuService::new(db.clone()),
            carts: PgCartsService::new(db),
            db: test_db,
        }
    }

    /// Create a menu item with the given price in minor units.
    pub(crate) async fn create_menu_item(&self, name: &str, price: u64) -> MenuItemRecord {
        self.menu
            .create_menu_item(NewMenuItem {
                uuid: MenuItemUuid::new(),
                name: name.to_string(),
                description: format!("A plate of {name}"),
                category: "Entree".to_string(),
                special_tag: None,
                price,
                image_url: format!("http://media.test/menu/{name}.png"),
            })
            .await
            .expect("Failed to create test menu item")
    }
}
