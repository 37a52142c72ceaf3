//! Menu Items Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::domain::menu::{
    data::{MenuItemUpdate, NewMenuItem},
    records::{MenuItemRecord, MenuItemUuid},
};

const LIST_MENU_ITEMS_SQL: &str = include_str!("sql/list_menu_items.sql");
const GET_MENU_ITEM_SQL: &str = include_str!("sql/get_menu_item.sql");
const CREATE_MENU_ITEM_SQL: &str = include_str!("sql/create_menu_item.sql");
const UPDATE_MENU_ITEM_SQL: &str = include_str!("sql/update_menu_item.sql");
const DELETE_MENU_ITEM_SQL: &str = include_str!("sql/delete_menu_item.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgMenuRepository;

impl PgMenuRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_menu_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<MenuItemRecord>, sqlx::Error> {
        query_as::<Postgres, MenuItemRecord>(LIST_MENU_ITEMS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_menu_item(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        menu_item: MenuItemUuid,
    ) -> Result<MenuItemRecord, sqlx::Error> {
        query_as::<Postgres, MenuItemRecord>(GET_MENU_ITEM_SQL)
            .bind(menu_item.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_menu_item(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        menu_item: NewMenuItem,
    ) -> Result<MenuItemRecord, sqlx::Error> {
        let price_i64 = price_to_i64(menu_item.price)?;

        query_as::<Postgres, MenuItemRecord>(CREATE_MENU_ITEM_SQL)
            .bind(menu_item.uuid.into_uuid())
            .bind(menu_item.name)
            .bind(menu_item.description)
            .bind(menu_item.category)
            .bind(menu_item.special_tag)
            .bind(price_i64)
            .bind(menu_item.image_url)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_menu_item(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        menu_item: MenuItemUuid,
        update: MenuItemUpdate,
    ) -> Result<MenuItemRecord, sqlx::Error> {
        let price_i64 = price_to_i64(update.price)?;

        query_as::<Postgres, MenuItemRecord>(UPDATE_MENU_ITEM_SQL)
            .bind(menu_item.into_uuid())
            .bind(update.name)
            .bind(update.description)
            .bind(update.category)
            .bind(update.special_tag)
            .bind(price_i64)
            .bind(update.image_url)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_menu_item(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        menu_item: MenuItemUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_MENU_ITEM_SQL)
            .bind(menu_item.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

fn price_to_i64(price: u64) -> Result<i64, sqlx::Error> {
    i64::try_from(price).map_err(|e| sqlx::Error::ColumnDecode {
        index: "price".to_string(),
        source: Box::new(e),
    })
}

impl<'r> FromRow<'r, PgRow> for MenuItemRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let price_i64: i64 = row.try_get("price")?;

        let price = u64::try_from(price_i64).map_err(|e| sqlx::Error::ColumnDecode {
            index: "price".to_string(),
            source: Box::new(e),
        })?;

        Ok(Self {
            uuid: MenuItemUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            category: row.try_get("category")?,
            special_tag: row.try_get("special_tag")?,
            price,
            image_url: row.try_get("image_url")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
