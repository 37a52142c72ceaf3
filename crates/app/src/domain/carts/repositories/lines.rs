//! Cart Lines Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::domain::{
    carts::records::{CartLineRecord, CartLineUuid, CartUuid},
    menu::records::MenuItemUuid,
};

use super::carts::try_get_amount;

const GET_CART_LINES_SQL: &str = include_str!("../sql/get_cart_lines.sql");
const INSERT_CART_LINE_SQL: &str = include_str!("../sql/insert_cart_line.sql");
const UPDATE_CART_LINE_SQL: &str = include_str!("../sql/update_cart_line.sql");
const DELETE_CART_LINE_SQL: &str = include_str!("../sql/delete_cart_line.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCartLinesRepository;

impl PgCartLinesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn get_cart_lines(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartUuid,
    ) -> Result<Vec<CartLineRecord>, sqlx::Error> {
        query_as::<Postgres, CartLineRecord>(GET_CART_LINES_SQL)
            .bind(cart.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn insert_line(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartUuid,
        line: CartLineUuid,
        menu_item: MenuItemUuid,
        quantity: u32,
    ) -> Result<(), sqlx::Error> {
        query(INSERT_CART_LINE_SQL)
            .bind(line.into_uuid())
            .bind(cart.into_uuid())
            .bind(menu_item.into_uuid())
            .bind(quantity_to_i32(quantity)?)
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    pub(crate) async fn update_line_quantity(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        line: CartLineUuid,
        quantity: u32,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(UPDATE_CART_LINE_SQL)
            .bind(line.into_uuid())
            .bind(quantity_to_i32(quantity)?)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn delete_line(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        line: CartLineUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_CART_LINE_SQL)
            .bind(line.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

fn quantity_to_i32(quantity: u32) -> Result<i32, sqlx::Error> {
    i32::try_from(quantity).map_err(|e| sqlx::Error::ColumnDecode {
        index: "quantity".to_string(),
        source: Box::new(e),
    })
}

impl<'r> FromRow<'r, PgRow> for CartLineRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let quantity_i32: i32 = row.try_get("quantity")?;

        let quantity = u32::try_from(quantity_i32).map_err(|e| sqlx::Error::ColumnDecode {
            index: "quantity".to_string(),
            source: Box::new(e),
        })?;

        let unit_price = match row.try_get::<Option<i64>, _>("unit_price")? {
            Some(_) => Some(try_get_amount(row, "unit_price")?),
            None => None,
        };

        Ok(Self {
            uuid: CartLineUuid::from_uuid(row.try_get("uuid")?),
            menu_item_uuid: MenuItemUuid::from_uuid(row.try_get("menu_item_uuid")?),
            quantity,
            unit_price,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
