//! Orders Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};
use uuid::Uuid;

use crate::{
    auth::models::UserUuid,
    domain::{
        menu::records::MenuItemUuid,
        orders::{
            data::{NewOrder, NewOrderDetail, OrderUpdate},
            records::{OrderDetailRecord, OrderDetailUuid, OrderRecord, OrderStatus, OrderUuid},
        },
    },
};

const LIST_ORDERS_SQL: &str = include_str!("sql/list_orders.sql");
const GET_ORDER_SQL: &str = include_str!("sql/get_order.sql");
const GET_ORDER_DETAILS_SQL: &str = include_str!("sql/get_order_details.sql");
const CREATE_ORDER_SQL: &str = include_str!("sql/create_order.sql");
const CREATE_ORDER_DETAIL_SQL: &str = include_str!("sql/create_order_detail.sql");
const UPDATE_ORDER_SQL: &str = include_str!("sql/update_order.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgOrdersRepository;

impl PgOrdersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_orders(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: Option<UserUuid>,
    ) -> Result<Vec<OrderRecord>, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(LIST_ORDERS_SQL)
            .bind(user.map(UserUuid::into_uuid))
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
    ) -> Result<OrderRecord, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(GET_ORDER_SQL)
            .bind(order.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn get_order_details(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
    ) -> Result<Vec<OrderDetailRecord>, sqlx::Error> {
        query_as::<Postgres, OrderDetailRecord>(GET_ORDER_DETAILS_SQL)
            .bind(order.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn create_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: NewOrder,
    ) -> Result<OrderRecord, sqlx::Error> {
        let total_i64 = amount_to_i64(order.total)?;

        let total_items_i32 =
            i32::try_from(order.total_items).map_err(|e| sqlx::Error::ColumnDecode {
                index: "total_items".to_string(),
                source: Box::new(e),
            })?;

        let mut created = query_as::<Postgres, OrderRecord>(CREATE_ORDER_SQL)
            .bind(order.uuid.into_uuid())
            .bind(order.user_uuid.into_uuid())
            .bind(order.pickup_name)
            .bind(order.pickup_phone)
            .bind(order.pickup_email)
            .bind(total_i64)
            .bind(total_items_i32)
            .bind(order.payment_intent_id)
            .bind(order.status.as_str())
            .fetch_one(&mut **tx)
            .await?;

        for detail in order.details {
            self.create_order_detail(tx, order.uuid, detail).await?;
        }

        created.details = self.get_order_details(tx, created.uuid).await?;

        Ok(created)
    }

    async fn create_order_detail(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
        detail: NewOrderDetail,
    ) -> Result<(), sqlx::Error> {
        let unit_price_i64 = amount_to_i64(detail.unit_price)?;

        let quantity_i32 = i32::try_from(detail.quantity).map_err(|e| sqlx::Error::ColumnDecode {
            index: "quantity".to_string(),
            source: Box::new(e),
        })?;

        query(CREATE_ORDER_DETAIL_SQL)
            .bind(detail.uuid.into_uuid())
            .bind(order.into_uuid())
            .bind(detail.menu_item_uuid.into_uuid())
            .bind(detail.item_name)
            .bind(unit_price_i64)
            .bind(quantity_i32)
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    pub(crate) async fn update_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
        update: OrderUpdate,
    ) -> Result<OrderRecord, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(UPDATE_ORDER_SQL)
            .bind(order.into_uuid())
            .bind(update.status.map(OrderStatus::as_str))
            .bind(update.payment_intent_id)
            .fetch_one(&mut **tx)
            .await
    }
}

fn amount_to_i64(amount: u64) -> Result<i64, sqlx::Error> {
    i64::try_from(amount).map_err(|e| sqlx::Error::ColumnDecode {
        index: "total".to_string(),
        source: Box::new(e),
    })
}

impl<'r> FromRow<'r, PgRow> for OrderRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let total_i64: i64 = row.try_get("total")?;

        let total = u64::try_from(total_i64).map_err(|e| sqlx::Error::ColumnDecode {
            index: "total".to_string(),
            source: Box::new(e),
        })?;

        let total_items_i32: i32 = row.try_get("total_items")?;

        let total_items = u32::try_from(total_items_i32).map_err(|e| sqlx::Error::ColumnDecode {
            index: "total_items".to_string(),
            source: Box::new(e),
        })?;

        let status_text: String = row.try_get("status")?;

        let status = status_text
            .parse::<OrderStatus>()
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "status".to_string(),
                source: Box::new(e),
            })?;

        Ok(Self {
            uuid: OrderUuid::from_uuid(row.try_get("uuid")?),
            user_uuid: UserUuid::from_uuid(row.try_get::<Uuid, _>("user_uuid")?),
            pickup_name: row.try_get("pickup_name")?,
            pickup_phone: row.try_get("pickup_phone")?,
            pickup_email: row.try_get("pickup_email")?,
            total,
            total_items,
            payment_intent_id: row.try_get("payment_intent_id")?,
            status,
            details: Vec::new(),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}

impl<'r> FromRow<'r, PgRow> for OrderDetailRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let unit_price_i64: i64 = row.try_get("unit_price")?;

        let unit_price = u64::try_from(unit_price_i64).map_err(|e| sqlx::Error::ColumnDecode {
            index: "unit_price".to_string(),
            source: Box::new(e),
        })?;

        let quantity_i32: i32 = row.try_get("quantity")?;

        let quantity = u32::try_from(quantity_i32).map_err(|e| sqlx::Error::ColumnDecode {
            index: "quantity".to_string(),
            source: Box::new(e),
        })?;

        Ok(Self {
            uuid: OrderDetailUuid::from_uuid(row.try_get("uuid")?),
            menu_item_uuid: MenuItemUuid::from_uuid(row.try_get("menu_item_uuid")?),
            item_name: row.try_get("item_name")?,
            unit_price,
            quantity,
        })
    }
}
