//! Order Items Repository

use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};
use uuid::Uuid;

use crate::domain::{
    columns::{amount_to_i64, try_get_amount, try_get_timestamp},
    orders::{
        data::OrderItemDraft,
        records::{OrderItemRecord, OrderItemUuid, OrderUuid},
    },
};

const CREATE_ORDER_ITEM_SQL: &str = include_str!("../sql/create_order_item.sql");
const LIST_ORDER_ITEMS_SQL: &str = include_str!("../sql/list_order_items.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgOrderItemsRepository;

impl PgOrderItemsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Insert one item; `position` keeps items in cart order.
    pub(crate) async fn create_item(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
        position: usize,
        item: &OrderItemDraft,
    ) -> Result<OrderItemRecord, sqlx::Error> {
        let position = i32::try_from(position).map_err(|e| sqlx::Error::Encode(Box::new(e)))?;

        query_as::<Postgres, OrderItemRecord>(CREATE_ORDER_ITEM_SQL)
            .bind(OrderItemUuid::new())
            .bind(order)
            .bind(item.product_uuid)
            .bind(item.variant_uuid)
            .bind(&item.product_name)
            .bind(&item.sku)
            .bind(&item.color)
            .bind(&item.storage)
            .bind(amount_to_i64(item.price, "price")?)
            .bind(amount_to_i64(item.quantity, "quantity")?)
            .bind(position)
            .fetch_one(&mut **tx)
            .await
    }

    /// Items of every given order, grouped by order and in cart order within each.
    pub(crate) async fn list_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        orders: &[OrderUuid],
    ) -> Result<Vec<OrderItemRecord>, sqlx::Error> {
        let orders: Vec<Uuid> = orders.iter().copied().map(OrderUuid::into_uuid).collect();

        query_as::<Postgres, OrderItemRecord>(LIST_ORDER_ITEMS_SQL)
            .bind(orders)
            .fetch_all(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for OrderItemRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: row.try_get("uuid")?,
            order_uuid: row.try_get("order_uuid")?,
            product_uuid: row.try_get("product_uuid")?,
            variant_uuid: row.try_get("variant_uuid")?,
            product_name: row.try_get("product_name")?,
            sku: row.try_get("sku")?,
            color: row.try_get("color")?,
            storage: row.try_get("storage")?,
            price: try_get_amount(row, "price")?,
            quantity: try_get_amount(row, "quantity")?,
            created_at: try_get_timestamp(row, "created_at")?,
        })
    }
}
