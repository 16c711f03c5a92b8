//! Shipments Repository

use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::{
    columns::{try_get_amount, try_get_optional_timestamp, try_get_timestamp},
    orders::records::OrderUuid,
    shipments::{
        data::NewShipment,
        records::{ShipmentRecord, ShipmentStatus, ShipmentUuid, ShippingMethodRecord},
    },
};

const LIST_SHIPPING_METHODS_SQL: &str = include_str!("sql/list_shipping_methods.sql");
const FIND_ACTIVE_SHIPPING_METHOD_SQL: &str = include_str!("sql/find_active_shipping_method.sql");
const CREATE_SHIPMENT_SQL: &str = include_str!("sql/create_shipment.sql");
const FIND_SHIPMENT_SQL: &str = include_str!("sql/find_shipment.sql");
const UPDATE_SHIPMENT_STATUS_SQL: &str = include_str!("sql/update_shipment_status.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgShipmentsRepository;

impl PgShipmentsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Active methods, cheapest first.
    pub(crate) async fn list_methods(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<ShippingMethodRecord>, sqlx::Error> {
        query_as::<Postgres, ShippingMethodRecord>(LIST_SHIPPING_METHODS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn find_active_method(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        code: &str,
    ) -> Result<Option<ShippingMethodRecord>, sqlx::Error> {
        query_as::<Postgres, ShippingMethodRecord>(FIND_ACTIVE_SHIPPING_METHOD_SQL)
            .bind(code)
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn create_shipment(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        shipment: &NewShipment,
    ) -> Result<ShipmentRecord, sqlx::Error> {
        query_as::<Postgres, ShipmentRecord>(CREATE_SHIPMENT_SQL)
            .bind(ShipmentUuid::new())
            .bind(shipment.order_uuid)
            .bind(&shipment.method_code)
            .bind(shipment.tracking_number.trim())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn find_shipment(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
    ) -> Result<Option<ShipmentRecord>, sqlx::Error> {
        query_as::<Postgres, ShipmentRecord>(FIND_SHIPMENT_SQL)
            .bind(order)
            .fetch_optional(&mut **tx)
            .await
    }

    /// Set the status, stamping `shipped_at` or `delivered_at` on entry.
    pub(crate) async fn update_status(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
        status: ShipmentStatus,
    ) -> Result<ShipmentRecord, sqlx::Error> {
        query_as::<Postgres, ShipmentRecord>(UPDATE_SHIPMENT_STATUS_SQL)
            .bind(order)
            .bind(status.as_str())
            .fetch_one(&mut **tx)
            .await
    }
}

fn try_get_shipment_status(row: &PgRow, col: &str) -> Result<ShipmentStatus, sqlx::Error> {
    row.try_get::<String, _>(col)?
        .parse::<ShipmentStatus>()
        .map_err(|e| sqlx::Error::ColumnDecode {
            index: col.to_string(),
            source: Box::new(e),
        })
}

impl<'r> FromRow<'r, PgRow> for ShippingMethodRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let estimated_days: i32 = row.try_get("estimated_days")?;

        Ok(Self {
            code: row.try_get("code")?,
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            cost: try_get_amount(row, "cost")?,
            estimated_days: u32::try_from(estimated_days).map_err(|e| {
                sqlx::Error::ColumnDecode {
                    index: "estimated_days".to_string(),
                    source: Box::new(e),
                }
            })?,
            is_active: row.try_get("is_active")?,
        })
    }
}

impl<'r> FromRow<'r, PgRow> for ShipmentRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: row.try_get("uuid")?,
            order_uuid: row.try_get("order_uuid")?,
            method_code: row.try_get("method_code")?,
            method_name: row.try_get("method_name")?,
            tracking_number: row.try_get("tracking_number")?,
            status: try_get_shipment_status(row, "status")?,
            shipped_at: try_get_optional_timestamp(row, "shipped_at")?,
            delivered_at: try_get_optional_timestamp(row, "delivered_at")?,
            created_at: try_get_timestamp(row, "created_at")?,
            updated_at: try_get_timestamp(row, "updated_at")?,
        })
    }
}
