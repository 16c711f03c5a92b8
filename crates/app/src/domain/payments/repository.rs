//! Payments Repository

use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::{
    columns::{amount_to_i64, try_get_amount, try_get_optional_timestamp, try_get_timestamp},
    orders::records::OrderUuid,
    payments::records::{PaymentMethodRecord, PaymentRecord, PaymentStatus, PaymentUuid},
};

const LIST_PAYMENT_METHODS_SQL: &str = include_str!("sql/list_payment_methods.sql");
const FIND_ACTIVE_PAYMENT_METHOD_SQL: &str = include_str!("sql/find_active_payment_method.sql");
const CREATE_PAYMENT_SQL: &str = include_str!("sql/create_payment.sql");
const FIND_LATEST_PAYMENT_SQL: &str = include_str!("sql/find_latest_payment.sql");
const UPDATE_PAYMENT_STATUS_SQL: &str = include_str!("sql/update_payment_status.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgPaymentsRepository;

impl PgPaymentsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_methods(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<PaymentMethodRecord>, sqlx::Error> {
        query_as::<Postgres, PaymentMethodRecord>(LIST_PAYMENT_METHODS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn find_active_method(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        code: &str,
    ) -> Result<Option<PaymentMethodRecord>, sqlx::Error> {
        query_as::<Postgres, PaymentMethodRecord>(FIND_ACTIVE_PAYMENT_METHOD_SQL)
            .bind(code)
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn create_payment(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
        method_code: &str,
        amount: u64,
    ) -> Result<PaymentRecord, sqlx::Error> {
        query_as::<Postgres, PaymentRecord>(CREATE_PAYMENT_SQL)
            .bind(PaymentUuid::new())
            .bind(order)
            .bind(method_code)
            .bind(amount_to_i64(amount, "amount")?)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn find_latest_payment(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
    ) -> Result<Option<PaymentRecord>, sqlx::Error> {
        query_as::<Postgres, PaymentRecord>(FIND_LATEST_PAYMENT_SQL)
            .bind(order)
            .fetch_optional(&mut **tx)
            .await
    }

    /// Set the status; moving to `COMPLETED` also stamps `paid_at`.
    pub(crate) async fn update_status(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        payment: PaymentUuid,
        status: PaymentStatus,
    ) -> Result<PaymentRecord, sqlx::Error> {
        query_as::<Postgres, PaymentRecord>(UPDATE_PAYMENT_STATUS_SQL)
            .bind(payment)
            .bind(status.as_str())
            .fetch_one(&mut **tx)
            .await
    }
}

fn try_get_payment_status(row: &PgRow, col: &str) -> Result<PaymentStatus, sqlx::Error> {
    row.try_get::<String, _>(col)?
        .parse::<PaymentStatus>()
        .map_err(|e| sqlx::Error::ColumnDecode {
            index: col.to_string(),
            source: Box::new(e),
        })
}

impl<'r> FromRow<'r, PgRow> for PaymentMethodRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            code: row.try_get("code")?,
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            is_active: row.try_get("is_active")?,
        })
    }
}

impl<'r> FromRow<'r, PgRow> for PaymentRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: row.try_get("uuid")?,
            order_uuid: row.try_get("order_uuid")?,
            method_code: row.try_get("method_code")?,
            method_name: row.try_get("method_name")?,
            amount: try_get_amount(row, "amount")?,
            status: try_get_payment_status(row, "status")?,
            paid_at: try_get_optional_timestamp(row, "paid_at")?,
            created_at: try_get_timestamp(row, "created_at")?,
            updated_at: try_get_timestamp(row, "updated_at")?,
        })
    }
}
