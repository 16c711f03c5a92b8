//! Order Status History Repository

use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::{
    columns::try_get_timestamp,
    orders::{
        records::{OrderStatus, OrderUuid, StatusHistoryRecord, StatusHistoryUuid},
        repositories::orders::try_get_status,
    },
    users::records::UserUuid,
};

const CREATE_STATUS_HISTORY_SQL: &str = include_str!("../sql/create_status_history.sql");
const LIST_STATUS_HISTORY_SQL: &str = include_str!("../sql/list_status_history.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgStatusHistoryRepository;

impl PgStatusHistoryRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Append an entry. Entries are never updated or deleted.
    pub(crate) async fn append(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
        status: OrderStatus,
        note: Option<&str>,
        actor: UserUuid,
    ) -> Result<StatusHistoryRecord, sqlx::Error> {
        query_as::<Postgres, StatusHistoryRecord>(CREATE_STATUS_HISTORY_SQL)
            .bind(StatusHistoryUuid::new())
            .bind(order)
            .bind(status.as_str())
            .bind(note)
            .bind(actor)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn list_history(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
    ) -> Result<Vec<StatusHistoryRecord>, sqlx::Error> {
        query_as::<Postgres, StatusHistoryRecord>(LIST_STATUS_HISTORY_SQL)
            .bind(order)
            .fetch_all(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for StatusHistoryRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: row.try_get("uuid")?,
            order_uuid: row.try_get("order_uuid")?,
            status: try_get_status(row, "status")?,
            note: row.try_get("note")?,
            updated_by: row.try_get("updated_by")?,
            created_at: try_get_timestamp(row, "created_at")?,
        })
    }
}
