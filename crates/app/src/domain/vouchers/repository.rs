//! Vouchers Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::{
    columns::{amount_to_i64, try_get_amount, try_get_timestamp},
    vouchers::{data::NewVoucher, records::VoucherRecord},
};

const CREATE_VOUCHER_SQL: &str = include_str!("sql/create_voucher.sql");
const FIND_VOUCHER_BY_CODE_SQL: &str = include_str!("sql/find_voucher_by_code.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgVouchersRepository;

impl PgVouchersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_voucher(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        voucher: &NewVoucher,
    ) -> Result<VoucherRecord, sqlx::Error> {
        query_as::<Postgres, VoucherRecord>(CREATE_VOUCHER_SQL)
            .bind(voucher.uuid)
            .bind(&voucher.code)
            .bind(&voucher.description)
            .bind(voucher.discount_percent)
            .bind(amount_to_i64(voucher.max_discount, "max_discount")?)
            .bind(amount_to_i64(voucher.min_order_value, "min_order_value")?)
            .bind(SqlxTimestamp::from(voucher.expires_at))
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn find_voucher_by_code(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        code: &str,
    ) -> Result<Option<VoucherRecord>, sqlx::Error> {
        query_as::<Postgres, VoucherRecord>(FIND_VOUCHER_BY_CODE_SQL)
            .bind(code)
            .fetch_optional(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for VoucherRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: row.try_get("uuid")?,
            code: row.try_get("code")?,
            description: row.try_get("description")?,
            discount_percent: row.try_get("discount_percent")?,
            max_discount: try_get_amount(row, "max_discount")?,
            min_order_value: try_get_amount(row, "min_order_value")?,
            expires_at: try_get_timestamp(row, "expires_at")?,
            is_active: row.try_get("is_active")?,
            created_at: try_get_timestamp(row, "created_at")?,
            updated_at: try_get_timestamp(row, "updated_at")?,
        })
    }
}
