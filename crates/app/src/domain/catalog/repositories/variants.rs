//! Product Variants Repository

use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::domain::{
    catalog::{
        data::{NewVariant, VariantUpdate},
        records::{ProductUuid, VariantRecord, VariantUuid},
    },
    columns::{amount_to_i64, try_get_amount, try_get_timestamp},
};

const LIST_PRODUCT_VARIANTS_SQL: &str = include_str!("../sql/list_product_variants.sql");
const GET_VARIANT_SQL: &str = include_str!("../sql/get_variant.sql");
const GET_ACTIVE_VARIANT_SQL: &str = include_str!("../sql/get_active_variant.sql");
const CREATE_VARIANT_SQL: &str = include_str!("../sql/create_variant.sql");
const UPDATE_VARIANT_SQL: &str = include_str!("../sql/update_variant.sql");
const DECREMENT_STOCK_SQL: &str = include_str!("../sql/decrement_stock.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgVariantsRepository;

impl PgVariantsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_product_variants(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<Vec<VariantRecord>, sqlx::Error> {
        query_as::<Postgres, VariantRecord>(LIST_PRODUCT_VARIANTS_SQL)
            .bind(product)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_variant(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        variant: VariantUuid,
    ) -> Result<VariantRecord, sqlx::Error> {
        query_as::<Postgres, VariantRecord>(GET_VARIANT_SQL)
            .bind(variant)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn find_active_variant(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        variant: VariantUuid,
    ) -> Result<Option<VariantRecord>, sqlx::Error> {
        query_as::<Postgres, VariantRecord>(GET_ACTIVE_VARIANT_SQL)
            .bind(variant)
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn create_variant(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        variant: &NewVariant,
    ) -> Result<VariantRecord, sqlx::Error> {
        query_as::<Postgres, VariantRecord>(CREATE_VARIANT_SQL)
            .bind(variant.uuid)
            .bind(variant.product_uuid)
            .bind(&variant.sku)
            .bind(&variant.color)
            .bind(&variant.storage)
            .bind(amount_to_i64(variant.price, "price")?)
            .bind(amount_to_i64(variant.stock, "stock")?)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_variant(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        variant: VariantUuid,
        update: &VariantUpdate,
    ) -> Result<VariantRecord, sqlx::Error> {
        let price = update
            .price
            .map(|price| amount_to_i64(price, "price"))
            .transpose()?;

        let stock = update
            .stock
            .map(|stock| amount_to_i64(stock, "stock"))
            .transpose()?;

        query_as::<Postgres, VariantRecord>(UPDATE_VARIANT_SQL)
            .bind(variant)
            .bind(price)
            .bind(stock)
            .bind(update.is_active)
            .fetch_one(&mut **tx)
            .await
    }

    /// Take `quantity` units out of stock only when that many are available.
    ///
    /// Returns `false` when the row was left untouched.
    pub(crate) async fn decrement_stock(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        variant: VariantUuid,
        quantity: u64,
    ) -> Result<bool, sqlx::Error> {
        let rows_affected = query(DECREMENT_STOCK_SQL)
            .bind(variant)
            .bind(amount_to_i64(quantity, "quantity")?)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected == 1)
    }
}

impl<'r> FromRow<'r, PgRow> for VariantRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: row.try_get("uuid")?,
            product_uuid: row.try_get("product_uuid")?,
            sku: row.try_get("sku")?,
            color: row.try_get("color")?,
            storage: row.try_get("storage")?,
            price: try_get_amount(row, "price")?,
            stock: try_get_amount(row, "stock")?,
            is_active: row.try_get("is_active")?,
            created_at: try_get_timestamp(row, "created_at")?,
            updated_at: try_get_timestamp(row, "updated_at")?,
        })
    }
}
