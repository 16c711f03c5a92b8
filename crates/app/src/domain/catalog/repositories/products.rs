//! Products Repository

use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as, query_scalar};

use crate::domain::{
    catalog::{
        data::{NewProduct, ProductsQuery},
        records::{PriceRange, ProductRecord, ProductSummary, ProductUuid},
    },
    columns::{try_get_optional_amount, try_get_timestamp},
};

const LIST_PRODUCTS_SQL: &str = include_str!("../sql/list_products.sql");
const COUNT_PRODUCTS_SQL: &str = include_str!("../sql/count_products.sql");
const GET_PRODUCT_SQL: &str = include_str!("../sql/get_product.sql");
const GET_ACTIVE_PRODUCT_SQL: &str = include_str!("../sql/get_active_product.sql");
const GET_ACTIVE_PRODUCT_BY_SLUG_SQL: &str = include_str!("../sql/get_active_product_by_slug.sql");
const LIST_BRANDS_SQL: &str = include_str!("../sql/list_brands.sql");
const LIST_CATEGORIES_SQL: &str = include_str!("../sql/list_categories.sql");
const CREATE_PRODUCT_SQL: &str = include_str!("../sql/create_product.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgProductsRepository;

impl PgProductsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        query: &ProductsQuery,
    ) -> Result<Vec<ProductSummary>, sqlx::Error> {
        query_as::<Postgres, ProductSummary>(LIST_PRODUCTS_SQL)
            .bind(i64::from(query.pagination.limit()))
            .bind(query.pagination.offset())
            .bind(query.search())
            .bind(query.brand())
            .bind(query.category())
            .bind(query.sort.as_str())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn count_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        query: &ProductsQuery,
    ) -> Result<u64, sqlx::Error> {
        let total: i64 = query_scalar(COUNT_PRODUCTS_SQL)
            .bind(query.search())
            .bind(query.brand())
            .bind(query.category())
            .fetch_one(&mut **tx)
            .await?;

        u64::try_from(total).map_err(|e| sqlx::Error::ColumnDecode {
            index: "total".to_string(),
            source: Box::new(e),
        })
    }

    pub(crate) async fn get_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(GET_PRODUCT_SQL)
            .bind(product)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn find_active_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<Option<ProductRecord>, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(GET_ACTIVE_PRODUCT_SQL)
            .bind(product)
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn find_active_product_by_slug(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        slug: &str,
    ) -> Result<Option<ProductRecord>, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(GET_ACTIVE_PRODUCT_BY_SLUG_SQL)
            .bind(slug)
            .fetch_optional(&mut **tx)
            .await
    }

    /// Distinct brands across active products, alphabetically.
    pub(crate) async fn list_brands(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<String>, sqlx::Error> {
        query_scalar(LIST_BRANDS_SQL).fetch_all(&mut **tx).await
    }

    /// Distinct categories across active products, alphabetically.
    pub(crate) async fn list_categories(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<String>, sqlx::Error> {
        query_scalar(LIST_CATEGORIES_SQL).fetch_all(&mut **tx).await
    }

    pub(crate) async fn create_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: &NewProduct,
    ) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(CREATE_PRODUCT_SQL)
            .bind(product.uuid)
            .bind(&product.name)
            .bind(&product.slug)
            .bind(&product.description)
            .bind(&product.brand)
            .bind(&product.category)
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for ProductRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: row.try_get("uuid")?,
            name: row.try_get("name")?,
            slug: row.try_get("slug")?,
            description: row.try_get("description")?,
            brand: row.try_get("brand")?,
            category: row.try_get("category")?,
            is_active: row.try_get("is_active")?,
            created_at: try_get_timestamp(row, "created_at")?,
            updated_at: try_get_timestamp(row, "updated_at")?,
        })
    }
}

impl<'r> FromRow<'r, PgRow> for ProductSummary {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let min = try_get_optional_amount(row, "min_price")?;
        let max = try_get_optional_amount(row, "max_price")?;

        Ok(Self {
            product: ProductRecord::from_row(row)?,
            price_range: min.zip(max).map(|(min, max)| PriceRange { min, max }),
        })
    }
}
