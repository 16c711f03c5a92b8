//! Catalog service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        catalog::{
            data::{NewProduct, NewVariant, ProductsQuery, VariantUpdate},
            errors::CatalogServiceError,
            records::{
                ProductDetails, ProductRecord, ProductSummary, ProductUuid, VariantRecord,
                VariantUuid,
            },
            repositories::{PgProductsRepository, PgVariantsRepository},
        },
        pagination::Page,
    },
};

#[derive(Debug, Clone)]
pub struct PgCatalogService {
    db: Db,
    products_repository: PgProductsRepository,
    variants_repository: PgVariantsRepository,
}

impl PgCatalogService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            products_repository: PgProductsRepository::new(),
            variants_repository: PgVariantsRepository::new(),
        }
    }

    async fn with_variants(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        product: ProductRecord,
    ) -> Result<ProductDetails, CatalogServiceError> {
        let variants = self
            .variants_repository
            .list_product_variants(tx, product.uuid)
            .await?;

        Ok(ProductDetails { product, variants })
    }
}

#[async_trait]
impl CatalogService for PgCatalogService {
    async fn list_products(
        &self,
        query: ProductsQuery,
    ) -> Result<Page<ProductSummary>, CatalogServiceError> {
        let mut tx = self.db.begin().await?;

        let products = self
            .products_repository
            .list_products(&mut tx, &query)
            .await?;

        let total = self
            .products_repository
            .count_products(&mut tx, &query)
            .await?;

        tx.commit().await?;

        Ok(Page::new(products, query.pagination, total))
    }

    async fn get_product(
        &self,
        product: ProductUuid,
    ) -> Result<ProductDetails, CatalogServiceError> {
        let mut tx = self.db.begin().await?;

        let product = self
            .products_repository
            .find_active_product(&mut tx, product)
            .await?
            .ok_or(CatalogServiceError::NotFound)?;

        let details = self.with_variants(&mut tx, product).await?;

        tx.commit().await?;

        Ok(details)
    }

    async fn get_product_by_slug(&self, slug: &str) -> Result<ProductDetails, CatalogServiceError> {
        let mut tx = self.db.begin().await?;

        let product = self
            .products_repository
            .find_active_product_by_slug(&mut tx, slug)
            .await?
            .ok_or(CatalogServiceError::NotFound)?;

        let details = self.with_variants(&mut tx, product).await?;

        tx.commit().await?;

        Ok(details)
    }

    async fn list_brands(&self) -> Result<Vec<String>, CatalogServiceError> {
        let mut tx = self.db.begin().await?;

        let brands = self.products_repository.list_brands(&mut tx).await?;

        tx.commit().await?;

        Ok(brands)
    }

    async fn list_categories(&self) -> Result<Vec<String>, CatalogServiceError> {
        let mut tx = self.db.begin().await?;

        let categories = self.products_repository.list_categories(&mut tx).await?;

        tx.commit().await?;

        Ok(categories)
    }

    async fn get_variant(&self, variant: VariantUuid) -> Result<VariantRecord, CatalogServiceError> {
        let mut tx = self.db.begin().await?;

        let variant = self.variants_repository.get_variant(&mut tx, variant).await?;

        tx.commit().await?;

        Ok(variant)
    }

    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, CatalogServiceError> {
        let mut tx = self.db.begin().await?;

        let created = self
            .products_repository
            .create_product(&mut tx, &product)
            .await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn create_variant(
        &self,
        variant: NewVariant,
    ) -> Result<VariantRecord, CatalogServiceError> {
        let mut tx = self.db.begin().await?;

        // Surface an unknown parent as NotFound before the insert trips the FK.
        self.products_repository
            .get_product(&mut tx, variant.product_uuid)
            .await?;

        let created = self
            .variants_repository
            .create_variant(&mut tx, &variant)
            .await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn update_variant(
        &self,
        variant: VariantUuid,
        update: VariantUpdate,
    ) -> Result<VariantRecord, CatalogServiceError> {
        let mut tx = self.db.begin().await?;

        let updated = self
            .variants_repository
            .update_variant(&mut tx, variant, &update)
            .await?;

        tx.commit().await?;

        Ok(updated)
    }
}

#[automock]
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Active products matching the query, each with its price range.
    async fn list_products(
        &self,
        query: ProductsQuery,
    ) -> Result<Page<ProductSummary>, CatalogServiceError>;

    /// Retrieve an active product with its active variants.
    async fn get_product(&self, product: ProductUuid)
    -> Result<ProductDetails, CatalogServiceError>;

    /// Same as [`CatalogService::get_product`], addressed by slug.
    async fn get_product_by_slug(&self, slug: &str) -> Result<ProductDetails, CatalogServiceError>;

    /// Brands that have at least one active product.
    async fn list_brands(&self) -> Result<Vec<String>, CatalogServiceError>;

    /// Categories that have at least one active product.
    async fn list_categories(&self) -> Result<Vec<String>, CatalogServiceError>;

    /// Retrieve a single variant regardless of its active flag.
    async fn get_variant(&self, variant: VariantUuid) -> Result<VariantRecord, CatalogServiceError>;

    /// Creates a new product.
    async fn create_product(&self, product: NewProduct)
    -> Result<ProductRecord, CatalogServiceError>;

    /// Creates a new variant under an existing product.
    async fn create_variant(&self, variant: NewVariant)
    -> Result<VariantRecord, CatalogServiceError>;

    /// Changes a variant's price, stock or active flag.
    async fn update_variant(
        &self,
        variant: VariantUuid,
        update: VariantUpdate,
    ) -> Result<VariantRecord, CatalogServiceError>;
}
