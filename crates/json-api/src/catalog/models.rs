//! Catalog response models.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::{
    catalog::records::{PriceRange, ProductDetails, ProductRecord, ProductSummary, VariantRecord},
    pagination::Page,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductResponse {
    pub uuid: Uuid,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub brand: String,
    pub category: String,
    pub is_active: bool,

    /// Lowest active variant price, absent without active variants
    pub min_price: Option<u64>,

    /// Highest active variant price, absent without active variants
    pub max_price: Option<u64>,

    pub created_at: String,
    pub updated_at: String,
}

impl ProductResponse {
    fn with_price_range(mut self, range: Option<PriceRange>) -> Self {
        self.min_price = range.map(|range| range.min);
        self.max_price = range.map(|range| range.max);
        self
    }
}

impl From<ProductRecord> for ProductResponse {
    fn from(product: ProductRecord) -> Self {
        ProductResponse {
            uuid: product.uuid.into(),
            name: product.name,
            slug: product.slug,
            description: product.description,
            brand: product.brand,
            category: product.category,
            is_active: product.is_active,
            min_price: None,
            max_price: None,
            created_at: product.created_at.to_string(),
            updated_at: product.updated_at.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VariantResponse {
    pub uuid: Uuid,
    pub product_uuid: Uuid,
    pub sku: String,
    pub color: String,
    pub storage: String,

    /// Unit price in minor units
    pub price: u64,

    pub stock: u64,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<VariantRecord> for VariantResponse {
    fn from(variant: VariantRecord) -> Self {
        VariantResponse {
            uuid: variant.uuid.into(),
            product_uuid: variant.product_uuid.into(),
            sku: variant.sku,
            color: variant.color,
            storage: variant.storage,
            price: variant.price,
            stock: variant.stock,
            is_active: variant.is_active,
            created_at: variant.created_at.to_string(),
            updated_at: variant.updated_at.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductDetailsResponse {
    pub product: ProductResponse,

    /// Active variants only
    pub variants: Vec<VariantResponse>,
}

impl From<ProductSummary> for ProductResponse {
    fn from(summary: ProductSummary) -> Self {
        ProductResponse::from(summary.product).with_price_range(summary.price_range)
    }
}

impl From<ProductDetails> for ProductDetailsResponse {
    fn from(details: ProductDetails) -> Self {
        let range = details.price_range();

        ProductDetailsResponse {
            product: ProductResponse::from(details.product).with_price_range(range),
            variants: details.variants.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductsPageResponse {
    pub data: Vec<ProductResponse>,
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u64,
}

impl From<Page<ProductSummary>> for ProductsPageResponse {
    fn from(page: Page<ProductSummary>) -> Self {
        ProductsPageResponse {
            data: page.items.into_iter().map(Into::into).collect(),
            page: page.page,
            limit: page.limit,
            total: page.total,
            total_pages: page.total_pages,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct NamesResponse {
    pub data: Vec<String>,
}

impl From<Vec<String>> for NamesResponse {
    fn from(data: Vec<String>) -> Self {
        NamesResponse { data }
    }
}
