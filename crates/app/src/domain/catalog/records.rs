//! Catalog Records

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// Product UUID
pub type ProductUuid = TypedUuid<ProductRecord>;

/// Product Variant UUID
pub type VariantUuid = TypedUuid<VariantRecord>;

/// Product Record
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    pub uuid: ProductUuid,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub brand: String,
    pub category: String,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Product Variant Record
///
/// The SKU, colour and storage never change after creation; price and stock do.
#[derive(Debug, Clone, PartialEq)]
pub struct VariantRecord {
    pub uuid: VariantUuid,
    pub product_uuid: ProductUuid,
    pub sku: String,
    pub color: String,
    pub storage: String,
    pub price: u64,
    pub stock: u64,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A product with its active variants.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDetails {
    pub product: ProductRecord,
    pub variants: Vec<VariantRecord>,
}

impl ProductDetails {
    /// Price range over the variants carried with the product.
    #[must_use]
    pub fn price_range(&self) -> Option<PriceRange> {
        PriceRange::from_prices(self.variants.iter().map(|variant| variant.price))
    }
}

/// A listed product with the price range of its active variants.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductSummary {
    pub product: ProductRecord,
    /// `None` while the product has no active variant.
    pub price_range: Option<PriceRange>,
}

/// Lowest and highest variant price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    pub min: u64,
    pub max: u64,
}

impl PriceRange {
    #[must_use]
    pub fn from_prices(prices: impl IntoIterator<Item = u64>) -> Option<Self> {
        prices.into_iter().fold(None, |range, price| {
            Some(match range {
                None => Self {
                    min: price,
                    max: price,
                },
                Some(Self { min, max }) => Self {
                    min: min.min(price),
                    max: max.max(price),
                },
            })
        })
    }
}
