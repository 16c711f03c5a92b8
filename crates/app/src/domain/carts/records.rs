//! Cart Records

use jiff::Timestamp;

use crate::{
    domain::{
        catalog::records::{ProductUuid, VariantUuid},
        users::records::UserUuid,
    },
    uuids::TypedUuid,
};

/// Cart UUID
pub type CartUuid = TypedUuid<CartRecord>;

/// Cart Record
#[derive(Debug, Clone, PartialEq)]
pub struct CartRecord {
    pub uuid: CartUuid,
    pub user_uuid: UserUuid,
    pub items: Vec<CartItemRecord>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl CartRecord {
    /// Sum of current price times quantity over the visible lines.
    #[must_use]
    pub fn subtotal(&self) -> u64 {
        self.items
            .iter()
            .map(CartItemRecord::line_total)
            .fold(0, u64::saturating_add)
    }
}

/// Cart line joined with the live catalog data of its variant.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItemRecord {
    pub variant_uuid: VariantUuid,
    pub product_uuid: ProductUuid,
    pub product_name: String,
    pub sku: String,
    pub color: String,
    pub storage: String,
    pub price: u64,
    pub stock: u64,
    pub quantity: u64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl CartItemRecord {
    #[must_use]
    pub fn line_total(&self) -> u64 {
        self.price.saturating_mul(self.quantity)
    }
}

/// A raw (variant, quantity) pair as stored, without catalog data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartLine {
    pub variant_uuid: VariantUuid,
    pub quantity: u64,
}
