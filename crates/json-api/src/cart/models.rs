//! Cart response models.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::carts::records::{CartItemRecord, CartRecord};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CartItemResponse {
    pub variant_uuid: Uuid,
    pub product_uuid: Uuid,
    pub product_name: String,
    pub sku: String,
    pub color: String,
    pub storage: String,

    /// Current unit price in minor units
    pub price: u64,

    /// Units currently in stock
    pub stock: u64,

    pub quantity: u64,
    pub line_total: u64,
}

impl From<CartItemRecord> for CartItemResponse {
    fn from(item: CartItemRecord) -> Self {
        CartItemResponse {
            line_total: item.line_total(),
            variant_uuid: item.variant_uuid.into(),
            product_uuid: item.product_uuid.into(),
            product_name: item.product_name,
            sku: item.sku,
            color: item.color,
            storage: item.storage,
            price: item.price,
            stock: item.stock,
            quantity: item.quantity,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CartResponse {
    pub uuid: Uuid,
    pub items: Vec<CartItemResponse>,

    /// Sum of line totals at current prices
    pub subtotal: u64,

    pub created_at: String,
    pub updated_at: String,
}

impl From<CartRecord> for CartResponse {
    fn from(cart: CartRecord) -> Self {
        CartResponse {
            subtotal: cart.subtotal(),
            uuid: cart.uuid.into(),
            items: cart.items.into_iter().map(Into::into).collect(),
            created_at: cart.created_at.to_string(),
            updated_at: cart.updated_at.to_string(),
        }
    }
}
