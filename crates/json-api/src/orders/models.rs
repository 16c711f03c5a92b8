//! Order request and response models.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::{
    orders::records::{OrderItemRecord, OrderRecord, ShippingAddress, StatusHistoryRecord},
    pagination::Page,
};

/// Shipping address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ShippingAddressModel {
    pub full_name: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub district: String,
    pub ward: String,
}

impl From<ShippingAddressModel> for ShippingAddress {
    fn from(model: ShippingAddressModel) -> Self {
        ShippingAddress {
            full_name: model.full_name,
            phone: model.phone,
            address: model.address,
            city: model.city,
            district: model.district,
            ward: model.ward,
        }
    }
}

impl From<ShippingAddress> for ShippingAddressModel {
    fn from(address: ShippingAddress) -> Self {
        ShippingAddressModel {
            full_name: address.full_name,
            phone: address.phone,
            address: address.address,
            city: address.city,
            district: address.district,
            ward: address.ward,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrderItemResponse {
    pub uuid: Uuid,
    pub product_uuid: Uuid,
    pub variant_uuid: Uuid,

    /// Product name at purchase time
    pub product_name: String,

    pub sku: String,
    pub color: String,
    pub storage: String,

    /// Unit price at purchase time, in minor units
    pub price: u64,

    pub quantity: u64,

    /// `price × quantity`
    pub total_price: u64,
}

impl From<OrderItemRecord> for OrderItemResponse {
    fn from(item: OrderItemRecord) -> Self {
        OrderItemResponse {
            total_price: item.total_price(),
            uuid: item.uuid.into(),
            product_uuid: item.product_uuid.into(),
            variant_uuid: item.variant_uuid.into(),
            product_name: item.product_name,
            sku: item.sku,
            color: item.color,
            storage: item.storage,
            price: item.price,
            quantity: item.quantity,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrderResponse {
    pub uuid: Uuid,

    /// Human readable order reference, `ORD-<millis>`
    pub order_number: String,

    pub user_uuid: Uuid,
    pub status: String,
    pub shipping_address: ShippingAddressModel,
    pub voucher_code: Option<String>,

    /// Amounts in minor units
    pub subtotal: u64,
    pub discount: u64,
    pub total: u64,

    pub items: Vec<OrderItemResponse>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<OrderRecord> for OrderResponse {
    fn from(order: OrderRecord) -> Self {
        OrderResponse {
            uuid: order.uuid.into(),
            order_number: order.order_number,
            user_uuid: order.user_uuid.into(),
            status: order.status.to_string(),
            shipping_address: order.shipping_address.into(),
            voucher_code: order.voucher_code,
            subtotal: order.subtotal,
            discount: order.discount,
            total: order.total,
            items: order.items.into_iter().map(Into::into).collect(),
            created_at: order.created_at.to_string(),
            updated_at: order.updated_at.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StatusHistoryResponse {
    pub status: String,
    pub note: Option<String>,

    /// User who made the change
    pub updated_by: Uuid,

    pub created_at: String,
}

impl From<StatusHistoryRecord> for StatusHistoryResponse {
    fn from(entry: StatusHistoryRecord) -> Self {
        StatusHistoryResponse {
            status: entry.status.to_string(),
            note: entry.note,
            updated_by: entry.updated_by.into(),
            created_at: entry.created_at.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrdersPageResponse {
    pub data: Vec<OrderResponse>,
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u64,
}

impl From<Page<OrderRecord>> for OrdersPageResponse {
    fn from(page: Page<OrderRecord>) -> Self {
        OrdersPageResponse {
            data: page.items.into_iter().map(Into::into).collect(),
            page: page.page,
            limit: page.limit,
            total: page.total,
            total_pages: page.total_pages,
        }
    }
}
