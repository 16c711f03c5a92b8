//! Order Data

use crate::domain::{
    catalog::records::{ProductUuid, VariantUuid},
    orders::records::{OrderStatus, OrderUuid, ShippingAddress},
    pagination::Pagination,
    users::records::UserUuid,
};

/// New Order Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub shipping_address: ShippingAddress,
    pub voucher_code: Option<String>,
}

impl NewOrder {
    /// The voucher code to look up, treating a blank code as none.
    #[must_use]
    pub fn voucher_code(&self) -> Option<&str> {
        self.voucher_code
            .as_deref()
            .map(str::trim)
            .filter(|code| !code.is_empty())
    }
}

/// Order Status Update Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusUpdate {
    pub status: OrderStatus,
    pub note: Option<String>,
}

/// Filter for the admin order listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrdersQuery {
    pub pagination: Pagination,
    pub status: Option<OrderStatus>,
}

/// Priced order ready to be written.
#[derive(Debug, Clone)]
pub(crate) struct OrderDraft {
    pub uuid: OrderUuid,
    pub order_number: String,
    pub user_uuid: UserUuid,
    pub shipping_address: ShippingAddress,
    pub voucher_code: Option<String>,
    pub subtotal: u64,
    pub discount: u64,
    pub total: u64,
}

/// Snapshot of one cart line at purchase time.
#[derive(Debug, Clone)]
pub(crate) struct OrderItemDraft {
    pub product_uuid: ProductUuid,
    pub variant_uuid: VariantUuid,
    pub product_name: String,
    pub sku: String,
    pub color: String,
    pub storage: String,
    pub price: u64,
    pub quantity: u64,
}
