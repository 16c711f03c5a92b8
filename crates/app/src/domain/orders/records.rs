//! Order Records

use std::{fmt, str::FromStr};

use jiff::Timestamp;
use thiserror::Error;

use crate::{
    domain::{
        catalog::records::{ProductUuid, VariantUuid},
        users::records::UserUuid,
    },
    uuids::TypedUuid,
};

/// Order UUID
pub type OrderUuid = TypedUuid<OrderRecord>;

/// Order Item UUID
pub type OrderItemUuid = TypedUuid<OrderItemRecord>;

/// Status History Entry UUID
pub type StatusHistoryUuid = TypedUuid<StatusHistoryRecord>;

/// Lifecycle status of an order.
///
/// Any status may follow any other; only membership in this set is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    /// Placed and awaiting confirmation. Every order starts here.
    Pending,
    /// Accepted by the shop.
    Confirmed,
    /// Being picked and packed.
    Processing,
    /// Handed to the carrier.
    Shipping,
    /// Received by the buyer.
    Delivered,
    /// Abandoned by the buyer or the shop.
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [Self; 6] = [
        Self::Pending,
        Self::Confirmed,
        Self::Processing,
        Self::Shipping,
        Self::Delivered,
        Self::Cancelled,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Confirmed => "CONFIRMED",
            Self::Processing => "PROCESSING",
            Self::Shipping => "SHIPPING",
            Self::Delivered => "DELIVERED",
            Self::Cancelled => "CANCELLED",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("invalid order status {0:?}")]
pub struct InvalidOrderStatus(pub String);

impl FromStr for OrderStatus {
    type Err = InvalidOrderStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == value)
            .ok_or_else(|| InvalidOrderStatus(value.to_string()))
    }
}

/// Where an order ships to, copied onto the order at creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShippingAddress {
    /// Recipient name.
    pub full_name: String,
    /// Contact number for the courier.
    pub phone: String,
    /// Street line: house number and street.
    pub address: String,
    /// City or province.
    pub city: String,
    /// District within the city.
    pub district: String,
    /// Ward within the district, the smallest administrative unit.
    pub ward: String,
}

impl ShippingAddress {
    /// Every field carries a non-blank value.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        [
            &self.full_name,
            &self.phone,
            &self.address,
            &self.city,
            &self.district,
            &self.ward,
        ]
        .iter()
        .all(|field| !field.trim().is_empty())
    }
}

/// Order Record
///
/// Amounts are fixed at creation; only `status` and `updated_at` change afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRecord {
    pub uuid: OrderUuid,
    pub order_number: String,
    pub user_uuid: UserUuid,
    pub status: OrderStatus,
    pub shipping_address: ShippingAddress,
    pub voucher_code: Option<String>,
    pub subtotal: u64,
    pub discount: u64,
    pub total: u64,
    pub items: Vec<OrderItemRecord>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Order Item Record
///
/// Catalog data as it was when the order was placed.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItemRecord {
    pub uuid: OrderItemUuid,
    pub order_uuid: OrderUuid,
    pub product_uuid: ProductUuid,
    pub variant_uuid: VariantUuid,
    pub product_name: String,
    pub sku: String,
    pub color: String,
    pub storage: String,
    pub price: u64,
    pub quantity: u64,
    pub created_at: Timestamp,
}

impl OrderItemRecord {
    #[must_use]
    pub fn total_price(&self) -> u64 {
        self.price.saturating_mul(self.quantity)
    }
}

/// Status History Record
#[derive(Debug, Clone, PartialEq)]
pub struct StatusHistoryRecord {
    pub uuid: StatusHistoryUuid,
    pub order_uuid: OrderUuid,
    pub status: OrderStatus,
    pub note: Option<String>,
    pub updated_by: UserUuid,
    pub created_at: Timestamp,
}
