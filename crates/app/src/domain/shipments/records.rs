//! Shipment Records

use std::{fmt, str::FromStr};

use jiff::Timestamp;
use thiserror::Error;

use crate::{domain::orders::records::OrderUuid, uuids::TypedUuid};

/// Shipment UUID
pub type ShipmentUuid = TypedUuid<ShipmentRecord>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShipmentStatus {
    /// Waiting for pickup.
    Pending,
    /// With the carrier. Entering this status stamps `shipped_at`.
    Shipping,
    /// Handed over. Entering this status stamps `delivered_at`.
    Delivered,
}

impl ShipmentStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Shipping => "SHIPPING",
            Self::Delivered => "DELIVERED",
        }
    }
}

impl fmt::Display for ShipmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("invalid shipment status {0:?}")]
pub struct InvalidShipmentStatus(pub String);

impl FromStr for ShipmentStatus {
    type Err = InvalidShipmentStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "PENDING" => Ok(Self::Pending),
            "SHIPPING" => Ok(Self::Shipping),
            "DELIVERED" => Ok(Self::Delivered),
            other => Err(InvalidShipmentStatus(other.to_string())),
        }
    }
}

/// A delivery option offered at checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShippingMethodRecord {
    pub code: String,
    pub name: String,
    pub description: String,
    pub cost: u64,
    pub estimated_days: u32,
    pub is_active: bool,
}

/// Shipment Record
#[derive(Debug, Clone, PartialEq)]
pub struct ShipmentRecord {
    pub uuid: ShipmentUuid,
    pub order_uuid: OrderUuid,
    pub method_code: String,
    pub method_name: String,
    pub tracking_number: String,
    pub status: ShipmentStatus,
    pub shipped_at: Option<Timestamp>,
    pub delivered_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipment_status_parses_its_column_values() {
        for status in [
            ShipmentStatus::Pending,
            ShipmentStatus::Shipping,
            ShipmentStatus::Delivered,
        ] {
            assert_eq!(status.as_str().parse::<ShipmentStatus>().ok(), Some(status));
        }

        assert!("LOST".parse::<ShipmentStatus>().is_err());
    }
}
