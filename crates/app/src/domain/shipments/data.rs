//! Shipment Data

use crate::domain::orders::records::OrderUuid;

/// New Shipment Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShipment {
    pub order_uuid: OrderUuid,
    pub method_code: String,

    /// Carrier reference, may be filled in later.
    pub tracking_number: String,
}
