//! Shipment response models.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::shipments::records::{ShipmentRecord, ShippingMethodRecord};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ShippingMethodResponse {
    pub code: String,
    pub name: String,
    pub description: String,

    /// Flat fee in minor units
    pub cost: u64,

    pub estimated_days: u32,
}

impl From<ShippingMethodRecord> for ShippingMethodResponse {
    fn from(method: ShippingMethodRecord) -> Self {
        ShippingMethodResponse {
            code: method.code,
            name: method.name,
            description: method.description,
            cost: method.cost,
            estimated_days: method.estimated_days,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ShipmentResponse {
    pub uuid: Uuid,
    pub order_uuid: Uuid,
    pub method: String,
    pub method_name: String,
    pub tracking_number: String,
    pub status: String,
    pub shipped_at: Option<String>,
    pub delivered_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<ShipmentRecord> for ShipmentResponse {
    fn from(shipment: ShipmentRecord) -> Self {
        ShipmentResponse {
            uuid: shipment.uuid.into(),
            order_uuid: shipment.order_uuid.into(),
            method: shipment.method_code,
            method_name: shipment.method_name,
            tracking_number: shipment.tracking_number,
            status: shipment.status.to_string(),
            shipped_at: shipment.shipped_at.as_ref().map(ToString::to_string),
            delivered_at: shipment.delivered_at.as_ref().map(ToString::to_string),
            created_at: shipment.created_at.to_string(),
            updated_at: shipment.updated_at.to_string(),
        }
    }
}
