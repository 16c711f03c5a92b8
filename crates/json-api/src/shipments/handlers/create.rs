//! Create Shipment Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::shipments::data::NewShipment;

use crate::{
    errors::ApiError,
    extensions::*,
    shipments::{errors::into_api_error, models::ShipmentResponse},
    state::State,
};

/// Create Shipment Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateShipmentRequest {
    pub order_id: Uuid,

    /// Shipping method code, e.g. STANDARD
    pub method: String,

    #[serde(default)]
    pub tracking_number: String,
}

impl From<CreateShipmentRequest> for NewShipment {
    fn from(request: CreateShipmentRequest) -> Self {
        NewShipment {
            order_uuid: request.order_id.into(),
            method_code: request.method,
            tracking_number: request.tracking_number,
        }
    }
}

/// Create Shipment Handler
///
/// Admin only. Opens the order's shipment as PENDING.
#[endpoint(
    tags("shipments"),
    summary = "Create Shipment",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Shipment created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Unknown shipping method"),
        (status_code = StatusCode::NOT_FOUND, description = "Order not found"),
        (status_code = StatusCode::CONFLICT, description = "Order already has a shipment"),
        (status_code = StatusCode::FORBIDDEN, description = "Admin access required"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateShipmentRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ShipmentResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let shipment = state
        .app
        .shipments
        .create_shipment(json.into_inner().into())
        .await
        .map_err(into_api_error)?;

    res.add_header(LOCATION, format!("/api/shipments/{}", shipment.order_uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(shipment.into()))
}
