//! Get Shipment Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    errors::ApiError,
    extensions::*,
    shipments::{errors::into_api_error, models::ShipmentResponse},
    state::State,
};

/// Get Shipment Handler
///
/// Returns the shipment of an order.
#[endpoint(
    tags("shipments"),
    summary = "Get Shipment",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Shipment"),
        (status_code = StatusCode::NOT_FOUND, description = "Order or shipment not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    order: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<ShipmentResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let principal = depot.principal_or_401()?;

    let shipment = state
        .app
        .shipments
        .get_shipment(principal, order.into_inner().into())
        .await
        .map_err(into_api_error)?;

    Ok(Json(shipment.into()))
}
