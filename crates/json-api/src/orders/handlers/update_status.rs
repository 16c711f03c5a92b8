//! Update Order Status Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use storefront_app::domain::orders::{
    OrdersServiceError, data::StatusUpdate, records::OrderStatus,
};

use crate::{
    errors::ApiError,
    extensions::*,
    observability::record_order_status_changed,
    orders::{errors::into_api_error, models::OrderResponse},
    state::State,
};

/// Update Order Status Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateStatusRequest {
    /// One of PENDING, CONFIRMED, PROCESSING, SHIPPING, DELIVERED, CANCELLED
    pub status: String,

    pub note: Option<String>,
}

impl TryFrom<UpdateStatusRequest> for StatusUpdate {
    type Error = OrdersServiceError;

    fn try_from(request: UpdateStatusRequest) -> Result<Self, Self::Error> {
        Ok(StatusUpdate {
            status: request.status.parse::<OrderStatus>()?,
            note: request.note,
        })
    }
}

/// Update Order Status Handler
///
/// Admin only. Any status may follow any other.
#[endpoint(
    tags("orders"),
    summary = "Update Order Status",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Order updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid status"),
        (status_code = StatusCode::NOT_FOUND, description = "Order not found"),
        (status_code = StatusCode::FORBIDDEN, description = "Admin access required"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    order: PathParam<Uuid>,
    json: JsonBody<UpdateStatusRequest>,
    depot: &mut Depot,
) -> Result<Json<OrderResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let principal = depot.principal_or_401()?;

    let update = StatusUpdate::try_from(json.into_inner()).map_err(into_api_error)?;
    let status = update.status;

    let order = state
        .app
        .orders
        .update_status(order.into_inner().into(), update, principal.user)
        .await
        .map_err(into_api_error)?;

    record_order_status_changed(status.as_str());

    info!(
        order = %order.uuid,
        actor = %principal.user,
        status = %status,
        "order status updated"
    );

    Ok(Json(order.into()))
}
