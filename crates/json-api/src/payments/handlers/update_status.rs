//! Update Payment Status Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::payments::records::PaymentStatus;

use crate::{
    errors::ApiError,
    extensions::*,
    payments::{errors::into_api_error, models::PaymentResponse},
    state::State,
};

/// Update Payment Status Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdatePaymentStatusRequest {
    /// One of PENDING, COMPLETED, FAILED
    pub status: String,
}

/// Update Payment Status Handler
///
/// Admin only. Completing a payment stamps its paid-at time.
#[endpoint(
    tags("payments"),
    summary = "Update Payment Status",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Payment updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid status"),
        (status_code = StatusCode::NOT_FOUND, description = "Payment not found"),
        (status_code = StatusCode::FORBIDDEN, description = "Admin access required"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    order: PathParam<Uuid>,
    json: JsonBody<UpdatePaymentStatusRequest>,
    depot: &mut Depot,
) -> Result<Json<PaymentResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let status = json
        .into_inner()
        .status
        .parse::<PaymentStatus>()
        .map_err(|error| ApiError::bad_request("INVALID_STATUS", error.to_string()))?;

    let payment = state
        .app
        .payments
        .update_payment_status(order.into_inner().into(), status)
        .await
        .map_err(into_api_error)?;

    Ok(Json(payment.into()))
}
