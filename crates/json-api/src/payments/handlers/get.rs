//! Get Payment Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    errors::ApiError,
    extensions::*,
    payments::{errors::into_api_error, models::PaymentResponse},
    state::State,
};

/// Get Payment Handler
///
/// Returns the most recent payment for an order.
#[endpoint(
    tags("payments"),
    summary = "Get Payment",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Payment"),
        (status_code = StatusCode::NOT_FOUND, description = "Order or payment not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    order: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<PaymentResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let principal = depot.principal_or_401()?;

    let payment = state
        .app
        .payments
        .get_payment(principal, order.into_inner().into())
        .await
        .map_err(into_api_error)?;

    Ok(Json(payment.into()))
}
