//! Payment Methods Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    errors::ApiError,
    extensions::*,
    payments::{errors::into_api_error, models::PaymentMethodResponse},
    state::State,
};

/// Payment Methods Handler
///
/// Returns the active payment methods.
#[endpoint(
    tags("payments"),
    summary = "List Payment Methods",
    responses(
        (status_code = StatusCode::OK, description = "Payment methods"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    depot: &mut Depot,
) -> Result<Json<Vec<PaymentMethodResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let methods = state
        .app
        .payments
        .list_methods()
        .await
        .map_err(into_api_error)?;

    Ok(Json(methods.into_iter().map(Into::into).collect()))
}
