//! Shipping Methods Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    errors::ApiError,
    extensions::*,
    shipments::{errors::into_api_error, models::ShippingMethodResponse},
    state::State,
};

/// Shipping Methods Handler
///
/// Returns the active shipping methods, cheapest first.
#[endpoint(
    tags("shipments"),
    summary = "List Shipping Methods",
    responses(
        (status_code = StatusCode::OK, description = "Shipping methods"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    depot: &mut Depot,
) -> Result<Json<Vec<ShippingMethodResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let methods = state
        .app
        .shipments
        .list_methods()
        .await
        .map_err(into_api_error)?;

    Ok(Json(methods.into_iter().map(Into::into).collect()))
}
