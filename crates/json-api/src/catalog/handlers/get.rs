//! Get Product Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    catalog::{errors::into_api_error, models::ProductDetailsResponse},
    errors::ApiError,
    extensions::*,
    state::State,
};

/// Get Product Handler
///
/// Returns an active product with its active variants.
#[endpoint(
    tags("products"),
    summary = "Get Product",
    responses(
        (status_code = StatusCode::OK, description = "Product"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<ProductDetailsResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let details = state
        .app
        .catalog
        .get_product(product.into_inner().into())
        .await
        .map_err(into_api_error)?;

    Ok(Json(details.into()))
}
