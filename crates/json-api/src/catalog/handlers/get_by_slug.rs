//! Get Product By Slug Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    catalog::{errors::into_api_error, models::ProductDetailsResponse},
    errors::ApiError,
    extensions::*,
    state::State,
};

/// Get Product By Slug Handler
///
/// Same payload as the lookup by UUID, addressed by the product's slug.
#[endpoint(
    tags("products"),
    summary = "Get Product By Slug",
    responses(
        (status_code = StatusCode::OK, description = "Product"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    slug: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<ProductDetailsResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let details = state
        .app
        .catalog
        .get_product_by_slug(&slug.into_inner())
        .await
        .map_err(into_api_error)?;

    Ok(Json(details.into()))
}
