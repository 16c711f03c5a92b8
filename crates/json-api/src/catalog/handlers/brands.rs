//! Brand Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    catalog::{errors::into_api_error, models::NamesResponse},
    errors::ApiError,
    extensions::*,
    state::State,
};

/// Brand Index Handler
///
/// Brands with at least one active product, alphabetically.
#[endpoint(
    tags("products"),
    summary = "List Brands",
    responses(
        (status_code = StatusCode::OK, description = "Brands"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<NamesResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let brands = state
        .app
        .catalog
        .list_brands()
        .await
        .map_err(into_api_error)?;

    Ok(Json(brands.into()))
}
