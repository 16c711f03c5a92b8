//! Category Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    catalog::{errors::into_api_error, models::NamesResponse},
    errors::ApiError,
    extensions::*,
    state::State,
};

/// Category Index Handler
#[endpoint(
    tags("products"),
    summary = "List Categories",
    responses(
        (status_code = StatusCode::OK, description = "Categories"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<NamesResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let categories = state
        .app
        .catalog
        .list_categories()
        .await
        .map_err(into_api_error)?;

    Ok(Json(categories.into()))
}
