//! Get Variant Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    catalog::{errors::into_api_error, models::VariantResponse},
    errors::ApiError,
    extensions::*,
    state::State,
};

/// Get Variant Handler
#[endpoint(
    tags("products"),
    summary = "Get Variant",
    responses(
        (status_code = StatusCode::OK, description = "Variant"),
        (status_code = StatusCode::NOT_FOUND, description = "Variant not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    variant: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<VariantResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let variant = state
        .app
        .catalog
        .get_variant(variant.into_inner().into())
        .await
        .map_err(into_api_error)?;

    Ok(Json(variant.into()))
}
