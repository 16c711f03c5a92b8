//! Update Variant Handler

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

use storefront_app::domain::catalog::data::VariantUpdate;

use crate::{
    catalog::{errors::into_api_error, models::VariantResponse},
    errors::ApiError,
    extensions::*,
    state::State,
};

/// Update Variant Request
///
/// Omitted fields keep their current value.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdateVariantRequest {
    pub price: Option<u64>,
    pub stock: Option<u64>,
    pub is_active: Option<bool>,
}

impl From<UpdateVariantRequest> for VariantUpdate {
    fn from(request: UpdateVariantRequest) -> Self {
        VariantUpdate {
            price: request.price,
            stock: request.stock,
            is_active: request.is_active,
        }
    }
}

/// Update Variant Handler
#[endpoint(
    tags("products"),
    summary = "Update Variant",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Variant updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Variant not found"),
        (status_code = StatusCode::FORBIDDEN, description = "Admin access required"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    variant: PathParam<Uuid>,
    json: JsonBody<UpdateVariantRequest>,
    depot: &mut Depot,
) -> Result<Json<VariantResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let variant = state
        .app
        .catalog
        .update_variant(variant.into_inner().into(), json.into_inner().into())
        .await
        .map_err(into_api_error)?;

    Ok(Json(variant.into()))
}
