//! Create Variant Handler

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

use storefront_app::domain::catalog::{data::NewVariant, records::VariantUuid};

use crate::{
    catalog::{errors::into_api_error, models::VariantResponse},
    errors::ApiError,
    extensions::*,
    state::State,
};

/// Create Variant Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateVariantRequest {
    pub sku: String,
    pub color: String,
    pub storage: String,

    /// Unit price in minor units
    pub price: u64,

    pub stock: u64,
}

/// Create Variant Handler
#[endpoint(
    tags("products"),
    summary = "Create Variant",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Variant created"),
        (status_code = StatusCode::CONFLICT, description = "SKU already exists"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::FORBIDDEN, description = "Admin access required"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    json: JsonBody<CreateVariantRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<VariantResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    let variant = state
        .app
        .catalog
        .create_variant(NewVariant {
            uuid: VariantUuid::new(),
            product_uuid: product.into_inner().into(),
            sku: request.sku,
            color: request.color,
            storage: request.storage,
            price: request.price,
            stock: request.stock,
        })
        .await
        .map_err(into_api_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(variant.into()))
}
