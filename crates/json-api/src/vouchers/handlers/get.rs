//! Get Voucher Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    errors::ApiError,
    extensions::*,
    state::State,
    vouchers::{errors::into_api_error, models::VoucherResponse},
};

/// Get Voucher Handler
///
/// Looks a voucher up by its exact code, usable or not.
#[endpoint(
    tags("vouchers"),
    summary = "Get Voucher",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Voucher"),
        (status_code = StatusCode::NOT_FOUND, description = "Voucher not found"),
        (status_code = StatusCode::FORBIDDEN, description = "Admin access required"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    code: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<VoucherResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let voucher = state
        .app
        .vouchers
        .find_voucher(&code.into_inner())
        .await
        .map_err(into_api_error)?
        .ok_or_else(|| ApiError::not_found("voucher not found"))?;

    Ok(Json(voucher.into()))
}
