//! Create Voucher Handler

use std::sync::Arc;

use jiff::Timestamp;
use rust_decimal::Decimal;
use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use storefront_app::domain::vouchers::{data::NewVoucher, records::VoucherUuid};

use crate::{
    errors::ApiError,
    extensions::*,
    state::State,
    vouchers::{errors::into_api_error, models::VoucherResponse},
};

/// Create Voucher Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateVoucherRequest {
    pub code: String,

    #[serde(default)]
    pub description: String,

    /// Between 0 and 100
    #[salvo(schema(value_type = String))]
    pub discount_percent: Decimal,

    pub max_discount: u64,

    #[serde(default)]
    pub min_order_value: u64,

    /// RFC 3339 timestamp; the voucher stops applying at this instant
    #[salvo(schema(value_type = String))]
    pub expires_at: Timestamp,
}

impl From<CreateVoucherRequest> for NewVoucher {
    fn from(request: CreateVoucherRequest) -> Self {
        NewVoucher {
            uuid: VoucherUuid::new(),
            code: request.code,
            description: request.description,
            discount_percent: request.discount_percent,
            max_discount: request.max_discount,
            min_order_value: request.min_order_value,
            expires_at: request.expires_at,
        }
    }
}

/// Create Voucher Handler
#[endpoint(
    tags("vouchers"),
    summary = "Create Voucher",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Voucher created"),
        (status_code = StatusCode::CONFLICT, description = "Code already exists"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::FORBIDDEN, description = "Admin access required"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateVoucherRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<VoucherResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let voucher = state
        .app
        .vouchers
        .create_voucher(json.into_inner().into())
        .await
        .map_err(into_api_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(voucher.into()))
}
