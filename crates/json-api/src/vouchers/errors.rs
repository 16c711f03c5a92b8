//! Voucher Errors

use tracing::error;

use storefront_app::domain::vouchers::VouchersServiceError;

use crate::errors::ApiError;

pub(crate) fn into_api_error(error: VouchersServiceError) -> ApiError {
    match error {
        VouchersServiceError::AlreadyExists => ApiError::conflict("voucher code already exists"),
        VouchersServiceError::NotFound => ApiError::not_found("voucher not found"),
        VouchersServiceError::InvalidData => {
            ApiError::bad_request("CREATE_FAILED", "invalid voucher payload")
        }
        VouchersServiceError::Sql(source) => {
            error!("voucher storage error: {source}");

            ApiError::internal()
        }
    }
}
