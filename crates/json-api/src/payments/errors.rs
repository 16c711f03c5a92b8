//! Payment Errors

use tracing::error;

use storefront_app::domain::payments::PaymentsServiceError;

use crate::errors::ApiError;

pub(crate) fn into_api_error(error: PaymentsServiceError) -> ApiError {
    match error {
        PaymentsServiceError::OrderNotFound | PaymentsServiceError::AccessDenied => {
            ApiError::not_found("order not found")
        }
        PaymentsServiceError::NotFound => ApiError::not_found("payment not found"),
        PaymentsServiceError::UnknownMethod(_) => {
            ApiError::bad_request("INVALID_PAYMENT_METHOD", error.to_string())
        }
        PaymentsServiceError::AlreadyExists => ApiError::conflict("payment already exists"),
        PaymentsServiceError::InvalidReference | PaymentsServiceError::InvalidData => {
            ApiError::bad_request("BAD_REQUEST", "invalid payment payload")
        }
        PaymentsServiceError::Sql(source) => {
            error!("payment storage error: {source}");

            ApiError::internal()
        }
    }
}
