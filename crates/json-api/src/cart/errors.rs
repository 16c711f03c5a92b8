//! Cart Errors

use tracing::error;

use storefront_app::domain::carts::CartsServiceError;

use crate::errors::ApiError;

/// `failure_code` labels client errors of the operation that failed.
pub(crate) fn into_api_error(error: CartsServiceError, failure_code: &str) -> ApiError {
    match error {
        CartsServiceError::VariantNotFound(_) | CartsServiceError::ItemNotFound => {
            ApiError::not_found(error.to_string())
        }
        CartsServiceError::Sql(source) => {
            error!("cart storage error: {source}");

            ApiError::internal()
        }
        CartsServiceError::InsufficientStock { ref sku, available } => ApiError::bad_request(
            failure_code,
            format!("insufficient stock for SKU {sku}: {available} available"),
        ),
        CartsServiceError::InvalidQuantity
        | CartsServiceError::NotFound
        | CartsServiceError::InvalidReference
        | CartsServiceError::InvalidData => ApiError::bad_request(failure_code, error.to_string()),
    }
}
