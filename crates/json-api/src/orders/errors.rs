//! Order Errors

use tracing::error;

use storefront_app::domain::orders::OrdersServiceError;

use crate::errors::ApiError;

/// Placement failures are all reported as one client error code.
pub(crate) fn create_order_error(error: OrdersServiceError) -> ApiError {
    match error {
        OrdersServiceError::Sql(source) => {
            error!("failed to create order: {source}");

            ApiError::internal()
        }
        other => ApiError::bad_request("CREATE_ORDER_FAILED", other.to_string()),
    }
}

pub(crate) fn into_api_error(error: OrdersServiceError) -> ApiError {
    match error {
        // Orders owned by someone else look exactly like missing ones.
        OrdersServiceError::NotFound | OrdersServiceError::AccessDenied => {
            ApiError::not_found("order not found")
        }
        OrdersServiceError::InvalidStatus(source) => {
            ApiError::bad_request("INVALID_STATUS", source.to_string())
        }
        OrdersServiceError::Sql(source) => {
            error!("order storage error: {source}");

            ApiError::internal()
        }
        other => ApiError::bad_request("BAD_REQUEST", other.to_string()),
    }
}
