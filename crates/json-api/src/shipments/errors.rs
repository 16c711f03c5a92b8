//! Shipment Errors

use tracing::error;

use storefront_app::domain::shipments::ShipmentsServiceError;

use crate::errors::ApiError;

pub(crate) fn into_api_error(error: ShipmentsServiceError) -> ApiError {
    match error {
        ShipmentsServiceError::OrderNotFound | ShipmentsServiceError::AccessDenied => {
            ApiError::not_found("order not found")
        }
        ShipmentsServiceError::NotFound => ApiError::not_found("shipment not found"),
        ShipmentsServiceError::UnknownMethod(_) => {
            ApiError::bad_request("INVALID_SHIPPING_METHOD", error.to_string())
        }
        ShipmentsServiceError::AlreadyExists => ApiError::conflict("order already has a shipment"),
        ShipmentsServiceError::InvalidReference | ShipmentsServiceError::InvalidData => {
            ApiError::bad_request("BAD_REQUEST", "invalid shipment payload")
        }
        ShipmentsServiceError::Sql(source) => {
            error!("shipment storage error: {source}");

            ApiError::internal()
        }
    }
}
