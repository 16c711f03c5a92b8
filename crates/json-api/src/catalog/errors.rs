//! Catalog Errors

use tracing::error;

use storefront_app::domain::catalog::CatalogServiceError;

use crate::errors::ApiError;

pub(crate) fn into_api_error(error: CatalogServiceError) -> ApiError {
    match error {
        CatalogServiceError::AlreadyExists => ApiError::conflict("slug or SKU already exists"),
        CatalogServiceError::NotFound => ApiError::not_found(error.to_string()),
        CatalogServiceError::InvalidReference | CatalogServiceError::InvalidData => {
            ApiError::bad_request("BAD_REQUEST", "invalid catalog payload")
        }
        CatalogServiceError::Sql(source) => {
            error!("catalog storage error: {source}");

            ApiError::internal()
        }
    }
}
