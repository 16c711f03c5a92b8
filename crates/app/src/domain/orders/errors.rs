//! Orders service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use crate::domain::{
    catalog::records::{ProductUuid, VariantUuid},
    orders::records::InvalidOrderStatus,
};

#[derive(Debug, Error)]
pub enum OrdersServiceError {
    #[error("{0}")]
    InvalidInput(&'static str),

    #[error("cart not found")]
    CartNotFound,

    #[error("cart is empty")]
    EmptyCart,

    #[error("variant {0} not found")]
    VariantNotFound(VariantUuid),

    #[error("product {0} not found")]
    ProductNotFound(ProductUuid),

    #[error("insufficient stock for {sku}")]
    InsufficientStock { sku: String },

    #[error(transparent)]
    InvalidStatus(#[from] InvalidOrderStatus),

    #[error("order not found")]
    NotFound,

    #[error("access denied")]
    AccessDenied,

    #[error("order already exists")]
    AlreadyExists,

    #[error("related resource not found")]
    InvalidReference,

    #[error("invalid order data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for OrdersServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(ErrorKind::ForeignKeyViolation) => Self::InvalidReference,
            Some(ErrorKind::NotNullViolation | ErrorKind::CheckViolation) => Self::InvalidData,
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}
