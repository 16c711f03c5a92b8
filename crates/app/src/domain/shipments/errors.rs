//! Shipments service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShipmentsServiceError {
    #[error("order not found")]
    OrderNotFound,

    #[error("shipping method {0:?} not found")]
    UnknownMethod(String),

    #[error("shipment not found")]
    NotFound,

    #[error("access denied")]
    AccessDenied,

    #[error("order already has a shipment")]
    AlreadyExists,

    #[error("related resource not found")]
    InvalidReference,

    #[error("invalid shipment data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for ShipmentsServiceError {
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
