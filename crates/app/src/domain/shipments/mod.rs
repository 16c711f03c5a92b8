//! Shipments
//!
//! Delivery of placed orders. Each order ships at most once, by one of the
//! seeded shipping methods; the store moves it from `PENDING` through
//! `SHIPPING` to `DELIVERED`.

pub mod data;
pub mod errors;
pub mod records;
pub(crate) mod repository;
pub mod service;

pub use errors::ShipmentsServiceError;
pub use service::*;
