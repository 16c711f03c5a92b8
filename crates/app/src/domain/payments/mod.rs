//! Payments
//!
//! Payment records for orders. No gateway is contacted; payments start as
//! `PENDING` and are settled by an administrator.

pub mod data;
pub mod errors;
pub mod records;
pub(crate) mod repository;
pub mod service;

pub use errors::PaymentsServiceError;
pub use service::*;
