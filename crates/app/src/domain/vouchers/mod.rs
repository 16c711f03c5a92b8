//! Vouchers
//!
//! Percentage vouchers with a cap, a minimum order value and an expiry.

pub mod data;
pub mod errors;
pub mod evaluator;
pub mod records;
pub(crate) mod repository;
pub mod service;

pub use errors::VouchersServiceError;
pub use evaluator::discount_for;
pub use service::*;
