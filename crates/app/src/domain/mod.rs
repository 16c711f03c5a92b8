//! Storefront Domain Concerns

pub mod carts;
pub mod catalog;
pub(crate) mod columns;
pub mod orders;
pub mod pagination;
pub mod payments;
pub mod shipments;
pub mod users;
pub mod vouchers;
