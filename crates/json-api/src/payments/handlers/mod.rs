//! Payment Handlers

pub(crate) mod create;
pub(crate) mod get;
pub(crate) mod methods;
pub(crate) mod update_status;
