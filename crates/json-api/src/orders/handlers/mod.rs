//! Order Handlers

pub(crate) mod admin_index;
pub(crate) mod create;
pub(crate) mod get;
pub(crate) mod history;
pub(crate) mod mine;
pub(crate) mod update_status;
