//! Catalog Handlers

pub(crate) mod brands;
pub(crate) mod categories;
pub(crate) mod create_product;
pub(crate) mod create_variant;
pub(crate) mod get;
pub(crate) mod get_by_slug;
pub(crate) mod get_variant;
pub(crate) mod index;
pub(crate) mod update_variant;
