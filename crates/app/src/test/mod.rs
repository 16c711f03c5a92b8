//! Test support shared by the service tests.

mod db;
pub(crate) mod helpers;

pub(crate) use context::TestContext;
