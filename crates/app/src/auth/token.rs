//! API token generation and hashing.

use sha2::{Digest, Sha256};
use uuid::Uuid;

/// API token prefix.
pub const API_TOKEN_PREFIX: &str = "sf";

/// Generate a fresh raw API token.
#[must_use]
pub fn generate_token() -> String {
    format!(
        "{API_TOKEN_PREFIX}_{}{}",
        Uuid::now_v7().simple(),
        Uuid::new_v4().simple()
    )
}

/// Whether `token` has the shape of a token from [`generate_token`].
#[must_use]
pub fn is_well_formed(token: &str) -> bool {
    token
        .strip_prefix(API_TOKEN_PREFIX)
        .and_then(|rest| rest.strip_prefix('_'))
        .is_some_and(|body| !body.is_empty() && body.chars().all(|c| c.is_ascii_hexdigit()))
}

/// SHA-256 hex digest of a raw token, the only form that is persisted.
#[must_use]
pub fn hash_token(token: &str) -> String {
    format!("{:x}", Sha256::digest(token.as_bytes()))
}
