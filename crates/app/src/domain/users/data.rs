//! User Data

use uuid::Uuid;

use crate::domain::users::records::{Role, UserUuid};

/// New User Data
///
/// The raw API token never reaches storage; only its SHA-256 hex digest does.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub uuid: UserUuid,
    pub name: String,
    pub role: Role,
    pub token_uuid: Uuid,
    pub token_hash: String,
}
