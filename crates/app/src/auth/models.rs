//! Auth data models.

use crate::domain::users::records::{Role, UserUuid};

/// The authenticated caller of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Principal {
    pub user: UserUuid,
    pub role: Role,
}

impl Principal {
    #[must_use]
    pub const fn new(user: UserUuid, role: Role) -> Self {
        Self { user, role }
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Admins may read any user's resources; everyone else only their own.
    #[must_use]
    pub fn can_access(&self, owner: UserUuid) -> bool {
        self.is_admin() || self.user == owner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn customers_only_access_their_own_resources() {
        let owner = UserUuid::new();
        let principal = Principal::new(owner, Role::Customer);

        assert!(principal.can_access(owner));
        assert!(!principal.can_access(UserUuid::new()));
    }

    #[test]
    fn admins_access_everything() {
        let principal = Principal::new(UserUuid::new(), Role::Admin);

        assert!(principal.can_access(UserUuid::new()));
    }
}
