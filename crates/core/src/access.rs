//! Role-set access policies.
//!
//! A policy lists the roles allowed through; an empty list admits any
//! authenticated identity. A policy may additionally let an identity through
//! when the request addresses that identity's own row.

use crate::error::CoreError;
use crate::identity::{Identity, IdentityKey};
use crate::roles::Role;

#[derive(Debug, Clone, Copy)]
pub struct AccessPolicy {
    pub roles: &'static [Role],
    pub allow_self: bool,
}

impl AccessPolicy {
    /// Any authenticated identity.
    pub const ANY: AccessPolicy = AccessPolicy {
        roles: &[],
        allow_self: false,
    };

    /// Anyone who can play: registered users, admins, and guests.
    pub const PLAYERS: AccessPolicy = AccessPolicy {
        roles: &[Role::User, Role::Admin, Role::Guest],
        allow_self: false,
    };

    pub const ADMIN: AccessPolicy = AccessPolicy {
        roles: &[Role::Admin],
        allow_self: false,
    };

    /// Admins, or the identity addressed by the path.
    pub const ADMIN_OR_SELF: AccessPolicy = AccessPolicy {
        roles: &[Role::Admin],
        allow_self: true,
    };

    /// Check `identity` against this policy.
    ///
    /// `target` is the identity addressed by a path parameter, if the route
    /// has one. Self-authorization compares keys, so a guest never matches a
    /// user path even when the numeric ids coincide.
    pub fn authorize(
        &self,
        identity: &Identity,
        target: Option<IdentityKey>,
    ) -> Result<(), CoreError> {
        if self.allow_self && target == Some(identity.key()) {
            return Ok(());
        }

        if self.roles.is_empty() || self.roles.contains(&identity.role()) {
            return Ok(());
        }

        Err(CoreError::Forbidden(format!(
            "Role {} is not permitted for this operation",
            identity.role()
        )))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::identity::{GuestRecord, UserRecord};

    fn user(id: i64, role: Role) -> Identity {
        Identity::User(UserRecord {
            id,
            name: "Alice".into(),
            email: "alice@example.com".into(),
            role,
        })
    }

    fn guest(id: i64) -> Identity {
        Identity::Guest(GuestRecord { id, name: "Guest 0001".into() })
    }

    #[test]
    fn empty_role_set_admits_everyone() {
        assert!(AccessPolicy::ANY.authorize(&guest(1), None).is_ok());
        assert!(AccessPolicy::ANY.authorize(&user(1, Role::User), None).is_ok());
    }

    #[test]
    fn players_policy_admits_all_roles() {
        for identity in [guest(1), user(2, Role::User), user(3, Role::Admin)] {
            assert!(AccessPolicy::PLAYERS.authorize(&identity, None).is_ok());
        }
    }

    #[test]
    fn admin_policy_rejects_users_with_forbidden() {
        let result = AccessPolicy::ADMIN.authorize(&user(1, Role::User), None);
        assert_matches!(result, Err(CoreError::Forbidden(_)));
        assert!(AccessPolicy::ADMIN.authorize(&user(1, Role::Admin), None).is_ok());
    }

    #[test]
    fn self_param_authorizes_regardless_of_role() {
        let me = user(12, Role::User);
        assert!(AccessPolicy::ADMIN_OR_SELF
            .authorize(&me, Some(IdentityKey::User(12)))
            .is_ok());
        assert_matches!(
            AccessPolicy::ADMIN_OR_SELF.authorize(&me, Some(IdentityKey::User(13))),
            Err(CoreError::Forbidden(_))
        );
    }

    #[test]
    fn guest_id_never_matches_user_path() {
        let g = guest(12);
        assert_matches!(
            AccessPolicy::ADMIN_OR_SELF.authorize(&g, Some(IdentityKey::User(12))),
            Err(CoreError::Forbidden(_))
        );
        assert!(AccessPolicy::ADMIN_OR_SELF
            .authorize(&g, Some(IdentityKey::Guest(12)))
            .is_ok());
    }

    #[test]
    fn self_check_ignored_when_policy_disallows_it() {
        let me = user(5, Role::User);
        assert_matches!(
            AccessPolicy::ADMIN.authorize(&me, Some(IdentityKey::User(5))),
            Err(CoreError::Forbidden(_))
        );
    }
}
