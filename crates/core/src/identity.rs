//! Player identity model and token-driven identity resolution.
//!
//! Users and guest sessions live in separate tables and are never merged.
//! A request carries exactly one of them as an [`Identity`]; score
//! attribution and self-authorization work on the smaller [`IdentityKey`].

use async_trait::async_trait;
use serde::Serialize;

use crate::error::CoreError;
use crate::roles::Role;
use crate::types::DbId;

/// Tagged reference to the row backing an identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentityKey {
    User(DbId),
    Guest(DbId),
}

impl IdentityKey {
    pub fn id(self) -> DbId {
        match self {
            IdentityKey::User(id) | IdentityKey::Guest(id) => id,
        }
    }

    /// `(user_id, guest_id)` columns for a score row. Exactly one is `Some`.
    pub fn attribution_columns(self) -> (Option<DbId>, Option<DbId>) {
        match self {
            IdentityKey::User(id) => (Some(id), None),
            IdentityKey::Guest(id) => (None, Some(id)),
        }
    }
}

/// A registered account as seen by the identity resolver.
#[derive(Debug, Clone, PartialEq)]
pub struct UserRecord {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// A guest session as seen by the identity resolver.
#[derive(Debug, Clone, PartialEq)]
pub struct GuestRecord {
    pub id: DbId,
    pub name: String,
}

/// The resolved player behind an authenticated request.
#[derive(Debug, Clone, PartialEq)]
pub enum Identity {
    User(UserRecord),
    Guest(GuestRecord),
}

impl Identity {
    pub fn id(&self) -> DbId {
        self.key().id()
    }

    pub fn key(&self) -> IdentityKey {
        match self {
            Identity::User(u) => IdentityKey::User(u.id),
            Identity::Guest(g) => IdentityKey::Guest(g.id),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Identity::User(u) => &u.name,
            Identity::Guest(g) => &g.name,
        }
    }

    pub fn role(&self) -> Role {
        match self {
            Identity::User(u) => u.role,
            Identity::Guest(_) => Role::Guest,
        }
    }

    /// Public view of this identity for API responses.
    pub fn profile(&self) -> IdentityProfile {
        IdentityProfile {
            kind: match self {
                Identity::User(_) => "user",
                Identity::Guest(_) => "guest",
            },
            id: self.id(),
            name: self.name().to_string(),
            role: self.role(),
            email: match self {
                Identity::User(u) => Some(u.email.clone()),
                Identity::Guest(_) => None,
            },
        }
    }
}

/// Serializable `{kind, id, name, role, email?}` view of an [`Identity`].
#[derive(Debug, Clone, Serialize)]
pub struct IdentityProfile {
    pub kind: &'static str,
    pub id: DbId,
    pub name: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Storage seam for identity resolution.
///
/// Implemented over Postgres in `spotter_db`; tests use in-memory fakes.
#[async_trait]
pub trait IdentityLookup: Send + Sync {
    async fn find_user(&self, id: DbId) -> Result<Option<UserRecord>, CoreError>;
    async fn find_guest(&self, id: DbId) -> Result<Option<GuestRecord>, CoreError>;
}

/// Resolve the `sub` / `roles` claims of a verified token into an identity.
///
/// The role claim picks the table: `GUEST` is looked up only among guest
/// sessions, `USER` / `ADMIN` only among users. A miss is `Unauthorized`;
/// the other table is never consulted.
pub async fn resolve_identity<L>(
    lookup: &L,
    sub: DbId,
    role_claim: &str,
) -> Result<Identity, CoreError>
where
    L: IdentityLookup + ?Sized,
{
    let role: Role = role_claim
        .parse()
        .map_err(|_| CoreError::Unauthorized("Token carries an unknown role".into()))?;

    match role {
        Role::Guest => lookup
            .find_guest(sub)
            .await?
            .map(Identity::Guest)
            .ok_or_else(|| CoreError::Unauthorized("Guest session no longer exists".into())),
        Role::User | Role::Admin => lookup
            .find_user(sub)
            .await?
            .map(Identity::User)
            .ok_or_else(|| CoreError::Unauthorized("User no longer exists".into())),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert_matches::assert_matches;

    use super::*;

    #[derive(Default)]
    struct MemoryLookup {
        users: HashMap<DbId, UserRecord>,
        guests: HashMap<DbId, GuestRecord>,
    }

    #[async_trait]
    impl IdentityLookup for MemoryLookup {
        async fn find_user(&self, id: DbId) -> Result<Option<UserRecord>, CoreError> {
            Ok(self.users.get(&id).cloned())
        }

        async fn find_guest(&self, id: DbId) -> Result<Option<GuestRecord>, CoreError> {
            Ok(self.guests.get(&id).cloned())
        }
    }

    fn alice(id: DbId) -> UserRecord {
        UserRecord {
            id,
            name: "Alice".into(),
            email: "alice@example.com".into(),
            role: Role::User,
        }
    }

    #[tokio::test]
    async fn user_token_resolves_user_row() {
        let mut lookup = MemoryLookup::default();
        lookup.users.insert(7, alice(7));

        let identity = resolve_identity(&lookup, 7, "USER").await.unwrap();
        assert_eq!(identity.key(), IdentityKey::User(7));
        assert_eq!(identity.name(), "Alice");
        assert_eq!(identity.role(), Role::User);
    }

    #[tokio::test]
    async fn guest_token_resolves_guest_row() {
        let mut lookup = MemoryLookup::default();
        lookup.guests.insert(3, GuestRecord { id: 3, name: "Guest 0007".into() });

        let identity = resolve_identity(&lookup, 3, "GUEST").await.unwrap();
        assert_eq!(identity.key(), IdentityKey::Guest(3));
        assert_eq!(identity.role(), Role::Guest);
    }

    #[tokio::test]
    async fn pruned_guest_does_not_fall_back_to_user_with_same_id() {
        let mut lookup = MemoryLookup::default();
        lookup.users.insert(5, alice(5));

        let result = resolve_identity(&lookup, 5, "GUEST").await;
        assert_matches!(result, Err(CoreError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn user_token_does_not_fall_back_to_guest_with_same_id() {
        let mut lookup = MemoryLookup::default();
        lookup.guests.insert(5, GuestRecord { id: 5, name: "Guest 1234".into() });

        let result = resolve_identity(&lookup, 5, "ADMIN").await;
        assert_matches!(result, Err(CoreError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn unknown_role_claim_is_unauthorized() {
        let mut lookup = MemoryLookup::default();
        lookup.users.insert(1, alice(1));

        let result = resolve_identity(&lookup, 1, "SUPERUSER").await;
        assert_matches!(result, Err(CoreError::Unauthorized(_)));
    }

    #[test]
    fn attribution_sets_exactly_one_column() {
        assert_eq!(IdentityKey::User(4).attribution_columns(), (Some(4), None));
        assert_eq!(IdentityKey::Guest(4).attribution_columns(), (None, Some(4)));
    }

    #[test]
    fn guest_profile_omits_email() {
        let identity = Identity::Guest(GuestRecord { id: 9, name: "Guest 0042".into() });
        let json = serde_json::to_value(identity.profile()).unwrap();
        assert_eq!(json["kind"], "guest");
        assert_eq!(json["role"], "GUEST");
        assert!(json.get("email").is_none());
    }
}
