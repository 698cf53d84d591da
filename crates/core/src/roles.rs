//! Player roles.
//!
//! `USER` and `ADMIN` are stored on the `users` row (see the
//! `create_users_table` migration); `GUEST` is implicit for every guest
//! session and never stored.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

pub const ROLE_USER: &str = "USER";
pub const ROLE_ADMIN: &str = "ADMIN";
pub const ROLE_GUEST: &str = "GUEST";

/// Role carried in access tokens and attached to every resolved identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    User,
    Admin,
    Guest,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => ROLE_USER,
            Role::Admin => ROLE_ADMIN,
            Role::Guest => ROLE_GUEST,
        }
    }

    /// Whether identities with this role are backed by the `users` table.
    pub fn is_registered(self) -> bool {
        matches!(self, Role::User | Role::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = CoreError;

    /// Parses the exact upper-case role names; anything else is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ROLE_USER => Ok(Role::User),
            ROLE_ADMIN => Ok(Role::Admin),
            ROLE_GUEST => Ok(Role::Guest),
            other => Err(CoreError::Validation(format!("Unknown role: '{other}'"))),
        }
    }
}
