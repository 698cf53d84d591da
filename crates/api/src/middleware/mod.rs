//! Authentication and authorization extractors.
//!
//! - [`auth::AuthIdentity`] -- Resolves the bearer token to a live user or guest.
//! - [`rbac::RequirePlayer`] -- Requires an identity allowed to play.

pub mod auth;
pub mod rbac;
