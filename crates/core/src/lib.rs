//! Domain core for the Spotter game server.
//!
//! Everything in this crate is pure: no database, no HTTP. The `db` and `api`
//! crates build on these types, and the client crate reuses the wire-facing
//! ones.

pub mod access;
pub mod account;
pub mod error;
pub mod guest;
pub mod hit_test;
pub mod identity;
pub mod input;
pub mod leaderboard;
pub mod roles;
pub mod scoring;
pub mod types;
