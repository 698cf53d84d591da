//! Typed HTTP client for the Spotter API, plus the leaderboard panel
//! controller used by front ends.

pub mod api;
pub mod error;
pub mod panel;
pub mod types;

pub use api::ApiClient;
pub use error::ClientError;
pub use panel::{LeaderboardPanel, LeaderboardSource};
