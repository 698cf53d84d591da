pub mod auth;
pub mod game;
pub mod leaderboards;
pub mod players;
pub mod scenes;
pub mod scores;
