//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods
//! that accept `&PgPool` as the first argument.

pub mod answer_repo;
pub mod character_repo;
pub mod guest_session_repo;
pub mod scene_repo;
pub mod score_repo;
pub mod user_repo;

pub use answer_repo::AnswerRepo;
pub use character_repo::CharacterRepo;
pub use guest_session_repo::GuestSessionRepo;
pub use scene_repo::SceneRepo;
pub use score_repo::ScoreRepo;
pub use user_repo::UserRepo;
