//! Row structs and insert DTOs.
//!
//! Each submodule contains a `FromRow` entity struct matching the table and,
//! where rows are created by the application, a create DTO.

pub mod answer;
pub mod character;
pub mod guest_session;
pub mod scene;
pub mod score;
pub mod user;
