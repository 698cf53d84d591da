//! Answer (scene, character) -> coordinate model.

use spotter_core::hit_test::NormalizedPoint;
use spotter_core::types::DbId;
use sqlx::FromRow;

/// A row from the `scene_answers` table.
///
/// Not `Serialize`: answer coordinates never leave the server.
#[derive(Debug, Clone, FromRow)]
pub struct Answer {
    pub id: DbId,
    pub scene_id: DbId,
    pub character_id: DbId,
    pub x: f64,
    pub y: f64,
}

impl Answer {
    pub fn point(&self) -> NormalizedPoint {
        NormalizedPoint::new(self.x, self.y)
    }
}
