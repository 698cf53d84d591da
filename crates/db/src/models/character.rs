//! Character entity model.

use serde::Serialize;
use spotter_core::types::DbId;
use sqlx::FromRow;

/// A row from the `characters` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub id: DbId,
    pub name: String,
    pub icon_url: String,
}

/// A character joined with the scene it appears in. Carries no coordinates.
#[derive(Debug, Clone, FromRow)]
pub struct SceneCharacter {
    pub scene_id: DbId,
    pub id: DbId,
    pub name: String,
    pub icon_url: String,
}

impl From<SceneCharacter> for Character {
    fn from(sc: SceneCharacter) -> Self {
        Character {
            id: sc.id,
            name: sc.name,
            icon_url: sc.icon_url,
        }
    }
}
