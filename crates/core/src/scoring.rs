//! Score submission validation and attribution.

use serde_json::Value;

use crate::error::CoreError;
use crate::identity::{Identity, IdentityKey};
use crate::input;
use crate::types::DbId;

/// A validated `{sceneId, ms}` submission, not yet tied to a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreSubmission {
    pub scene_id: DbId,
    pub ms: i64,
}

impl ScoreSubmission {
    /// Both fields must be finite positive integers.
    pub fn parse(scene_id: Option<&Value>, ms: Option<&Value>) -> Result<Self, CoreError> {
        Ok(Self {
            scene_id: input::positive_int(scene_id, "sceneId")?,
            ms: input::positive_int(ms, "ms")?,
        })
    }

    /// Attach the submitting identity.
    ///
    /// Users and admins are recorded by user id, guests by guest id; this is
    /// the only place the two identity kinds meet in storage.
    pub fn attribute_to(self, identity: &Identity) -> NewScore {
        NewScore {
            scene_id: self.scene_id,
            ms: self.ms,
            owner: identity.key(),
        }
    }
}

/// A score ready to insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewScore {
    pub scene_id: DbId,
    pub ms: i64,
    pub owner: IdentityKey,
}
