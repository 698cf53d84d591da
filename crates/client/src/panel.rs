//! Leaderboard panel controller.
//!
//! A panel shows one scene's leaderboard at a time. Each scene is fetched
//! once; switching back to it is served from the panel's
//! [`LeaderboardCache`].

use async_trait::async_trait;
use spotter_core::leaderboard::{format_elapsed, LeaderboardCache, LeaderboardEntry};
use spotter_core::types::DbId;

use crate::api::ApiClient;
use crate::error::ClientError;

/// Where a panel gets leaderboards from.
#[async_trait]
pub trait LeaderboardSource: Send + Sync {
    async fn fetch_leaderboard(
        &self,
        scene_id: DbId,
    ) -> Result<Vec<LeaderboardEntry>, ClientError>;
}

#[async_trait]
impl LeaderboardSource for ApiClient {
    async fn fetch_leaderboard(
        &self,
        scene_id: DbId,
    ) -> Result<Vec<LeaderboardEntry>, ClientError> {
        self.leaderboard(scene_id, None).await
    }
}

/// One formatted line of a leaderboard table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    pub rank: u32,
    pub player: String,
    /// `MM:SS.cc`
    pub time: String,
}

pub struct LeaderboardPanel<S> {
    source: S,
    cache: LeaderboardCache,
    selected: Option<DbId>,
}

impl<S: LeaderboardSource> LeaderboardPanel<S> {
    pub fn new(source: S) -> Self {
        Self::with_cache(source, LeaderboardCache::new())
    }

    /// Start from leaderboards fetched elsewhere, e.g. the overview endpoint.
    pub fn with_cache(source: S, cache: LeaderboardCache) -> Self {
        Self {
            source,
            cache,
            selected: None,
        }
    }

    /// Select a scene, fetching its leaderboard on first selection.
    ///
    /// A failed fetch leaves the selection and the cache untouched, so the
    /// next `select` retries.
    pub async fn select(&mut self, scene_id: DbId) -> Result<&[LeaderboardEntry], ClientError> {
        if !self.cache.contains(scene_id) {
            let entries = self.source.fetch_leaderboard(scene_id).await?;
            tracing::debug!(scene_id, count = entries.len(), "Leaderboard loaded");
            self.cache.insert(scene_id, entries);
        }
        self.selected = Some(scene_id);
        Ok(self.cache.get(scene_id).unwrap_or_default())
    }

    pub fn selected(&self) -> Option<DbId> {
        self.selected
    }

    /// Entries of the selected scene, if one is selected.
    pub fn entries(&self) -> Option<&[LeaderboardEntry]> {
        self.selected.and_then(|id| self.cache.get(id))
    }

    /// The selected leaderboard formatted for display.
    pub fn rows(&self) -> Vec<DisplayRow> {
        self.entries()
            .unwrap_or_default()
            .iter()
            .map(|e| DisplayRow {
                rank: e.rank,
                player: e.player.clone(),
                time: format_elapsed(e.ms),
            })
            .collect()
    }

    pub fn cache(&self) -> &LeaderboardCache {
        &self.cache
    }

    pub fn into_cache(self) -> LeaderboardCache {
        self.cache
    }
}
