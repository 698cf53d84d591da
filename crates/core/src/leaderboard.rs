//! Leaderboard ranking, display helpers, and the per-scene cache used by
//! leaderboard panels.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::{DbId, Timestamp};

/// Entries returned when the caller does not ask for a limit.
pub const DEFAULT_LEADERBOARD_LIMIT: i64 = 20;

/// Upper bound on a single leaderboard page.
pub const MAX_LEADERBOARD_LIMIT: i64 = 100;

/// Shown when neither the user nor the guest behind a score can be found.
pub const ANONYMOUS_PLAYER: &str = "Anonymous";

/// Clamp a user-provided limit into `1..=MAX_LEADERBOARD_LIMIT`.
pub fn clamp_limit(limit: Option<i64>) -> i64 {
    limit
        .unwrap_or(DEFAULT_LEADERBOARD_LIMIT)
        .clamp(1, MAX_LEADERBOARD_LIMIT)
}

/// One stored score joined with whichever player names resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardRow {
    pub score_id: DbId,
    pub ms: i64,
    pub created_at: Timestamp,
    pub user_name: Option<String>,
    pub guest_name: Option<String>,
}

/// A ranked leaderboard line as served to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    /// 1-based position in this response. Never stored.
    pub rank: u32,
    pub player: String,
    pub ms: i64,
    pub created_at: Timestamp,
}

/// Display name for a score: the user's name, else the guest's, else
/// [`ANONYMOUS_PLAYER`]. Blank names count as missing.
pub fn player_name(user_name: Option<&str>, guest_name: Option<&str>) -> String {
    user_name
        .filter(|n| !n.trim().is_empty())
        .or(guest_name.filter(|n| !n.trim().is_empty()))
        .unwrap_or(ANONYMOUS_PLAYER)
        .to_string()
}

/// Order rows fastest first and assign ranks.
///
/// The sort is stable on `ms` with ties broken by creation time, then by
/// score id, so equal times keep insertion order. At most `limit` entries are
/// returned.
pub fn rank(mut rows: Vec<LeaderboardRow>, limit: i64) -> Vec<LeaderboardEntry> {
    rows.sort_by(|a, b| {
        a.ms.cmp(&b.ms)
            .then(a.created_at.cmp(&b.created_at))
            .then(a.score_id.cmp(&b.score_id))
    });

    rows.into_iter()
        .take(limit.max(0) as usize)
        .enumerate()
        .map(|(idx, row)| LeaderboardEntry {
            rank: idx as u32 + 1,
            player: player_name(row.user_name.as_deref(), row.guest_name.as_deref()),
            ms: row.ms,
            created_at: row.created_at,
        })
        .collect()
}

/// Render elapsed milliseconds as `MM:SS.cc`.
pub fn format_elapsed(ms: i64) -> String {
    let ms = ms.max(0);
    let total_secs = ms / 1000;
    let minutes = total_secs / 60;
    let seconds = total_secs % 60;
    let centis = (ms % 1000) / 10;
    format!("{minutes:02}:{seconds:02}.{centis:02}")
}

/// Leaderboards already fetched, keyed by scene id.
///
/// Scores are append-only and a panel only needs a snapshot, so entries are
/// never invalidated; drop the cache to start over.
#[derive(Debug, Default, Clone)]
pub struct LeaderboardCache {
    by_scene: HashMap<DbId, Vec<LeaderboardEntry>>,
}

impl LeaderboardCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, scene_id: DbId) -> Option<&[LeaderboardEntry]> {
        self.by_scene.get(&scene_id).map(Vec::as_slice)
    }

    pub fn contains(&self, scene_id: DbId) -> bool {
        self.by_scene.contains_key(&scene_id)
    }

    /// Store a scene's leaderboard. An existing entry is kept as-is.
    pub fn insert(
        &mut self,
        scene_id: DbId,
        entries: Vec<LeaderboardEntry>,
    ) -> &[LeaderboardEntry] {
        self.by_scene.entry(scene_id).or_insert(entries)
    }

    pub fn len(&self) -> usize {
        self.by_scene.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_scene.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use super::*;

    fn at(secs: i64) -> Timestamp {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    fn row(
        id: DbId,
        ms: i64,
        secs: i64,
        user: Option<&str>,
        guest: Option<&str>,
    ) -> LeaderboardRow {
        LeaderboardRow {
            score_id: id,
            ms,
            created_at: at(secs),
            user_name: user.map(String::from),
            guest_name: guest.map(String::from),
        }
    }

    #[test]
    fn fastest_first_with_ranks() {
        let rows = vec![
            row(1, 45_000, 0, Some("Alice"), None),
            row(2, 32_000, 1, None, Some("Guest 0007")),
        ];
        let entries = rank(rows, DEFAULT_LEADERBOARD_LIMIT);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].rank, 1);
        assert_eq!(entries[0].player, "Guest 0007");
        assert_eq!(entries[0].ms, 32_000);
        assert_eq!(entries[1].rank, 2);
        assert_eq!(entries[1].player, "Alice");
        assert_eq!(entries[1].ms, 45_000);
    }

    #[test]
    fn ties_keep_insertion_order() {
        let rows = vec![
            row(3, 10_000, 5, Some("Late"), None),
            row(1, 10_000, 1, Some("Early"), None),
            row(2, 10_000, 1, Some("SameInstant"), None),
        ];
        let players: Vec<_> = rank(rows, 10).into_iter().map(|e| e.player).collect();
        assert_eq!(players, ["Early", "SameInstant", "Late"]);
    }

    #[test]
    fn limit_caps_entries() {
        let rows: Vec<_> = (1..=30).map(|i| row(i, 1000 * i, i, Some("P"), None)).collect();
        let entries = rank(rows, 5);
        assert_eq!(entries.len(), 5);
        assert_eq!(entries.last().unwrap().rank, 5);
        assert_eq!(entries.last().unwrap().ms, 5000);
    }

    #[test]
    fn never_more_entries_than_rows() {
        let rows = vec![row(1, 1, 0, Some("Solo"), None)];
        assert_eq!(rank(rows, 20).len(), 1);
        assert!(rank(Vec::new(), 20).is_empty());
    }

    #[test]
    fn orphaned_scores_show_anonymous() {
        assert_eq!(player_name(None, None), ANONYMOUS_PLAYER);
        assert_eq!(player_name(Some("  "), None), ANONYMOUS_PLAYER);
        assert_eq!(player_name(Some(""), Some("Guest 0001")), "Guest 0001");
    }

    #[test]
    fn clamp_limit_defaults_and_bounds() {
        assert_eq!(clamp_limit(None), 20);
        assert_eq!(clamp_limit(Some(0)), 1);
        assert_eq!(clamp_limit(Some(-3)), 1);
        assert_eq!(clamp_limit(Some(500)), 100);
        assert_eq!(clamp_limit(Some(7)), 7);
    }

    #[test]
    fn format_elapsed_minutes_seconds_centis() {
        assert_eq!(format_elapsed(32_000), "00:32.00");
        assert_eq!(format_elapsed(61_234), "01:01.23");
        assert_eq!(format_elapsed(0), "00:00.00");
    }

    #[test]
    fn cache_keeps_first_snapshot() {
        let mut cache = LeaderboardCache::new();
        assert!(cache.get(1).is_none());

        let first = vec![LeaderboardEntry {
            rank: 1,
            player: "Alice".into(),
            ms: 100,
            created_at: at(0) + Duration::seconds(1),
        }];
        cache.insert(1, first.clone());
        cache.insert(1, Vec::new());

        assert_eq!(cache.get(1), Some(first.as_slice()));
        assert!(cache.contains(1));
        assert_eq!(cache.len(), 1);
    }
}
