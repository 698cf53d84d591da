//! Periodic pruning of stale guest sessions.
//!
//! Deletes `guest_sessions` rows older than the configured retention period.
//! Scores keep their rows with `guest_id` nulled and show as "Anonymous";
//! tokens for a pruned guest stop resolving.

use std::time::Duration;

use chrono::{DateTime, Utc};
use spotter_db::repositories::GuestSessionRepo;
use sqlx::PgPool;
use tokio_util::sync::CancellationToken;

/// How often the cleanup job runs.
const CLEANUP_INTERVAL: Duration = Duration::from_secs(3600); // 1 hour

/// Delete guest sessions older than `retention_hours` once.
///
/// Returns the number of sessions removed.
pub async fn prune_once(pool: &PgPool, retention_hours: i64) -> Result<u64, sqlx::Error> {
    let Some(cutoff) = retention_cutoff(Utc::now(), retention_hours) else {
        tracing::warn!(retention_hours, "Guest retention: period out of range, skipping");
        return Ok(0);
    };
    GuestSessionRepo::delete_older_than(pool, cutoff).await
}

/// Sessions created before the returned instant are stale.
///
/// `None` when `retention_hours` reaches past the representable time range.
fn retention_cutoff(now: DateTime<Utc>, retention_hours: i64) -> Option<DateTime<Utc>> {
    chrono::Duration::try_hours(retention_hours).and_then(|period| now.checked_sub_signed(period))
}

/// Run the guest retention loop until `cancel` is triggered.
pub async fn run(pool: PgPool, retention_hours: i64, cancel: CancellationToken) {
    tracing::info!(
        retention_hours,
        interval_secs = CLEANUP_INTERVAL.as_secs(),
        "Guest retention job started"
    );

    let mut interval = tokio::time::interval(CLEANUP_INTERVAL);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Guest retention job stopping");
                break;
            }
            _ = interval.tick() => {
                match prune_once(&pool, retention_hours).await {
                    Ok(deleted) => {
                        if deleted > 0 {
                            tracing::info!(deleted, "Guest retention: pruned stale sessions");
                        } else {
                            tracing::debug!("Guest retention: nothing to prune");
                        }
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "Guest retention: cleanup failed");
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn cutoff_is_retention_hours_before_now() {
        let now = Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap();
        let cutoff = retention_cutoff(now, 48).unwrap();
        assert_eq!(cutoff, Utc.with_ymd_and_hms(2026, 3, 8, 12, 0, 0).unwrap());
    }

    #[test]
    fn out_of_range_retention_has_no_cutoff() {
        let now = Utc::now();
        assert!(retention_cutoff(now, i64::MAX).is_none());
        assert!(retention_cutoff(now, 24 * 365 * 1_000_000).is_none());
    }
}
