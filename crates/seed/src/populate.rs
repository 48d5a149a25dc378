//! `egot-seed populate`: resolve a roster of names one by one.

use std::time::Duration;

use egot_db::repositories::CelebrityRepo;
use egot_db::DbPool;
use egot_resolver::CelebrityService;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PopulateSummary {
    pub success: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl PopulateSummary {
    pub fn total(&self) -> usize {
        self.success + self.skipped + self.failed
    }
}

/// Resolve every roster name that is not stored yet.
///
/// Failures are logged and counted; the run continues with the next name.
/// The pause follows every lookup except the last; stored names are skipped
/// without a pause. Only a database error on the skip check aborts the run.
pub async fn run(
    pool: &DbPool,
    service: &CelebrityService,
    roster: &[String],
    delay: Duration,
) -> Result<PopulateSummary, sqlx::Error> {
    let mut summary = PopulateSummary::default();
    tracing::info!(count = roster.len(), "Starting population");

    for (i, name) in roster.iter().enumerate() {
        let position = i + 1;

        if CelebrityRepo::find_by_name(pool, name).await?.is_some() {
            tracing::info!(position, name = %name, "Skipped, already stored");
            summary.skipped += 1;
            continue;
        }

        match service.resolve_by_name(name).await {
            Ok(resolved) => {
                tracing::info!(
                    position,
                    name = %name,
                    id = resolved.celebrity.id,
                    awards = resolved.awards.len(),
                    "Resolved",
                );
                summary.success += 1;
            }
            Err(e) => {
                tracing::warn!(position, name = %name, error = %e, "Failed to resolve");
                summary.failed += 1;
            }
        }

        if position < roster.len() {
            tokio::time::sleep(delay).await;
        }
    }

    Ok(summary)
}
