//! The celebrity resolution service.

use std::sync::Arc;
use std::time::Duration;

use egot_core::egot::DEFAULT_SEARCH_LIMIT;
use egot_core::types::DbId;
use egot_db::models::celebrity::{
    Celebrity, CelebrityEgotProgress, CelebrityWithAwards, CreateOutcome,
};
use egot_db::repositories::{AwardRepo, CelebrityRepo};
use sqlx::PgPool;

use crate::config::ResolverConfig;
use crate::error::ResolveError;
use crate::source::CelebritySource;

/// Cache-aside lookups over the celebrity store.
///
/// Holds no mutable state; concurrent calls coordinate through the store's
/// unique name index.
#[derive(Clone)]
pub struct CelebrityService {
    pool: PgPool,
    source: Arc<dyn CelebritySource>,
    resolve_timeout: Duration,
}

impl CelebrityService {
    pub fn new(pool: PgPool, source: Arc<dyn CelebritySource>, config: &ResolverConfig) -> Self {
        Self {
            pool,
            source,
            resolve_timeout: config.resolve_timeout,
        }
    }

    /// Look a celebrity up by name, fetching and storing it on a miss.
    ///
    /// A hit always reloads the award list from the store. A miss runs the
    /// external fetch and the write under one deadline; if the deadline
    /// passes, in-flight requests are dropped and any open transaction is
    /// rolled back. A person with no EGOT awards is still stored, so the next
    /// lookup is a hit.
    pub async fn resolve_by_name(&self, name: &str) -> Result<CelebrityWithAwards, ResolveError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ResolveError::NotFound("''".into()));
        }

        if let Some(celebrity) = CelebrityRepo::find_by_name(&self.pool, name).await? {
            tracing::debug!(id = celebrity.id, name = %celebrity.name, "Celebrity cache hit");
            return self.with_awards(celebrity).await;
        }

        tracing::info!(name, "Celebrity cache miss, fetching from knowledge base");
        match tokio::time::timeout(self.resolve_timeout, self.fetch_and_store(name)).await {
            Ok(result) => result,
            Err(_) => Err(ResolveError::DeadlineExceeded {
                name: name.to_string(),
                timeout_ms: self.resolve_timeout.as_millis(),
            }),
        }
    }

    /// A stored celebrity with its awards.
    pub async fn find_by_id(&self, id: DbId) -> Result<CelebrityWithAwards, ResolveError> {
        let celebrity = CelebrityRepo::find_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| ResolveError::NotFound(format!("with id {id}")))?;
        self.with_awards(celebrity).await
    }

    /// Substring search over stored names only; never calls out.
    pub async fn autocomplete(&self, query: &str) -> Result<Vec<Celebrity>, ResolveError> {
        if query.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(CelebrityRepo::search(&self.pool, query, Some(DEFAULT_SEARCH_LIMIT)).await?)
    }

    pub async fn close_to_egot(
        &self,
        limit: Option<i64>,
    ) -> Result<Vec<CelebrityEgotProgress>, ResolveError> {
        Ok(CelebrityRepo::find_close_to_egot(&self.pool, limit).await?)
    }

    pub async fn egot_winners(
        &self,
        limit: Option<i64>,
    ) -> Result<Vec<CelebrityEgotProgress>, ResolveError> {
        Ok(CelebrityRepo::find_egot_winners(&self.pool, limit).await?)
    }

    pub async fn no_awards(&self, limit: Option<i64>) -> Result<Vec<Celebrity>, ResolveError> {
        Ok(CelebrityRepo::find_no_awards(&self.pool, limit).await?)
    }

    // ---- private helpers ----

    async fn fetch_and_store(&self, name: &str) -> Result<CelebrityWithAwards, ResolveError> {
        let fetched = self.source.fetch_celebrity(name).await.map_err(|e| {
            tracing::warn!(name, error = %e, "Knowledge-base lookup failed");
            ResolveError::from(e)
        })?;

        match CelebrityRepo::create_with_awards(&self.pool, &fetched.celebrity, &fetched.awards)
            .await?
        {
            CreateOutcome::Created(created) => {
                tracing::info!(
                    id = created.celebrity.id,
                    name = %created.celebrity.name,
                    awards = created.awards.len(),
                    "Stored new celebrity",
                );
                Ok(created)
            }
            CreateOutcome::Existing(existing) => {
                tracing::info!(
                    id = existing.id,
                    name = %existing.name,
                    "Celebrity stored concurrently, using existing row",
                );
                self.with_awards(existing).await
            }
        }
    }

    async fn with_awards(&self, celebrity: Celebrity) -> Result<CelebrityWithAwards, ResolveError> {
        let awards = AwardRepo::list_by_celebrity(&self.pool, celebrity.id).await?;
        Ok(CelebrityWithAwards { celebrity, awards })
    }
}
