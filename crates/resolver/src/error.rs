use egot_wiki::WikiError;

/// Why a celebrity could not be resolved.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// Not stored locally and the knowledge base has no match.
    #[error("celebrity {0} not found")]
    NotFound(String),

    /// The knowledge base or summary service failed.
    #[error("upstream lookup failed: {0}")]
    Upstream(WikiError),

    /// The miss chain did not finish within the configured deadline.
    #[error("resolving '{name}' exceeded the {timeout_ms} ms deadline")]
    DeadlineExceeded { name: String, timeout_ms: u128 },

    #[error("database error: {0}")]
    Persistence(#[from] sqlx::Error),
}

impl ResolveError {
    /// Upstream failures and timeouts, i.e. enrichment attempts that failed
    /// rather than a confirmed absence.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            ResolveError::Upstream(_) | ResolveError::DeadlineExceeded { .. }
        )
    }
}

impl From<WikiError> for ResolveError {
    fn from(err: WikiError) -> Self {
        match err {
            WikiError::NotFound { query, .. } => ResolveError::NotFound(format!("'{query}'")),
            other => ResolveError::Upstream(other),
        }
    }
}
