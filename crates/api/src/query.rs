//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// `?q=` for name searches.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: Option<String>,
}

impl SearchParams {
    /// The trimmed query, or `None` when missing or blank.
    pub fn query(&self) -> Option<&str> {
        self.q.as_deref().map(str::trim).filter(|q| !q.is_empty())
    }
}

/// `?limit=` for the aggregate listings.
///
/// Kept as a string so an unparsable value falls back to the default limit
/// instead of rejecting the request. Clamping happens in the repository
/// layer via `clamp_limit`.
#[derive(Debug, Deserialize)]
pub struct LimitParams {
    #[serde(default)]
    pub limit: Option<String>,
}

impl LimitParams {
    pub fn limit(&self) -> Option<i64> {
        self.limit.as_deref().and_then(|l| l.trim().parse().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_query_is_none() {
        let params = SearchParams {
            q: Some("   ".into()),
        };
        assert_eq!(params.query(), None);
        assert_eq!(SearchParams { q: None }.query(), None);
    }

    #[test]
    fn query_is_trimmed() {
        let params = SearchParams {
            q: Some(" Rita Moreno ".into()),
        };
        assert_eq!(params.query(), Some("Rita Moreno"));
    }

    #[test]
    fn unparsable_limit_is_none() {
        let params = LimitParams {
            limit: Some("lots".into()),
        };
        assert_eq!(params.limit(), None);
        let params = LimitParams {
            limit: Some("25".into()),
        };
        assert_eq!(params.limit(), Some(25));
    }
}
