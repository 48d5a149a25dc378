use std::time::Duration;

/// Settings for the resolution service.
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Deadline for one miss chain: search, award query, summary and the
    /// database write together (default: 60 s).
    pub resolve_timeout: Duration,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            resolve_timeout: Duration::from_secs(60),
        }
    }
}

impl ResolverConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default |
    /// |------------------------|---------|
    /// | `RESOLVE_TIMEOUT_SECS` | `60`    |
    pub fn from_env() -> Self {
        let secs: u64 = std::env::var("RESOLVE_TIMEOUT_SECS")
            .unwrap_or_else(|_| "60".into())
            .parse()
            .expect("RESOLVE_TIMEOUT_SECS must be a valid u64");

        Self {
            resolve_timeout: Duration::from_secs(secs),
        }
    }
}
