use std::time::Duration;

/// User agent sent to Wikimedia services, which reject anonymous clients.
pub const DEFAULT_USER_AGENT: &str = "EGOT-Tracker/1.0 (https://github.com/egot-tracker)";

/// HTTP settings shared by the Wikidata and Wikipedia clients.
#[derive(Debug, Clone)]
pub struct WikiConfig {
    /// Per-request timeout in seconds (default: `30`).
    pub http_timeout_secs: u64,
    /// `User-Agent` header value.
    pub user_agent: String,
}

impl Default for WikiConfig {
    fn default() -> Self {
        Self {
            http_timeout_secs: 30,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl WikiConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                  | Default                                              |
    /// |--------------------------|------------------------------------------------------|
    /// | `WIKI_HTTP_TIMEOUT_SECS` | `30`                                                 |
    /// | `WIKI_USER_AGENT`        | `EGOT-Tracker/1.0 (https://github.com/egot-tracker)` |
    pub fn from_env() -> Self {
        let http_timeout_secs: u64 = std::env::var("WIKI_HTTP_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("WIKI_HTTP_TIMEOUT_SECS must be a valid u64");

        let user_agent =
            std::env::var("WIKI_USER_AGENT").unwrap_or_else(|_| DEFAULT_USER_AGENT.into());

        Self {
            http_timeout_secs,
            user_agent,
        }
    }

    /// Build a pooled HTTP client carrying the timeout and user agent.
    ///
    /// Clone the returned client to share its connection pool between the
    /// two services.
    pub fn build_http_client(&self) -> Result<reqwest::Client, reqwest::Error> {
        reqwest::Client::builder()
            .user_agent(self.user_agent.clone())
            .timeout(Duration::from_secs(self.http_timeout_secs))
            .build()
    }
}
