//! Errors from the Wikidata and Wikipedia clients.

/// Service name used in errors and logs for the Wikidata entity search.
pub const WIKIDATA_SEARCH: &str = "wikidata search";
/// Service name for the Wikidata SPARQL endpoint.
pub const WIKIDATA_SPARQL: &str = "wikidata sparql";
/// Service name for the Wikipedia page summary endpoint.
pub const WIKIPEDIA: &str = "wikipedia";

#[derive(Debug, thiserror::Error)]
pub enum WikiError {
    /// The request never produced a response (network, DNS, TLS, timeout).
    #[error("{service} unavailable: {source}")]
    Unavailable {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-2xx status.
    #[error("{service} returned status {status}: {body}")]
    Status {
        service: &'static str,
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The response body could not be decoded, or a value we send was
    /// rejected before the request was made.
    #[error("{service} protocol error: {message}")]
    Protocol {
        service: &'static str,
        message: String,
    },

    /// The search returned no candidates, or no page exists for a title.
    #[error("no {what} found for '{query}'")]
    NotFound { what: &'static str, query: String },
}

impl WikiError {
    /// Classify a transport-level [`reqwest::Error`].
    ///
    /// Body decoding failures are protocol errors; everything else means
    /// the service could not be reached.
    pub(crate) fn from_reqwest(service: &'static str, source: reqwest::Error) -> Self {
        if source.is_decode() {
            WikiError::Protocol {
                service,
                message: source.to_string(),
            }
        } else {
            WikiError::Unavailable { service, source }
        }
    }
}
