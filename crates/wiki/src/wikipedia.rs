//! Client for the Wikipedia REST page summary endpoint.

use std::future::Future;

use chrono::Datelike;
use reqwest::{StatusCode, Url};

use crate::config::WikiConfig;
use crate::error::{WikiError, WIKIPEDIA};
use crate::http;
use crate::models::PageSummary;

const SUMMARY_URL: &str = "https://en.wikipedia.org/api/rest_v1/page/summary";

/// Fetches page summaries (extract, description, thumbnail) by title.
#[derive(Debug, Clone)]
pub struct WikipediaClient {
    http: reqwest::Client,
}

impl WikipediaClient {
    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn new(http: reqwest::Client) -> Self {
        Self { http }
    }

    pub fn from_config(config: &WikiConfig) -> Result<Self, WikiError> {
        let http = config
            .build_http_client()
            .map_err(|e| WikiError::from_reqwest(WIKIPEDIA, e))?;
        Ok(Self::new(http))
    }

    /// Fetch the summary of the page titled `title`.
    ///
    /// Fails with [`WikiError::NotFound`] when no such page exists.
    pub async fn fetch_page_summary(&self, title: &str) -> Result<PageSummary, WikiError> {
        let url = summary_url(title)?;
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| WikiError::from_reqwest(WIKIPEDIA, e))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(WikiError::NotFound {
                what: "page",
                query: title.to_string(),
            });
        }

        http::parse_json(WIKIPEDIA, response).await
    }

    /// The narrative extract of the page titled `title`.
    pub async fn fetch_summary(&self, title: &str) -> Result<String, WikiError> {
        Ok(self.fetch_page_summary(title).await?.extract)
    }

    /// Summary and portrait of a person, looked up by their name.
    pub async fn fetch_person_summary(&self, name: &str) -> Result<PageSummary, WikiError> {
        self.fetch_page_summary(name).await
    }

    /// Summary and poster of a film released in the current calendar year or
    /// unambiguously titled.
    pub async fn fetch_film_summary(&self, title: &str) -> Result<PageSummary, WikiError> {
        let year = chrono::Utc::now().year();
        self.fetch_film_summary_for_year(title, year).await
    }

    /// Summary and poster of a film released in `year`.
    ///
    /// Tries the bare title, then `"<title> (film)"`, then
    /// `"<title> (<year> film)"`, and returns the first page that has a
    /// thumbnail. If none does, the first page that resolved at all is
    /// returned without one.
    pub async fn fetch_film_summary_for_year(
        &self,
        title: &str,
        year: i32,
    ) -> Result<PageSummary, WikiError> {
        let variants = film_title_variants(title, year);
        select_film_summary(&variants, |variant| self.fetch_page_summary(variant)).await
    }
}

/// Build the summary URL for a title. Spaces become underscores and the
/// title is percent-encoded as a single path segment.
fn summary_url(title: &str) -> Result<Url, WikiError> {
    let protocol = |message: String| WikiError::Protocol {
        service: WIKIPEDIA,
        message,
    };

    let mut url = Url::parse(SUMMARY_URL).map_err(|e| protocol(e.to_string()))?;
    url.path_segments_mut()
        .map_err(|()| protocol(format!("{SUMMARY_URL} cannot take path segments")))?
        .push(&title.trim().replace(' ', "_"));
    Ok(url)
}

/// Page titles to try for a film, most specific last.
fn film_title_variants(title: &str, year: i32) -> [String; 3] {
    [
        title.to_string(),
        format!("{title} (film)"),
        format!("{title} ({year} film)"),
    ]
}

/// Walk the variants in order, stopping at the first page with a thumbnail.
async fn select_film_summary<'a, F, Fut>(
    variants: &'a [String],
    mut fetch: F,
) -> Result<PageSummary, WikiError>
where
    F: FnMut(&'a str) -> Fut,
    Fut: Future<Output = Result<PageSummary, WikiError>>,
{
    let mut first_resolved: Option<PageSummary> = None;
    let mut last_error: Option<WikiError> = None;

    for variant in variants {
        match fetch(variant).await {
            Ok(page) if page.thumbnail_url().is_some() => return Ok(page),
            Ok(page) => {
                first_resolved.get_or_insert(page);
            }
            Err(e) => {
                tracing::debug!(variant = %variant, error = %e, "Film title variant not resolved");
                last_error = Some(e);
            }
        }
    }

    match (first_resolved, last_error) {
        (Some(page), _) => Ok(page),
        (None, Some(e)) => Err(e),
        (None, None) => Err(WikiError::NotFound {
            what: "film page",
            query: variants.first().cloned().unwrap_or_default(),
        }),
    }
}
