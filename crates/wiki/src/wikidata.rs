//! Client for the Wikidata entity search and SPARQL endpoints.
//!
//! A lookup runs in three steps: entity search with award-based
//! disambiguation, an award query over the chosen entity's "award received"
//! statements, and a mandatory Wikipedia summary fetch.

use std::collections::HashSet;
use std::future::Future;

use egot_core::award::classify_award;
use egot_core::records::{CreateAward, CreateCelebrity};
use reqwest::header::ACCEPT;

use crate::config::WikiConfig;
use crate::error::{WikiError, WIKIDATA_SEARCH, WIKIDATA_SPARQL};
use crate::http;
use crate::models::{
    AskResponse, AwardBinding, PersonInfo, RawAward, SearchResponse, SearchResult, SparqlResponse,
};
use crate::wikipedia::WikipediaClient;

const SEARCH_URL: &str = "https://www.wikidata.org/w/api.php";
const SPARQL_URL: &str = "https://query.wikidata.org/sparql";
const SPARQL_RESULTS_JSON: &str = "application/sparql-results+json";

/// Number of search candidates considered for disambiguation.
const SEARCH_LIMIT: &str = "5";

/// A person resolved from the knowledge base, ready to be stored.
#[derive(Debug, Clone)]
pub struct FetchedCelebrity {
    pub wikidata_id: String,
    pub celebrity: CreateCelebrity,
    /// EGOT awards only; other awards the person holds are dropped.
    pub awards: Vec<CreateAward>,
}

#[derive(Debug, Clone)]
pub struct WikidataClient {
    http: reqwest::Client,
    summaries: WikipediaClient,
}

impl WikidataClient {
    /// Create a client reusing an existing [`reqwest::Client`] for both the
    /// knowledge base and the summary lookups.
    pub fn new(http: reqwest::Client) -> Self {
        Self {
            summaries: WikipediaClient::new(http.clone()),
            http,
        }
    }

    pub fn from_config(config: &WikiConfig) -> Result<Self, WikiError> {
        let http = config
            .build_http_client()
            .map_err(|e| WikiError::from_reqwest(WIKIDATA_SEARCH, e))?;
        Ok(Self::new(http))
    }

    /// Find the entity that best matches `name`.
    ///
    /// Up to five ranked candidates are checked in order; the first one that
    /// holds an EGOT-like award is returned. Candidates whose check fails are
    /// skipped. If none passes, the top-ranked candidate is returned.
    pub async fn search_person(&self, name: &str) -> Result<SearchResult, WikiError> {
        let response = self
            .http
            .get(SEARCH_URL)
            .query(&[
                ("action", "wbsearchentities"),
                ("search", name),
                ("language", "en"),
                ("type", "item"),
                ("limit", SEARCH_LIMIT),
                ("format", "json"),
            ])
            .send()
            .await
            .map_err(|e| WikiError::from_reqwest(WIKIDATA_SEARCH, e))?;

        let body: SearchResponse = http::parse_json(WIKIDATA_SEARCH, response).await?;

        pick_candidate(body.search, |id| async move { self.has_egot_awards(&id).await })
            .await
            .ok_or_else(|| WikiError::NotFound {
                what: "knowledge-base entity",
                query: name.to_string(),
            })
    }

    /// Whether the entity holds any award whose English label mentions an
    /// Emmy, Grammy, Academy Award, Oscar or Tony Award.
    pub async fn has_egot_awards(&self, wikidata_id: &str) -> Result<bool, WikiError> {
        let query = ask_egot_query(wikidata_id)?;
        let body: AskResponse = self.sparql(&query).await?;
        Ok(body.boolean)
    }

    /// Fetch the person's label, portrait and every award statement.
    ///
    /// Rows are deduplicated on (award, year): repeat wins of the same award
    /// in different years are kept. Name and photo come from the first row
    /// that carries each.
    pub async fn fetch_person_with_awards(
        &self,
        wikidata_id: &str,
    ) -> Result<(PersonInfo, Vec<RawAward>), WikiError> {
        let query = awards_query(wikidata_id)?;
        let body: SparqlResponse = self.sparql(&query).await?;
        Ok(collect_person(wikidata_id, &body.results.bindings))
    }

    /// Resolve `name` into a celebrity with its classified EGOT awards.
    ///
    /// The Wikipedia summary is required: if it cannot be fetched the whole
    /// lookup fails. A missing photo is fine.
    pub async fn fetch_celebrity(&self, name: &str) -> Result<FetchedCelebrity, WikiError> {
        let candidate = self.search_person(name).await?;
        let (person, raw_awards) = self.fetch_person_with_awards(&candidate.id).await?;

        let display_name = [person.name.as_str(), candidate.label.as_str(), name.trim()]
            .into_iter()
            .find(|s| !s.is_empty())
            .unwrap_or_default()
            .to_string();

        let summary = self.summaries.fetch_summary(&display_name).await?;

        let total = raw_awards.len();
        let awards = classify_awards(raw_awards);
        tracing::info!(
            query = %name,
            wikidata_id = %candidate.id,
            name = %display_name,
            total_awards = total,
            egot_awards = awards.len(),
            "Fetched celebrity from knowledge base",
        );

        Ok(FetchedCelebrity {
            wikidata_id: candidate.id,
            celebrity: CreateCelebrity::new(&display_name, person.photo_url, Some(summary)),
            awards,
        })
    }

    // ---- private helpers ----

    async fn sparql<T: serde::de::DeserializeOwned>(&self, query: &str) -> Result<T, WikiError> {
        let response = self
            .http
            .get(SPARQL_URL)
            .query(&[("query", query), ("format", "json")])
            .header(ACCEPT, SPARQL_RESULTS_JSON)
            .send()
            .await
            .map_err(|e| WikiError::from_reqwest(WIKIDATA_SPARQL, e))?;

        http::parse_json(WIKIDATA_SPARQL, response).await
    }
}

/// Choose a candidate: the first for which `check` returns `Ok(true)`,
/// otherwise the first in rank order. `None` only when there are none.
async fn pick_candidate<F, Fut>(candidates: Vec<SearchResult>, mut check: F) -> Option<SearchResult>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<bool, WikiError>>,
{
    for (rank, candidate) in candidates.iter().enumerate() {
        match check(candidate.id.clone()).await {
            Ok(true) => {
                tracing::debug!(id = %candidate.id, rank, "Candidate holds an EGOT award");
                return Some(candidate.clone());
            }
            Ok(false) => {}
            Err(e) => {
                tracing::debug!(id = %candidate.id, error = %e, "Award check failed, skipping candidate");
            }
        }
    }
    candidates.into_iter().next()
}

/// Entity ids are interpolated into SPARQL, so only `Q<digits>` is accepted.
fn validate_entity_id(id: &str) -> Result<&str, WikiError> {
    let valid = id
        .strip_prefix('Q')
        .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()));
    if valid {
        Ok(id)
    } else {
        Err(WikiError::Protocol {
            service: WIKIDATA_SPARQL,
            message: format!("invalid entity id '{id}'"),
        })
    }
}

fn ask_egot_query(wikidata_id: &str) -> Result<String, WikiError> {
    let id = validate_entity_id(wikidata_id)?;
    Ok(format!(
        r#"ASK {{
  wd:{id} wdt:P166 ?award .
  ?award rdfs:label ?label .
  FILTER(LANG(?label) = "en")
  FILTER(
    CONTAINS(LCASE(?label), "emmy") ||
    CONTAINS(LCASE(?label), "grammy") ||
    CONTAINS(LCASE(?label), "academy award") ||
    CONTAINS(LCASE(?label), "oscar") ||
    CONTAINS(LCASE(?label), "tony award")
  )
}}"#
    ))
}

/// Award statements with optional point-in-time year, work (P1686 "for
/// work", P1411 "nominated for", P972 "catalog") and portrait (P18).
fn awards_query(wikidata_id: &str) -> Result<String, WikiError> {
    let id = validate_entity_id(wikidata_id)?;
    Ok(format!(
        r#"SELECT DISTINCT ?personLabel ?image ?award ?awardLabel ?year ?workLabel WHERE {{
  wd:{id} p:P166 ?statement .
  ?statement ps:P166 ?award .
  OPTIONAL {{ ?statement pq:P585 ?date . BIND(YEAR(?date) AS ?year) }}
  OPTIONAL {{ ?statement pq:P1686|pq:P1411|pq:P972 ?work . }}
  OPTIONAL {{ wd:{id} wdt:P18 ?image }}
  SERVICE wikibase:label {{ bd:serviceParam wikibase:language "en" }}
}}
ORDER BY DESC(?year)"#
    ))
}

/// Fold award rows into person info and a deduplicated award list.
fn collect_person(wikidata_id: &str, bindings: &[AwardBinding]) -> (PersonInfo, Vec<RawAward>) {
    let mut person = PersonInfo {
        wikidata_id: wikidata_id.to_string(),
        ..Default::default()
    };
    let mut seen = HashSet::new();
    let mut awards = Vec::new();

    for row in bindings {
        if person.name.is_empty() && !row.person_label().is_empty() {
            person.name = row.person_label().to_string();
        }
        if person.photo_url.is_none() && !row.image().is_empty() {
            person.photo_url = Some(row.image().to_string());
        }

        let year = row.year();
        if !seen.insert((row.award_id().to_string(), year)) {
            continue;
        }

        awards.push(RawAward {
            award_id: row.award_id().to_string(),
            label: row.award_label().to_string(),
            year,
            work: row.work_label().to_string(),
        });
    }

    (person, awards)
}

/// Keep only EGOT awards. Category is the award's own label.
fn classify_awards(raw: Vec<RawAward>) -> Vec<CreateAward> {
    raw.into_iter()
        .filter_map(|award| {
            let award_type = classify_award(&award.label)?;
            Some(CreateAward::win(
                award_type,
                award.year,
                &award.work,
                &award.label,
            ))
        })
        .collect()
}
