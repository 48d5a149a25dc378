//! HTTP clients for the public knowledge sources behind the EGOT tracker.
//!
//! [`WikidataClient`] finds a person in the Wikidata entity graph and pulls
//! their award statements; [`WikipediaClient`] supplies narrative summaries
//! and thumbnails from the Wikipedia REST API.

pub mod config;
pub mod error;
mod http;
pub mod models;
pub mod wikidata;
pub mod wikipedia;

pub use config::WikiConfig;
pub use error::WikiError;
pub use wikidata::{FetchedCelebrity, WikidataClient};
pub use wikipedia::WikipediaClient;
