//! Celebrity rows, aggregate projections and DTOs.

use egot_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

use super::award::Award;

pub use egot_core::records::CreateCelebrity;

/// A row from the `celebrities` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Celebrity {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    pub photo_url: Option<String>,
    pub summary: Option<String>,
    pub last_updated: Timestamp,
}

/// A celebrity together with every award row it owns.
#[derive(Debug, Clone, Serialize)]
pub struct CelebrityWithAwards {
    #[serde(flatten)]
    pub celebrity: Celebrity,
    pub awards: Vec<Award>,
}

/// A celebrity with its count of distinct winning award types.
///
/// `won_awards` is sorted, e.g. `["Emmy", "Grammy", "Oscar"]`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CelebrityEgotProgress {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub celebrity: Celebrity,
    pub egot_win_count: i64,
    pub won_awards: Vec<String>,
}

/// Result of an insert that may race with another insert for the same name.
#[derive(Debug, Clone)]
pub enum CreateOutcome {
    /// This call inserted the celebrity and its awards.
    Created(CelebrityWithAwards),
    /// Another writer already stored this name; nothing was written.
    Existing(Celebrity),
}
