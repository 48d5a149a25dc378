//! Award facts owned by a celebrity.

use chrono::NaiveDate;
use egot_core::award::AwardType;
use egot_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

pub use egot_core::records::CreateAward;

/// A row from the `awards` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Award {
    pub id: DbId,
    pub celebrity_id: DbId,
    #[sqlx(rename = "type", try_from = "String")]
    #[serde(rename = "type")]
    pub award_type: AwardType,
    pub year: Option<i32>,
    pub work: String,
    pub category: String,
    pub is_winner: bool,
    pub ceremony_date: Option<NaiveDate>,
    pub is_upcoming: bool,
}
