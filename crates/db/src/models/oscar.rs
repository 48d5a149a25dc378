//! Oscar race hierarchy: ceremony -> category -> nominee.

use chrono::NaiveDate;
use egot_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `oscar_ceremonies` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OscarCeremony {
    pub id: DbId,
    pub year: i32,
    pub ceremony_name: Option<String>,
    pub ceremony_date: Option<NaiveDate>,
    pub is_complete: bool,
    pub created_at: Timestamp,
}

/// A row from the `oscar_categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OscarCategory {
    pub id: DbId,
    pub ceremony_id: DbId,
    pub name: String,
    pub display_order: i32,
    pub winner_announced: bool,
}

/// A row from the `oscar_nominees` table.
///
/// `celebrity_id` is set when the nominee is a person rather than a work.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OscarNominee {
    pub id: DbId,
    pub category_id: DbId,
    pub celebrity_id: Option<DbId>,
    pub name: String,
    pub photo_url: Option<String>,
    pub work_title: Option<String>,
    pub is_winner: bool,
    pub display_order: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct OscarCategoryWithNominees {
    #[serde(flatten)]
    pub category: OscarCategory,
    pub nominees: Vec<OscarNominee>,
}

/// A ceremony with all its categories and nominees, both in display order.
#[derive(Debug, Clone, Serialize)]
pub struct OscarCeremonyFull {
    #[serde(flatten)]
    pub ceremony: OscarCeremony,
    pub categories: Vec<OscarCategoryWithNominees>,
}

#[derive(Debug, Clone)]
pub struct CreateOscarCeremony {
    pub year: i32,
    pub ceremony_name: Option<String>,
    pub ceremony_date: Option<NaiveDate>,
    pub is_complete: bool,
}

#[derive(Debug, Clone)]
pub struct CreateOscarCategory {
    pub ceremony_id: DbId,
    pub name: String,
    pub display_order: i32,
}

#[derive(Debug, Clone)]
pub struct CreateOscarNominee {
    pub category_id: DbId,
    pub celebrity_id: Option<DbId>,
    pub name: String,
    pub photo_url: Option<String>,
    pub work_title: Option<String>,
    pub display_order: i32,
}
