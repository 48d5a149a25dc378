//! `egot-seed oscar-race`: build a ceremony's categories and nominees,
//! linking person nominees to celebrities and attaching film posters.

use std::time::Duration;

use anyhow::{bail, Context};
use egot_core::ceremony::ceremony_name;
use egot_core::types::DbId;
use egot_db::models::celebrity::CreateCelebrity;
use egot_db::models::oscar::{CreateOscarCategory, CreateOscarCeremony, CreateOscarNominee};
use egot_db::repositories::{CelebrityRepo, OscarRepo};
use egot_db::DbPool;
use egot_wiki::WikipediaClient;

use crate::data::{Nominations, NomineeEntry};

#[derive(Debug, Default)]
pub struct SetupSummary {
    pub ceremony_name: String,
    pub categories: usize,
    pub nominees: usize,
    pub celebrities_linked: usize,
}

pub async fn run(
    pool: &DbPool,
    summaries: &WikipediaClient,
    nominations: &Nominations,
    reset: bool,
    delay: Duration,
) -> anyhow::Result<SetupSummary> {
    let year = nominations.year;

    if OscarRepo::find_ceremony_by_year(pool, year).await?.is_some() {
        if !reset {
            bail!("Ceremony for {year} already exists. Use --reset to recreate.");
        }
        tracing::info!(year, "Deleting existing ceremony");
        OscarRepo::delete_ceremony(pool, year)
            .await
            .context("Failed to delete existing ceremony")?;
    }

    let name = ceremony_name(year);
    let ceremony = OscarRepo::create_ceremony(
        pool,
        &CreateOscarCeremony {
            year,
            ceremony_name: Some(name.clone()),
            ceremony_date: None,
            is_complete: false,
        },
    )
    .await
    .context("Failed to create ceremony")?;
    tracing::info!(year, ceremony = %name, "Created ceremony");

    let mut summary = SetupSummary {
        ceremony_name: name,
        ..Default::default()
    };

    for (order, entry) in nominations.categories.iter().enumerate() {
        let category = match OscarRepo::create_category(
            pool,
            &CreateOscarCategory {
                ceremony_id: ceremony.id,
                name: entry.category.clone(),
                display_order: order as i32,
            },
        )
        .await
        {
            Ok(category) => category,
            Err(e) => {
                tracing::warn!(category = %entry.category, error = %e, "Failed to create category");
                continue;
            }
        };
        summary.categories += 1;
        tracing::info!(
            category = %entry.category,
            nominees = entry.nominees.len(),
            "Created category",
        );

        for (n_order, nominee) in entry.nominees.iter().enumerate() {
            let (celebrity_id, photo_url) = if nominee.is_person {
                link_person(pool, summaries, nominee).await
            } else {
                (None, film_poster(summaries, nominee, year).await)
            };
            tokio::time::sleep(delay).await;

            if celebrity_id.is_some() {
                summary.celebrities_linked += 1;
            }

            let input = CreateOscarNominee {
                category_id: category.id,
                celebrity_id,
                name: nominee.name.clone(),
                photo_url,
                work_title: Some(nominee.work_title.clone()).filter(|t| !t.is_empty()),
                display_order: n_order as i32,
            };
            match OscarRepo::create_nominee(pool, &input).await {
                Ok(_) => summary.nominees += 1,
                Err(e) => {
                    tracing::warn!(nominee = %nominee.name, error = %e, "Failed to create nominee");
                }
            }
        }
    }

    Ok(summary)
}

/// Find or create the nominee's celebrity, enriched with the Wikipedia
/// portrait and extract when available. Returns the celebrity id and the
/// photo to show on the nominee.
async fn link_person(
    pool: &DbPool,
    summaries: &WikipediaClient,
    nominee: &NomineeEntry,
) -> (Option<DbId>, Option<String>) {
    let (photo, bio) = match summaries.fetch_person_summary(&nominee.name).await {
        Ok(page) => (page.thumbnail_url().map(str::to_string), Some(page.extract)),
        Err(e) => {
            tracing::warn!(nominee = %nominee.name, error = %e, "No Wikipedia summary for person");
            (None, None)
        }
    };

    match CelebrityRepo::find_or_create(pool, &CreateCelebrity::new(&nominee.name, photo, bio)).await
    {
        Ok(celebrity) => (Some(celebrity.id), celebrity.photo_url),
        Err(e) => {
            tracing::warn!(nominee = %nominee.name, error = %e, "Could not link celebrity");
            (None, None)
        }
    }
}

/// Poster for a film nominee. Films compete in the ceremony held the year
/// after their release.
async fn film_poster(
    summaries: &WikipediaClient,
    nominee: &NomineeEntry,
    ceremony_year: i32,
) -> Option<String> {
    match summaries
        .fetch_film_summary_for_year(&nominee.name, ceremony_year - 1)
        .await
    {
        Ok(page) => page.thumbnail_url().map(str::to_string),
        Err(e) => {
            tracing::warn!(nominee = %nominee.name, error = %e, "No Wikipedia summary for film");
            None
        }
    }
}
