//! Repository for the Oscar race tables: `oscar_ceremonies`,
//! `oscar_categories` and `oscar_nominees`.

use egot_core::types::DbId;
use sqlx::PgPool;

use crate::models::oscar::{
    CreateOscarCategory, CreateOscarCeremony, CreateOscarNominee, OscarCategory,
    OscarCategoryWithNominees, OscarCeremony, OscarCeremonyFull, OscarNominee,
};

const CEREMONY_COLUMNS: &str = "id, year, ceremony_name, ceremony_date, is_complete, created_at";

const CATEGORY_COLUMNS: &str = "id, ceremony_id, name, display_order, winner_announced";

const NOMINEE_COLUMNS: &str = "\
    id, category_id, celebrity_id, name, photo_url, work_title, \
    is_winner, display_order";

/// Provides CRUD and winner management for the Oscar race hierarchy.
pub struct OscarRepo;

impl OscarRepo {
    // -----------------------------------------------------------------------
    // Ceremonies
    // -----------------------------------------------------------------------

    pub async fn create_ceremony(
        pool: &PgPool,
        input: &CreateOscarCeremony,
    ) -> Result<OscarCeremony, sqlx::Error> {
        let query = format!(
            "INSERT INTO oscar_ceremonies (year, ceremony_name, ceremony_date, is_complete) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {CEREMONY_COLUMNS}"
        );
        sqlx::query_as::<_, OscarCeremony>(&query)
            .bind(input.year)
            .bind(&input.ceremony_name)
            .bind(input.ceremony_date)
            .bind(input.is_complete)
            .fetch_one(pool)
            .await
    }

    pub async fn find_ceremony_by_year(
        pool: &PgPool,
        year: i32,
    ) -> Result<Option<OscarCeremony>, sqlx::Error> {
        let query = format!("SELECT {CEREMONY_COLUMNS} FROM oscar_ceremonies WHERE year = $1");
        sqlx::query_as::<_, OscarCeremony>(&query)
            .bind(year)
            .fetch_optional(pool)
            .await
    }

    /// All tracked ceremony years, newest first.
    pub async fn list_years(pool: &PgPool) -> Result<Vec<i32>, sqlx::Error> {
        sqlx::query_scalar("SELECT year FROM oscar_ceremonies ORDER BY year DESC")
            .fetch_all(pool)
            .await
    }

    /// Delete a ceremony with its categories and nominees.
    ///
    /// Linked celebrities are left untouched. Returns `true` if a ceremony
    /// existed for `year`.
    pub async fn delete_ceremony(pool: &PgPool, year: i32) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM oscar_ceremonies WHERE year = $1")
            .bind(year)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Categories and nominees
    // -----------------------------------------------------------------------

    pub async fn create_category(
        pool: &PgPool,
        input: &CreateOscarCategory,
    ) -> Result<OscarCategory, sqlx::Error> {
        let query = format!(
            "INSERT INTO oscar_categories (ceremony_id, name, display_order) \
             VALUES ($1, $2, $3) \
             RETURNING {CATEGORY_COLUMNS}"
        );
        sqlx::query_as::<_, OscarCategory>(&query)
            .bind(input.ceremony_id)
            .bind(&input.name)
            .bind(input.display_order)
            .fetch_one(pool)
            .await
    }

    pub async fn list_categories(
        pool: &PgPool,
        ceremony_id: DbId,
    ) -> Result<Vec<OscarCategory>, sqlx::Error> {
        let query = format!(
            "SELECT {CATEGORY_COLUMNS} FROM oscar_categories \
             WHERE ceremony_id = $1 \
             ORDER BY display_order, id"
        );
        sqlx::query_as::<_, OscarCategory>(&query)
            .bind(ceremony_id)
            .fetch_all(pool)
            .await
    }

    pub async fn create_nominee(
        pool: &PgPool,
        input: &CreateOscarNominee,
    ) -> Result<OscarNominee, sqlx::Error> {
        let query = format!(
            "INSERT INTO oscar_nominees \
                (category_id, celebrity_id, name, photo_url, work_title, display_order) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {NOMINEE_COLUMNS}"
        );
        sqlx::query_as::<_, OscarNominee>(&query)
            .bind(input.category_id)
            .bind(input.celebrity_id)
            .bind(&input.name)
            .bind(&input.photo_url)
            .bind(&input.work_title)
            .bind(input.display_order)
            .fetch_one(pool)
            .await
    }

    pub async fn find_nominee_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<OscarNominee>, sqlx::Error> {
        let query = format!("SELECT {NOMINEE_COLUMNS} FROM oscar_nominees WHERE id = $1");
        sqlx::query_as::<_, OscarNominee>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Load a ceremony with every category and nominee, in display order.
    ///
    /// Nominees for all categories are fetched with one query and grouped
    /// in memory.
    pub async fn get_full_ceremony(
        pool: &PgPool,
        year: i32,
    ) -> Result<Option<OscarCeremonyFull>, sqlx::Error> {
        let Some(ceremony) = Self::find_ceremony_by_year(pool, year).await? else {
            return Ok(None);
        };

        let categories = Self::list_categories(pool, ceremony.id).await?;
        let category_ids: Vec<DbId> = categories.iter().map(|c| c.id).collect();

        let query = format!(
            "SELECT {NOMINEE_COLUMNS} FROM oscar_nominees \
             WHERE category_id = ANY($1) \
             ORDER BY category_id, display_order, id"
        );
        let nominees = sqlx::query_as::<_, OscarNominee>(&query)
            .bind(&category_ids)
            .fetch_all(pool)
            .await?;

        let categories = categories
            .into_iter()
            .map(|category| {
                let nominees = nominees
                    .iter()
                    .filter(|n| n.category_id == category.id)
                    .cloned()
                    .collect();
                OscarCategoryWithNominees { category, nominees }
            })
            .collect();

        Ok(Some(OscarCeremonyFull {
            ceremony,
            categories,
        }))
    }

    // -----------------------------------------------------------------------
    // Winner management
    // -----------------------------------------------------------------------

    /// Mark a nominee as the winner of its category.
    ///
    /// Runs in one transaction: the category row is locked, any previous
    /// winner is cleared, the nominee is set, and the category is flagged as
    /// announced. Returns `None` (and writes nothing) unless the nominee
    /// belongs to `category_id` and that category belongs to the ceremony
    /// held in `year`.
    pub async fn set_winner(
        pool: &PgPool,
        year: i32,
        category_id: DbId,
        nominee_id: DbId,
    ) -> Result<Option<OscarNominee>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let locked: Option<DbId> = sqlx::query_scalar(
            "SELECT c.id FROM oscar_categories c \
             JOIN oscar_ceremonies o ON o.id = c.ceremony_id \
             JOIN oscar_nominees n ON n.category_id = c.id \
             WHERE o.year = $1 AND c.id = $2 AND n.id = $3 \
             FOR UPDATE OF c",
        )
        .bind(year)
        .bind(category_id)
        .bind(nominee_id)
        .fetch_optional(&mut *tx)
        .await?;

        if locked.is_none() {
            tx.rollback().await?;
            return Ok(None);
        }

        sqlx::query(
            "UPDATE oscar_nominees SET is_winner = false \
             WHERE category_id = $1 AND is_winner = true AND id <> $2",
        )
        .bind(category_id)
        .bind(nominee_id)
        .execute(&mut *tx)
        .await?;

        let query = format!(
            "UPDATE oscar_nominees SET is_winner = true \
             WHERE id = $1 \
             RETURNING {NOMINEE_COLUMNS}"
        );
        let winner = sqlx::query_as::<_, OscarNominee>(&query)
            .bind(nominee_id)
            .fetch_one(&mut *tx)
            .await?;

        sqlx::query("UPDATE oscar_categories SET winner_announced = true WHERE id = $1")
            .bind(category_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::info!(year, category_id, nominee_id, "Oscar winner set");
        Ok(Some(winner))
    }
}
