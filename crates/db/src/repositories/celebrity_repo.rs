//! Repository for the `celebrities` table: lookups, inserts and the EGOT
//! aggregate listings.

use egot_core::egot::{
    clamp_limit, CLOSE_TO_EGOT_WINS, DEFAULT_LIST_LIMIT, DEFAULT_SEARCH_LIMIT, EGOT_WINS,
};
use egot_core::types::DbId;
use sqlx::PgPool;

use crate::models::award::CreateAward;
use crate::models::celebrity::{
    Celebrity, CelebrityEgotProgress, CelebrityWithAwards, CreateCelebrity, CreateOutcome,
};
use crate::repositories::AwardRepo;

/// Column list for `celebrities` queries.
const COLUMNS: &str = "id, name, slug, photo_url, summary, last_updated";

/// Column list for `celebrities` aliased as `c`.
const C_COLUMNS: &str = "c.id, c.name, c.slug, c.photo_url, c.summary, c.last_updated";

/// Provides lookups, inserts and aggregate queries for celebrities.
pub struct CelebrityRepo;

impl CelebrityRepo {
    /// Case-insensitive exact match on name (surrounding whitespace ignored).
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Celebrity>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM celebrities WHERE lower(name) = lower($1)");
        sqlx::query_as::<_, Celebrity>(&query)
            .bind(name.trim())
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Celebrity>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM celebrities WHERE id = $1");
        sqlx::query_as::<_, Celebrity>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Case-insensitive substring match on name, ordered by name.
    pub async fn search(
        pool: &PgPool,
        query: &str,
        limit: Option<i64>,
    ) -> Result<Vec<Celebrity>, sqlx::Error> {
        let limit = clamp_limit(limit, DEFAULT_SEARCH_LIMIT);
        let pattern = format!("%{}%", escape_like(query.trim()));

        let sql = format!(
            "SELECT {COLUMNS} FROM celebrities \
             WHERE lower(name) LIKE lower($1) \
             ORDER BY name \
             LIMIT $2"
        );
        sqlx::query_as::<_, Celebrity>(&sql)
            .bind(&pattern)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Celebrities with exactly three distinct winning award types.
    pub async fn find_close_to_egot(
        pool: &PgPool,
        limit: Option<i64>,
    ) -> Result<Vec<CelebrityEgotProgress>, sqlx::Error> {
        Self::find_by_win_count(pool, CLOSE_TO_EGOT_WINS, limit).await
    }

    /// Celebrities with all four winning award types.
    pub async fn find_egot_winners(
        pool: &PgPool,
        limit: Option<i64>,
    ) -> Result<Vec<CelebrityEgotProgress>, sqlx::Error> {
        Self::find_by_win_count(pool, EGOT_WINS, limit).await
    }

    /// Celebrities that own no award rows, least recently updated first.
    pub async fn find_no_awards(
        pool: &PgPool,
        limit: Option<i64>,
    ) -> Result<Vec<Celebrity>, sqlx::Error> {
        let limit = clamp_limit(limit, DEFAULT_LIST_LIMIT);
        let query = format!(
            "SELECT {C_COLUMNS} FROM celebrities c \
             WHERE NOT EXISTS (SELECT 1 FROM awards a WHERE a.celebrity_id = c.id) \
             ORDER BY c.last_updated ASC, c.name \
             LIMIT $1"
        );
        sqlx::query_as::<_, Celebrity>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Insert a celebrity without awards.
    pub async fn create(pool: &PgPool, input: &CreateCelebrity) -> Result<CreateOutcome, sqlx::Error> {
        Self::create_with_awards(pool, input, &[]).await
    }

    /// Insert a celebrity and its awards in one transaction.
    ///
    /// Names are unique on `lower(name)`. If another writer already stored
    /// the same name, nothing is written and the stored row is returned as
    /// [`CreateOutcome::Existing`].
    pub async fn create_with_awards(
        pool: &PgPool,
        input: &CreateCelebrity,
        awards: &[CreateAward],
    ) -> Result<CreateOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO celebrities (name, slug, photo_url, summary) \
             VALUES ($1, $2, $3, $4) \
             ON CONFLICT ((lower(name))) DO NOTHING \
             RETURNING {COLUMNS}"
        );
        let inserted = sqlx::query_as::<_, Celebrity>(&query)
            .bind(&input.name)
            .bind(&input.slug)
            .bind(&input.photo_url)
            .bind(&input.summary)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(celebrity) = inserted else {
            tx.rollback().await?;
            tracing::debug!(name = %input.name, "Celebrity already stored, re-reading");
            let existing = Self::find_by_name(pool, &input.name)
                .await?
                .ok_or(sqlx::Error::RowNotFound)?;
            return Ok(CreateOutcome::Existing(existing));
        };

        let awards = AwardRepo::insert_many(&mut *tx, celebrity.id, awards).await?;
        tx.commit().await?;

        Ok(CreateOutcome::Created(CelebrityWithAwards { celebrity, awards }))
    }

    /// Return the celebrity stored under `input.name`, inserting it if absent.
    pub async fn find_or_create(
        pool: &PgPool,
        input: &CreateCelebrity,
    ) -> Result<Celebrity, sqlx::Error> {
        if let Some(existing) = Self::find_by_name(pool, &input.name).await? {
            return Ok(existing);
        }
        match Self::create(pool, input).await? {
            CreateOutcome::Created(created) => Ok(created.celebrity),
            CreateOutcome::Existing(existing) => Ok(existing),
        }
    }

    async fn find_by_win_count(
        pool: &PgPool,
        wins: i64,
        limit: Option<i64>,
    ) -> Result<Vec<CelebrityEgotProgress>, sqlx::Error> {
        let limit = clamp_limit(limit, DEFAULT_LIST_LIMIT);
        let query = format!(
            "SELECT {C_COLUMNS}, \
                    COUNT(DISTINCT a.type) AS egot_win_count, \
                    ARRAY_AGG(DISTINCT a.type ORDER BY a.type) AS won_awards \
             FROM celebrities c \
             JOIN awards a ON a.celebrity_id = c.id \
             WHERE a.is_winner = true AND a.is_upcoming = false \
             GROUP BY c.id \
             HAVING COUNT(DISTINCT a.type) = $1 \
             ORDER BY c.name \
             LIMIT $2"
        );
        sqlx::query_as::<_, CelebrityEgotProgress>(&query)
            .bind(wins)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}

/// Escape `LIKE` wildcards so user input matches literally.
fn escape_like(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
