//! Repository for the `awards` table.

use egot_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::award::{Award, CreateAward};

/// Column list for `awards` queries.
const COLUMNS: &str = "\
    id, celebrity_id, type, year, work, category, \
    is_winner, ceremony_date, is_upcoming";

/// Provides access to award rows. Awards are always written together with
/// their owning celebrity, see [`crate::repositories::CelebrityRepo`].
pub struct AwardRepo;

impl AwardRepo {
    /// All awards owned by a celebrity, newest first.
    pub async fn list_by_celebrity(
        pool: &PgPool,
        celebrity_id: DbId,
    ) -> Result<Vec<Award>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM awards \
             WHERE celebrity_id = $1 \
             ORDER BY year DESC NULLS LAST, type, id"
        );
        sqlx::query_as::<_, Award>(&query)
            .bind(celebrity_id)
            .fetch_all(pool)
            .await
    }

    /// Insert several awards for one celebrity on an open connection.
    ///
    /// Callers pass a transaction so the awards commit or roll back together
    /// with the celebrity row.
    pub async fn insert_many(
        conn: &mut PgConnection,
        celebrity_id: DbId,
        awards: &[CreateAward],
    ) -> Result<Vec<Award>, sqlx::Error> {
        let query = format!(
            "INSERT INTO awards \
                (celebrity_id, type, year, work, category, is_winner, ceremony_date, is_upcoming) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {COLUMNS}"
        );

        let mut created = Vec::with_capacity(awards.len());
        for award in awards {
            let row = sqlx::query_as::<_, Award>(&query)
                .bind(celebrity_id)
                .bind(award.award_type.as_str())
                .bind(award.year)
                .bind(&award.work)
                .bind(&award.category)
                .bind(award.is_winner)
                .bind(award.ceremony_date)
                .bind(award.is_upcoming)
                .fetch_one(&mut *conn)
                .await?;
            created.push(row);
        }
        Ok(created)
    }
}
