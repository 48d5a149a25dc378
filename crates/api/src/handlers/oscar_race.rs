//! Handlers for the Oscar race: ceremony years, the full nominee board, and
//! winner announcements.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use egot_core::ceremony::{is_valid_ceremony_year, FIRST_CEREMONY_YEAR, LAST_CEREMONY_YEAR};
use egot_core::error::CoreError;
use egot_core::types::DbId;
use egot_db::repositories::OscarRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

fn validate_year(year: i32) -> Result<(), AppError> {
    if is_valid_ceremony_year(year) {
        Ok(())
    } else {
        Err(AppError::BadRequest(format!(
            "Year must be between {FIRST_CEREMONY_YEAR} and {LAST_CEREMONY_YEAR}, got {year}"
        )))
    }
}

/// GET /api/oscar-race/years
pub async fn list_years(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let years = OscarRepo::list_years(&state.pool).await?;
    Ok(Json(DataResponse { data: years }))
}

/// GET /api/oscar-race/{year}
///
/// The ceremony with its categories and nominees, both in display order.
pub async fn get_ceremony(
    State(state): State<AppState>,
    Path(year): Path<i32>,
) -> AppResult<impl IntoResponse> {
    validate_year(year)?;

    let ceremony = OscarRepo::get_full_ceremony(&state.pool, year)
        .await?
        .ok_or_else(|| CoreError::NotFound {
            entity: "Oscar ceremony",
            key: format!("for {year}"),
        })?;

    Ok(Json(DataResponse { data: ceremony }))
}

/// PUT /api/oscar-race/{year}/category/{category_id}/winner/{nominee_id}
///
/// Mark a nominee as the category winner, replacing any previous winner.
pub async fn set_winner(
    State(state): State<AppState>,
    Path((year, category_id, nominee_id)): Path<(i32, DbId, DbId)>,
) -> AppResult<impl IntoResponse> {
    validate_year(year)?;

    let winner = OscarRepo::set_winner(&state.pool, year, category_id, nominee_id)
        .await?
        .ok_or_else(|| CoreError::NotFound {
            entity: "Nominee",
            key: format!("{nominee_id} in category {category_id} of the {year} ceremony"),
        })?;

    Ok(Json(DataResponse { data: winner }))
}
