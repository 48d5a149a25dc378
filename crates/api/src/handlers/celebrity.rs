//! Handlers for celebrity lookups and the EGOT listings.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use egot_core::error::CoreError;
use egot_core::types::DbId;

use crate::error::AppResult;
use crate::query::{LimitParams, SearchParams};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/celebrity/search?q=
///
/// Resolve a celebrity by name, fetching it from the knowledge base on a
/// store miss.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<impl IntoResponse> {
    let name = params
        .query()
        .ok_or_else(|| CoreError::Validation("Query parameter 'q' is required".into()))?;

    let celebrity = state.celebrities.resolve_by_name(name).await?;

    Ok(Json(DataResponse { data: celebrity }))
}

/// GET /api/celebrity/autocomplete?q=
///
/// Stored names containing `q`. Never calls out; a blank query returns an
/// empty list.
pub async fn autocomplete(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<impl IntoResponse> {
    let matches = state
        .celebrities
        .autocomplete(params.query().unwrap_or_default())
        .await?;

    Ok(Json(DataResponse { data: matches }))
}

/// GET /api/celebrity/close-to-egot?limit=
pub async fn close_to_egot(
    State(state): State<AppState>,
    Query(params): Query<LimitParams>,
) -> AppResult<impl IntoResponse> {
    let celebrities = state.celebrities.close_to_egot(params.limit()).await?;
    Ok(Json(DataResponse { data: celebrities }))
}

/// GET /api/celebrity/egot-winners?limit=
pub async fn egot_winners(
    State(state): State<AppState>,
    Query(params): Query<LimitParams>,
) -> AppResult<impl IntoResponse> {
    let celebrities = state.celebrities.egot_winners(params.limit()).await?;
    Ok(Json(DataResponse { data: celebrities }))
}

/// GET /api/celebrity/no-awards?limit=
///
/// Celebrities with no award rows, least recently updated first.
pub async fn no_awards(
    State(state): State<AppState>,
    Query(params): Query<LimitParams>,
) -> AppResult<impl IntoResponse> {
    let celebrities = state.celebrities.no_awards(params.limit()).await?;
    Ok(Json(DataResponse { data: celebrities }))
}

/// GET /api/celebrity/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let celebrity = state.celebrities.find_by_id(id).await?;
    Ok(Json(DataResponse { data: celebrity }))
}
