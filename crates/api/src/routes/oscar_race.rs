use axum::routing::{get, put};
use axum::Router;

use crate::handlers::oscar_race;
use crate::state::AppState;

/// Oscar race routes mounted at `/oscar-race`.
///
/// ```text
/// GET /years                                                -> list_years
/// GET /{year}                                               -> get_ceremony
/// PUT /{year}/category/{category_id}/winner/{nominee_id}    -> set_winner
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/years", get(oscar_race::list_years))
        .route("/{year}", get(oscar_race::get_ceremony))
        .route(
            "/{year}/category/{category_id}/winner/{nominee_id}",
            put(oscar_race::set_winner),
        )
}
