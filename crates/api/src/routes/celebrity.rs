use axum::routing::get;
use axum::Router;

use crate::handlers::celebrity;
use crate::state::AppState;

/// Celebrity routes mounted at `/celebrity`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/search", get(celebrity::search))
        .route("/autocomplete", get(celebrity::autocomplete))
        .route("/close-to-egot", get(celebrity::close_to_egot))
        .route("/egot-winners", get(celebrity::egot_winners))
        .route("/no-awards", get(celebrity::no_awards))
        .route("/{id}", get(celebrity::get_by_id))
}
