pub mod celebrity;
pub mod health;
pub mod oscar_race;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /celebrity/search                                     resolve by name
/// /celebrity/autocomplete                               local name search
/// /celebrity/close-to-egot                              three of four
/// /celebrity/egot-winners                               all four
/// /celebrity/no-awards                                  stored without awards
/// /celebrity/{id}                                       by id
///
/// /oscar-race/years                                     ceremony years
/// /oscar-race/{year}                                    full ceremony
/// /oscar-race/{year}/category/{cid}/winner/{nid}        set winner (PUT)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/celebrity", celebrity::router())
        .nest("/oscar-race", oscar_race::router())
}
