//! HTTP-level tests for the Oscar race endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get, put};
use egot_core::ceremony::ceremony_name;
use egot_db::models::oscar::{CreateOscarCategory, CreateOscarCeremony, CreateOscarNominee};
use egot_db::repositories::OscarRepo;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Seed a ceremony with two categories of two nominees each.
/// Returns `(category_ids, nominee_ids_per_category)`.
async fn seed(pool: &PgPool, year: i32) -> (Vec<i64>, Vec<Vec<i64>>) {
    let ceremony = OscarRepo::create_ceremony(
        pool,
        &CreateOscarCeremony {
            year,
            ceremony_name: Some(ceremony_name(year)),
            ceremony_date: None,
            is_complete: false,
        },
    )
    .await
    .unwrap();

    let mut category_ids = Vec::new();
    let mut nominee_ids = Vec::new();
    for (order, (category, nominees)) in [
        ("Best Picture", ["Anora", "Conclave"]),
        ("Best Actress", ["Mikey Madison", "Demi Moore"]),
    ]
    .into_iter()
    .enumerate()
    {
        let category = OscarRepo::create_category(
            pool,
            &CreateOscarCategory {
                ceremony_id: ceremony.id,
                name: category.into(),
                display_order: order as i32,
            },
        )
        .await
        .unwrap();
        category_ids.push(category.id);

        let mut ids = Vec::new();
        for (n_order, name) in nominees.into_iter().enumerate() {
            let nominee = OscarRepo::create_nominee(
                pool,
                &CreateOscarNominee {
                    category_id: category.id,
                    celebrity_id: None,
                    name: name.into(),
                    photo_url: None,
                    work_title: None,
                    display_order: n_order as i32,
                },
            )
            .await
            .unwrap();
            ids.push(nominee.id);
        }
        nominee_ids.push(ids);
    }

    (category_ids, nominee_ids)
}

// ---------------------------------------------------------------------------
// Reads
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_years_newest_first(pool: PgPool) {
    seed(&pool, 2024).await;
    seed(&pool, 2025).await;

    let response = get(build_test_app(pool), "/api/oscar-race/years").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"], serde_json::json!([2025, 2024]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_ceremony(pool: PgPool) {
    seed(&pool, 2025).await;

    let response = get(build_test_app(pool), "/api/oscar-race/2025").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = &json["data"];
    assert_eq!(data["year"], 2025);
    assert_eq!(data["ceremony_name"], "97th Academy Awards");
    assert_eq!(data["categories"][0]["name"], "Best Picture");
    assert_eq!(data["categories"][1]["name"], "Best Actress");
    assert_eq!(data["categories"][1]["nominees"][0]["name"], "Mikey Madison");
    assert_eq!(data["categories"][1]["winner_announced"], false);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_year_out_of_range_is_rejected(pool: PgPool) {
    for uri in ["/api/oscar-race/1928", "/api/oscar-race/2101"] {
        let response = get(build_test_app(pool.clone()), uri).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_missing_ceremony_returns_404(pool: PgPool) {
    let response = get(build_test_app(pool), "/api/oscar-race/1999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Oscar ceremony for 1999 not found");
}

// ---------------------------------------------------------------------------
// Winners
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_set_winner_swaps_previous_winner(pool: PgPool) {
    let (categories, nominees) = seed(&pool, 2025).await;
    let (actress, madison, moore) = (categories[1], nominees[1][0], nominees[1][1]);

    let uri = format!("/api/oscar-race/2025/category/{actress}/winner/{moore}");
    let response = put(build_test_app(pool.clone()), &uri).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["id"], moore);

    let uri = format!("/api/oscar-race/2025/category/{actress}/winner/{madison}");
    let response = put(build_test_app(pool.clone()), &uri).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["id"], madison);
    assert_eq!(json["data"]["is_winner"], true);

    let json = body_json(get(build_test_app(pool), "/api/oscar-race/2025").await).await;
    let category = &json["data"]["categories"][1];
    assert_eq!(category["winner_announced"], true);
    assert_eq!(category["nominees"][0]["is_winner"], true);
    assert_eq!(category["nominees"][1]["is_winner"], false);
    assert_eq!(json["data"]["categories"][0]["winner_announced"], false);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_set_winner_outside_category_returns_404(pool: PgPool) {
    let (categories, nominees) = seed(&pool, 2025).await;
    let (picture, madison) = (categories[0], nominees[1][0]);

    let uri = format!("/api/oscar-race/2025/category/{picture}/winner/{madison}");
    let response = put(build_test_app(pool.clone()), &uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let uri = format!("/api/oscar-race/2024/category/{}/winner/{madison}", categories[1]);
    let response = put(build_test_app(pool.clone()), &uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let nominee = OscarRepo::find_nominee_by_id(&pool, madison).await.unwrap().unwrap();
    assert!(!nominee.is_winner);
}
