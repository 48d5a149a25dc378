use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use egot_api::config::ServerConfig;
use egot_api::router::build_app_router;
use egot_api::state::AppState;
use egot_core::award::AwardType;
use egot_db::models::award::CreateAward;
use egot_db::models::celebrity::CreateCelebrity;
use egot_resolver::{CelebrityService, CelebritySource, ResolverConfig};
use egot_wiki::{FetchedCelebrity, WikiError};
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 75,
        db_max_connections: 5,
    }
}

/// How long the stub takes to answer for `"Slow"`.
pub const SLOW_LOOKUP: Duration = Duration::from_secs(3);

/// In-memory knowledge base keyed by lowercase query.
///
/// `"Offline"` answers with a 503 so tests can exercise upstream failures.
/// `"Slow"` sleeps for [`SLOW_LOOKUP`] before answering.
pub struct StubSource {
    people: HashMap<String, FetchedCelebrity>,
}

impl StubSource {
    pub fn new() -> Self {
        let mut people = HashMap::new();
        people.insert(
            "meryl streep".to_string(),
            FetchedCelebrity {
                wikidata_id: "Q873".into(),
                celebrity: CreateCelebrity::new(
                    "Meryl Streep",
                    Some("http://commons/streep.jpg".into()),
                    Some("Meryl Streep is an American actress.".into()),
                ),
                awards: vec![
                    CreateAward::win(
                        AwardType::Oscar,
                        Some(1983),
                        "Sophie's Choice",
                        "Academy Award for Best Actress",
                    ),
                    CreateAward::win(
                        AwardType::Emmy,
                        Some(1978),
                        "Holocaust",
                        "Primetime Emmy Award for Outstanding Lead Actress",
                    ),
                ],
            },
        );
        Self { people }
    }
}

#[async_trait]
impl CelebritySource for StubSource {
    async fn fetch_celebrity(&self, name: &str) -> Result<FetchedCelebrity, WikiError> {
        if name.eq_ignore_ascii_case("slow") {
            tokio::time::sleep(SLOW_LOOKUP).await;
        }
        if name.eq_ignore_ascii_case("offline") {
            return Err(WikiError::Status {
                service: "wikidata search",
                status: 503,
                body: String::new(),
            });
        }
        self.people
            .get(&name.to_lowercase())
            .cloned()
            .ok_or_else(|| WikiError::NotFound {
                what: "knowledge-base entity",
                query: name.to_string(),
            })
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool and the stub knowledge base.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_config(pool, test_config(), ResolverConfig::default())
}

/// Like [`build_test_app`], with explicit server and resolver settings.
pub fn build_test_app_with_config(
    pool: PgPool,
    config: ServerConfig,
    resolver: ResolverConfig,
) -> Router {
    let celebrities = CelebrityService::new(pool.clone(), Arc::new(StubSource::new()), &resolver);

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        celebrities,
    };

    build_app_router(state, &config)
}

pub async fn send(app: Router, method: Method, uri: &str) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri).await
}

pub async fn put(app: Router, uri: &str) -> Response {
    send(app, Method::PUT, uri).await
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
