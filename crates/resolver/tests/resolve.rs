//! Resolution service tests against a real database and a scripted source.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use assert_matches::assert_matches;
use async_trait::async_trait;
use egot_core::award::AwardType;
use egot_db::models::award::CreateAward;
use egot_db::models::celebrity::CreateCelebrity;
use egot_resolver::{CelebrityService, CelebritySource, ResolveError, ResolverConfig};
use egot_wiki::{FetchedCelebrity, WikiError};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Scripted source
// ---------------------------------------------------------------------------

#[derive(Clone)]
enum Script {
    Found(FetchedCelebrity),
    Missing,
    Unavailable,
}

struct FakeSource {
    scripts: HashMap<String, Script>,
    delay: Duration,
    calls: AtomicUsize,
}

impl FakeSource {
    fn new() -> Self {
        Self {
            scripts: HashMap::new(),
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
        }
    }

    fn with(mut self, query: &str, script: Script) -> Self {
        self.scripts.insert(query.to_lowercase(), script);
        self
    }

    fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CelebritySource for FakeSource {
    async fn fetch_celebrity(&self, name: &str) -> Result<FetchedCelebrity, WikiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        match self.scripts.get(&name.to_lowercase()) {
            Some(Script::Found(fetched)) => Ok(fetched.clone()),
            Some(Script::Unavailable) => Err(WikiError::Status {
                service: "wikidata search",
                status: 503,
                body: "maintenance".into(),
            }),
            Some(Script::Missing) | None => Err(WikiError::NotFound {
                what: "knowledge-base entity",
                query: name.to_string(),
            }),
        }
    }
}

fn fetched(name: &str, awards: Vec<CreateAward>) -> Script {
    Script::Found(FetchedCelebrity {
        wikidata_id: "Q873".into(),
        celebrity: CreateCelebrity::new(
            name,
            Some("http://commons/photo.jpg".into()),
            Some(format!("{name} is an actress.")),
        ),
        awards,
    })
}

fn streep_awards() -> Vec<CreateAward> {
    vec![
        CreateAward::win(
            AwardType::Oscar,
            Some(1980),
            "Kramer vs. Kramer",
            "Academy Award for Best Supporting Actress",
        ),
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
    ]
}

fn service(pool: &PgPool, source: Arc<FakeSource>) -> CelebrityService {
    CelebrityService::new(pool.clone(), source, &ResolverConfig::default())
}

async fn celebrity_count(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM celebrities")
        .fetch_one(pool)
        .await
        .unwrap()
}

// ---------------------------------------------------------------------------
// Cache-aside
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_miss_fetches_and_persists_then_hit_serves_locally(pool: PgPool) {
    let source = Arc::new(FakeSource::new().with("Meryl Streep", fetched("Meryl Streep", streep_awards())));
    let service = service(&pool, Arc::clone(&source));

    let first = service.resolve_by_name("Meryl Streep").await.unwrap();
    assert_eq!(first.celebrity.slug, "meryl-streep");
    assert_eq!(first.awards.len(), 3);
    assert_eq!(source.calls(), 1);

    let second = service.resolve_by_name("meryl streep").await.unwrap();
    assert_eq!(second.celebrity.id, first.celebrity.id);
    assert_eq!(second.awards.len(), first.awards.len());
    assert_eq!(source.calls(), 1, "a hit must not call the source");
    assert_eq!(celebrity_count(&pool).await, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_person_without_egot_awards_is_stored(pool: PgPool) {
    let source = Arc::new(FakeSource::new().with("Tom Cruise", fetched("Tom Cruise", Vec::new())));
    let service = service(&pool, Arc::clone(&source));

    let first = service.resolve_by_name("Tom Cruise").await.unwrap();
    assert!(first.awards.is_empty());

    service.resolve_by_name("Tom Cruise").await.unwrap();
    assert_eq!(source.calls(), 1);

    let no_awards = service.no_awards(None).await.unwrap();
    assert_eq!(no_awards.len(), 1);
    assert_eq!(no_awards[0].id, first.celebrity.id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_canonical_name_already_stored_is_reused(pool: PgPool) {
    // "Streep" resolves to the canonical "Meryl Streep", which is stored.
    let source = Arc::new(
        FakeSource::new()
            .with("Meryl Streep", fetched("Meryl Streep", streep_awards()))
            .with("Streep", fetched("Meryl Streep", streep_awards())),
    );
    let service = service(&pool, Arc::clone(&source));

    let canonical = service.resolve_by_name("Meryl Streep").await.unwrap();
    let alias = service.resolve_by_name("Streep").await.unwrap();

    assert_eq!(alias.celebrity.id, canonical.celebrity.id);
    assert_eq!(alias.awards.len(), 3, "awards must not be inserted twice");
    assert_eq!(celebrity_count(&pool).await, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_concurrent_resolves_store_one_row(pool: PgPool) {
    let source = Arc::new(
        FakeSource::new()
            .with("Viola Davis", fetched("Viola Davis", streep_awards()))
            .with_delay(Duration::from_millis(50)),
    );
    let service = service(&pool, Arc::clone(&source));

    let (a, b) = tokio::join!(
        service.resolve_by_name("Viola Davis"),
        service.resolve_by_name("Viola Davis"),
    );
    let (a, b) = (a.unwrap(), b.unwrap());

    assert_eq!(a.celebrity.id, b.celebrity.id);
    assert_eq!(a.awards.len(), 3);
    assert_eq!(b.awards.len(), 3);
    assert_eq!(celebrity_count(&pool).await, 1);

    let awards: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM awards")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(awards, 3);
}

// ---------------------------------------------------------------------------
// Failures
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_name_is_not_found(pool: PgPool) {
    let source = Arc::new(FakeSource::new().with("Nobody", Script::Missing));
    let service = service(&pool, source);

    let err = service.resolve_by_name("Nobody").await.unwrap_err();
    assert_matches!(err, ResolveError::NotFound(_));
    assert_eq!(celebrity_count(&pool).await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_upstream_failure_is_classified(pool: PgPool) {
    let source = Arc::new(FakeSource::new().with("Cher", Script::Unavailable));
    let service = service(&pool, source);

    let err = service.resolve_by_name("Cher").await.unwrap_err();
    assert_matches!(err, ResolveError::Upstream(WikiError::Status { status: 503, .. }));
    assert!(err.is_upstream());
    assert_eq!(celebrity_count(&pool).await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_deadline_aborts_whole_chain(pool: PgPool) {
    let source = Arc::new(
        FakeSource::new()
            .with("Slow Poke", fetched("Slow Poke", Vec::new()))
            .with_delay(Duration::from_millis(500)),
    );
    let config = ResolverConfig {
        resolve_timeout: Duration::from_millis(50),
    };
    let service = CelebrityService::new(pool.clone(), source, &config);

    let err = service.resolve_by_name("Slow Poke").await.unwrap_err();
    assert_matches!(err, ResolveError::DeadlineExceeded { ref name, .. } if name == "Slow Poke");
    assert_eq!(celebrity_count(&pool).await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_blank_name_never_calls_source(pool: PgPool) {
    let source = Arc::new(FakeSource::new());
    let service = service(&pool, Arc::clone(&source));

    assert_matches!(
        service.resolve_by_name("   ").await,
        Err(ResolveError::NotFound(_))
    );
    assert_eq!(source.calls(), 0);
}

// ---------------------------------------------------------------------------
// Local reads
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_find_by_id_and_autocomplete(pool: PgPool) {
    let source = Arc::new(FakeSource::new().with("Meryl Streep", fetched("Meryl Streep", streep_awards())));
    let service = service(&pool, Arc::clone(&source));

    let stored = service.resolve_by_name("Meryl Streep").await.unwrap();

    let by_id = service.find_by_id(stored.celebrity.id).await.unwrap();
    assert_eq!(by_id.celebrity.name, "Meryl Streep");
    assert_eq!(by_id.awards.len(), 3);

    assert_matches!(
        service.find_by_id(stored.celebrity.id + 1000).await,
        Err(ResolveError::NotFound(_))
    );

    let hits = service.autocomplete("stre").await.unwrap();
    assert_eq!(hits.len(), 1);
    assert!(service.autocomplete("  ").await.unwrap().is_empty());
    assert!(service.autocomplete("zzz").await.unwrap().is_empty());
    assert_eq!(source.calls(), 1, "local reads must not call the source");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_aggregates_through_service(pool: PgPool) {
    let awards = vec![
        CreateAward::win(AwardType::Emmy, Some(2015), "", "Emmy"),
        CreateAward::win(AwardType::Emmy, Some(2016), "", "Emmy"),
        CreateAward::win(AwardType::Grammy, Some(2023), "", "Grammy"),
        CreateAward::win(AwardType::Oscar, Some(2017), "Fences", "Academy Award"),
    ];
    let source = Arc::new(FakeSource::new().with("Viola Davis", fetched("Viola Davis", awards)));
    let service = service(&pool, source);

    service.resolve_by_name("Viola Davis").await.unwrap();

    let close = service.close_to_egot(None).await.unwrap();
    assert_eq!(close.len(), 1);
    assert_eq!(close[0].egot_win_count, 3);
    assert_eq!(close[0].won_awards, vec!["Emmy", "Grammy", "Oscar"]);
    assert!(service.egot_winners(None).await.unwrap().is_empty());
}
