use std::net::SocketAddr;
use std::sync::Arc;

use egot_db::DbPool;
use egot_resolver::{CelebrityService, ResolverConfig};
use egot_wiki::{WikiConfig, WikidataClient};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use egot_api::config::ServerConfig;
use egot_api::router::build_app_router;
use egot_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ServerConfig::from_env();
    let resolver_config = ResolverConfig::from_env();
    if let Err(msg) = config.check_request_timeout(resolver_config.resolve_timeout) {
        panic!("{msg}");
    }
    tracing::info!(
        host = %config.host,
        port = config.port,
        resolve_timeout_secs = resolver_config.resolve_timeout.as_secs(),
        "Loaded server configuration",
    );

    let pool = connect_database(config.db_max_connections).await;

    let wikidata =
        WikidataClient::from_config(&WikiConfig::from_env()).expect("Failed to build HTTP client");
    let state = AppState {
        celebrities: CelebrityService::new(pool.clone(), Arc::new(wikidata), &resolver_config),
        pool,
        config: Arc::new(config.clone()),
    };
    let app = build_app_router(state, &config);

    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");
    tracing::info!(%addr, "EGOT tracker API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        "egot_api=debug,egot_resolver=debug,egot_wiki=info,tower_http=debug".into()
    });
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Connect, ping and migrate. Any failure aborts startup.
async fn connect_database(max_connections: u32) -> DbPool {
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = egot_db::create_pool(&database_url, max_connections)
        .await
        .expect("Failed to connect to database");
    egot_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    egot_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!(max_connections, "Database ready, migrations applied");
    pool
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
