use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use egot_db::DbPool;
use egot_resolver::{CelebrityService, ResolverConfig};
use egot_wiki::{WikiConfig, WikidataClient, WikipediaClient};

use crate::{data, oscar_race, populate};

#[derive(Debug, Parser)]
#[command(name = "egot-seed", about = "Batch seeding for the EGOT tracker")]
pub struct Cli {
    /// Postgres connection string.
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    #[arg(long, env = "DB_MAX_CONNECTIONS", default_value_t = egot_db::DEFAULT_MAX_CONNECTIONS)]
    db_max_connections: u32,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Resolve every name on the roster through the knowledge base
    Populate(PopulateArgs),
    /// Create an Oscar ceremony with its categories and nominees
    OscarRace(OscarRaceArgs),
}

#[derive(Debug, Args, Clone)]
struct PopulateArgs {
    /// Roster file, one name per line. Defaults to the bundled roster.
    #[arg(long)]
    roster: Option<PathBuf>,
    /// Pause between lookups, in milliseconds.
    #[arg(long, default_value_t = 1500)]
    delay_ms: u64,
    /// Deadline for a single lookup, in seconds.
    #[arg(long, default_value_t = 60)]
    timeout_secs: u64,
}

#[derive(Debug, Args, Clone)]
struct OscarRaceArgs {
    /// Ceremony year.
    #[arg(long, default_value_t = 2025)]
    year: i32,
    /// Delete the existing ceremony for this year first.
    #[arg(long)]
    reset: bool,
    /// Pause after each Wikipedia lookup, in milliseconds.
    #[arg(long, default_value_t = 200)]
    delay_ms: u64,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let pool = egot_db::create_pool(&self.database_url, self.db_max_connections)
            .await
            .context("Failed to connect to database")?;
        egot_db::run_migrations(&pool)
            .await
            .context("Failed to run database migrations")?;
        tracing::info!("Database ready");

        let wiki_config = WikiConfig::from_env();

        match self.command {
            Command::Populate(args) => run_populate(pool, &wiki_config, args).await,
            Command::OscarRace(args) => run_oscar_race(pool, &wiki_config, args).await,
        }
    }
}

async fn run_populate(pool: DbPool, wiki: &WikiConfig, args: PopulateArgs) -> anyhow::Result<()> {
    let roster = match &args.roster {
        Some(path) => data::load_roster(path)?,
        None => data::bundled_roster(),
    };

    let source = WikidataClient::from_config(wiki).context("Failed to build HTTP client")?;
    let resolver = ResolverConfig {
        resolve_timeout: Duration::from_secs(args.timeout_secs),
    };
    let service = CelebrityService::new(pool.clone(), Arc::new(source), &resolver);

    let summary = populate::run(
        &pool,
        &service,
        &roster,
        Duration::from_millis(args.delay_ms),
    )
    .await?;

    tracing::info!(
        success = summary.success,
        skipped = summary.skipped,
        failed = summary.failed,
        total = summary.total(),
        "Population complete",
    );
    Ok(())
}

async fn run_oscar_race(
    pool: DbPool,
    wiki: &WikiConfig,
    args: OscarRaceArgs,
) -> anyhow::Result<()> {
    let nominations = data::bundled_nominations(args.year)?;
    let summaries = WikipediaClient::from_config(wiki).context("Failed to build HTTP client")?;

    let summary = oscar_race::run(
        &pool,
        &summaries,
        &nominations,
        args.reset,
        Duration::from_millis(args.delay_ms),
    )
    .await?;

    tracing::info!(
        year = nominations.year,
        ceremony = %summary.ceremony_name,
        categories = summary.categories,
        nominees = summary.nominees,
        celebrities_linked = summary.celebrities_linked,
        "Oscar race setup complete",
    );
    Ok(())
}
