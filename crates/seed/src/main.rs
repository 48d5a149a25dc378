//! Batch workflows that seed the EGOT tracker database.
//!
//! Both subcommands run strictly one item at a time with a pause between
//! external calls.

mod cli;
mod data;
mod oscar_race;
mod populate;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "egot_seed=info,egot_resolver=info,egot_wiki=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    cli::Cli::parse().run().await
}
