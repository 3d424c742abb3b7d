use anyhow::Context;
use chrono::Utc;
use repository::{Repository, Store};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod seed;

use config::Config;
use seed::SeedFile;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = util::load_config::<Config>("Config.toml")?;
    let secrets = util::load_env()?;
    let database_url = util::database_url(&secrets)?;

    let store = Store::new(database_url, config.database.into())
        .context("failed to build store")?;
    let repository = Repository::new(&store)
        .await
        .context("failed to connect to database")?;

    info!(task = "seed", file = config.seed.file);
    let seed_path = util::workspace_dir()?.join(&config.seed.file);
    let seed_file = util::read_toml::<SeedFile>(&seed_path)?;

    let summary = seed::run(&repository, seed_file).await;
    info!(
        task = "seed",
        events_created = summary.events_created,
        events_skipped = summary.events_skipped,
        events_failed = summary.events_failed,
        bookings_created = summary.bookings_created,
        bookings_failed = summary.bookings_failed
    );

    seed::report_upcoming(&repository, Utc::now().date_naive())
        .await
        .context("failed to list upcoming events")?;

    store.reset().await;

    Ok(())
}
