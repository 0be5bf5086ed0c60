//! Core application

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::core::cli::{self, CliConfig, Commands};
use crate::core::config::AppConfig;
use crate::core::constants::{APP_NAME_LOWER, ENV_LOG};
use crate::data::influx::InfluxClient;
use crate::data::traits::StatsStore;
use crate::domain::rollup::orchestrator;
use crate::domain::rollup::wait::{FixedDelay, IndexWait, NoDelay};

pub struct CoreApp {
    pub config: AppConfig,
    pub store: InfluxClient,
}

impl CoreApp {
    /// Run the application with CLI argument parsing
    pub async fn run() -> Result<()> {
        dotenvy::dotenv().ok();
        Self::init_logging();

        tracing::debug!("Application starting");

        let (cli_config, command) = cli::parse();
        tracing::trace!(command = ?command, "Parsed command");

        let app = Self::init(&cli_config)?;
        match command {
            Some(Commands::Seed {
                file,
                reset_database,
            }) => app.seed(&file, reset_database).await,
            Some(Commands::Backfill) | None => app.backfill().await,
        }
    }

    fn init(cli: &CliConfig) -> Result<Self> {
        let config = AppConfig::load(cli)?;
        let store =
            InfluxClient::init(&config.influx).context("Failed to initialize InfluxDB client")?;
        Ok(Self { config, store })
    }

    /// Full rebuild: reset, recreate and backfill the rollup hierarchy
    async fn backfill(&self) -> Result<()> {
        self.store
            .ping()
            .await
            .with_context(|| format!("InfluxDB not reachable at {}", self.config.influx.url))?;

        let wait = self.wait_strategy();
        orchestrator::backfill_login_measurements(&self.config, &self.store, wait.as_ref())
            .await
            .context("Rollup rebuild failed")?;
        Ok(())
    }

    /// Write raw login points from a line-protocol file, then rebuild
    async fn seed(&self, file: &Path, reset_database: bool) -> Result<()> {
        self.store
            .ping()
            .await
            .with_context(|| format!("InfluxDB not reachable at {}", self.config.influx.url))?;

        let db_name = &self.config.influx.database;
        if reset_database {
            tracing::info!(database = %db_name, "Recreating database");
            self.store.drop_database(db_name).await?;
            self.store.create_database(db_name).await?;
        }

        let lines = fs::read_to_string(file)
            .with_context(|| format!("Failed to read seed file: {}", file.display()))?;
        let count = lines.lines().filter(|l| !l.trim().is_empty()).count();
        tracing::info!(points = count, "Writing seed points");
        self.store.write_points(db_name, &lines).await?;

        self.backfill().await
    }

    fn wait_strategy(&self) -> Box<dyn IndexWait> {
        if self.config.backfill.skip_index_wait {
            Box::new(NoDelay)
        } else {
            Box::new(FixedDelay)
        }
    }

    fn init_logging() {
        let default_filter = format!("info,{}=info", APP_NAME_LOWER);

        let filter = std::env::var(ENV_LOG)
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or(default_filter);

        tracing_subscriber::fmt()
            .with_target(false)
            .with_thread_ids(false)
            .with_level(true)
            .with_ansi(true)
            .compact()
            .with_env_filter(filter)
            .init();
    }
}
