pub mod classifier;
pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod history;
pub mod models;
pub mod prediction;
pub mod ui;
mod utils;

use anyhow::{Context, Result};
use clap::Parser;

use classifier::{Dataset, GaussianNb};
use cli::{Cli, Command};
use config::AppConfig;
use db::Database;

/// Everything a prediction needs, built once at startup.
pub struct AppState {
    pub(crate) config: AppConfig,
    pub(crate) db: Database,
    pub(crate) model: GaussianNb,
}

impl AppState {
    /// Opens the record store, loads the dataset and fits the classifier.
    /// Any failure here is fatal for the process.
    pub fn initialize(config: AppConfig) -> Result<Self> {
        let database = Database::new(config.db_path.clone())
            .with_context(|| format!("failed to open record store {}", config.db_path.display()))?;

        let dataset = Dataset::load(&config.dataset_path)?;
        let model = GaussianNb::fit(dataset.samples()).context("failed to fit classifier")?;

        Ok(Self {
            config,
            db: database,
            model,
        })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn model(&self) -> &GaussianNb {
        &self.model
    }
}

pub fn run() -> Result<()> {
    // Warn by default so the interactive prompts stay readable; RUST_LOG overrides.
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?
        .with_overrides(cli.db.clone(), cli.dataset.clone());

    log::info!("Stress predictor starting up...");

    let state = AppState::initialize(config)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    runtime.block_on(cli::execute(
        cli.command.unwrap_or(Command::Interactive),
        &state,
    ))
}
