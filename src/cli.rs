use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use console::style;

use crate::{
    history::summarize_with_threshold,
    prediction::{
        commands::{load_history, predict_and_record},
        PredictionInput,
    },
    ui, AppState,
};

/// Student stress level predictor with local prediction history.
#[derive(Debug, Parser)]
#[command(name = "stress-predictor", version, about)]
pub struct Cli {
    /// JSON config file
    #[arg(long, global = true, env = "STRESS_PREDICTOR_CONFIG")]
    pub config: Option<PathBuf>,

    /// SQLite record store, overrides the config file
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Training dataset CSV, overrides the config file
    #[arg(long, global = true)]
    pub dataset: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Prompt for input, predict and show history (default)
    Interactive,

    /// Predict once and store the result
    Predict {
        /// Sleep hours per day (0-10)
        #[arg(long, allow_negative_numbers = true)]
        sleep: i64,

        /// Ringan, Sedang or Banyak (Light, Moderate, Heavy)
        #[arg(long)]
        workload: String,

        /// Rendah, Sedang or Tinggi (Low, Moderate, High)
        #[arg(long)]
        emotion: String,

        /// Print the stored record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print every stored prediction
    History {
        #[arg(long)]
        json: bool,
    },

    /// Print charts and insight for the stored history
    Summary {
        #[arg(long)]
        json: bool,
    },

    /// Print the fitted classifier
    Model,
}

pub async fn execute(command: Command, state: &AppState) -> Result<()> {
    match command {
        Command::Interactive => ui::interactive::run_interactive(state).await,
        Command::Predict {
            sleep,
            workload,
            emotion,
            json,
        } => {
            let input = PredictionInput::parse(sleep, &workload, &emotion)?;
            let record = predict_and_record(state, input).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&record)?);
            } else {
                println!("{}", ui::prediction_message(&record));
            }
            Ok(())
        }
        Command::History { json } => {
            let history = load_history(state).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&history)?);
            } else {
                println!("{}", ui::table::render_history(&history));
            }
            Ok(())
        }
        Command::Summary { json } => {
            let history = load_history(state).await?;
            let summary = summarize_with_threshold(&history, state.config.low_sleep_threshold);
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                match summary {
                    Some(summary) => {
                        println!("{}", ui::render_summary(&summary, state.config.chart_width))
                    }
                    None => println!("{}", style(ui::EMPTY_HISTORY_MESSAGE).dim()),
                }
            }
            Ok(())
        }
        Command::Model => {
            println!("{}", ui::render_model(state.model()));
            Ok(())
        }
    }
}
