use anyhow::{Context, Result};

use crate::{
    db::{NewStressRecord, StressRecord},
    log_info,
    prediction::PredictionInput,
    AppState,
};

const ENABLE_LOGS: bool = true;

/// Predicts a stress label for `input` and appends it to the history.
pub async fn predict_and_record(state: &AppState, input: PredictionInput) -> Result<StressRecord> {
    let features = input.features();
    let label = state.model.predict(&features).clone();
    log_info!("Prediction for {features:?}: {label}");

    state
        .db
        .insert_stress_record(NewStressRecord {
            sleep_hours: input.sleep_hours(),
            workload: input.workload(),
            emotional_pressure: input.emotional_pressure(),
            result: label,
        })
        .await
        .context("failed to save prediction")
}

/// Every stored prediction, oldest first.
pub async fn load_history(state: &AppState) -> Result<Vec<StressRecord>> {
    state
        .db
        .get_stress_history()
        .await
        .context("failed to load prediction history")
}
