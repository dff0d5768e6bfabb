//! Prediction history rows (`riwayat_stres`).

use serde::{Deserialize, Serialize};

use crate::models::{EmotionalPressure, StressLabel, Workload};

/// One stored prediction. Never updated or deleted once written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StressRecord {
    pub id: i64,
    pub sleep_hours: u8,
    pub workload: Workload,
    pub emotional_pressure: EmotionalPressure,
    pub result: StressLabel,
}

/// Input for appending a record; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStressRecord {
    pub sleep_hours: u8,
    pub workload: Workload,
    pub emotional_pressure: EmotionalPressure,
    pub result: StressLabel,
}
