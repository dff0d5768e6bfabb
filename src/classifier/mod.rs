pub mod dataset;
pub mod gaussian_nb;

pub use dataset::{Dataset, TrainingSample};
pub use gaussian_nb::{ClassSummary, GaussianNb};

use crate::models::{EmotionalPressure, Workload};

pub const FEATURE_COUNT: usize = 3;

/// `[sleep_hours, workload_code, emotion_code]`
pub type Features = [f64; FEATURE_COUNT];

/// Encodes user input the same way the dataset columns are encoded.
pub fn encode(sleep_hours: u8, workload: Workload, emotional_pressure: EmotionalPressure) -> Features {
    [
        f64::from(sleep_hours),
        f64::from(workload.code()),
        f64::from(emotional_pressure.code()),
    ]
}
