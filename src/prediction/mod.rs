pub mod commands;

use serde::Serialize;

use crate::{
    classifier::{self, Features},
    error::InputError,
    models::{parse_sleep_hours, EmotionalPressure, Workload},
};

/// Validated input for one prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionInput {
    sleep_hours: u8,
    workload: Workload,
    emotional_pressure: EmotionalPressure,
}

impl PredictionInput {
    pub fn new(
        sleep_hours: i64,
        workload: Workload,
        emotional_pressure: EmotionalPressure,
    ) -> Result<Self, InputError> {
        Ok(Self {
            sleep_hours: parse_sleep_hours(sleep_hours)?,
            workload,
            emotional_pressure,
        })
    }

    /// Builds input from free text, as typed on the command line.
    pub fn parse(
        sleep_hours: i64,
        workload: &str,
        emotional_pressure: &str,
    ) -> Result<Self, InputError> {
        Self::new(sleep_hours, workload.parse()?, emotional_pressure.parse()?)
    }

    pub fn sleep_hours(&self) -> u8 {
        self.sleep_hours
    }

    pub fn workload(&self) -> Workload {
        self.workload
    }

    pub fn emotional_pressure(&self) -> EmotionalPressure {
        self.emotional_pressure
    }

    pub fn features(&self) -> Features {
        classifier::encode(self.sleep_hours, self.workload, self.emotional_pressure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_valid_text() {
        let input = PredictionInput::parse(4, "Banyak", "tinggi").unwrap();
        assert_eq!(input.sleep_hours(), 4);
        assert_eq!(input.workload(), Workload::Heavy);
        assert_eq!(input.emotional_pressure(), EmotionalPressure::High);
        assert_eq!(input.features(), [4.0, 3.0, 3.0]);
    }

    #[test]
    fn parse_rejects_out_of_domain_values() {
        assert!(matches!(
            PredictionInput::parse(11, "Ringan", "Rendah"),
            Err(InputError::SleepHoursOutOfRange { value: 11, .. })
        ));
        assert_eq!(
            PredictionInput::parse(5, "Berat", "Rendah"),
            Err(InputError::UnknownWorkload("Berat".into()))
        );
        assert_eq!(
            PredictionInput::parse(5, "Ringan", "Santai"),
            Err(InputError::UnknownEmotionalPressure("Santai".into()))
        );
    }
}
