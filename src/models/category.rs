//! Fixed input categories and their numeric codes.
//!
//! The codes must match the encoding used in the training dataset's
//! `beban_tugas` and `emosi` columns.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::InputError;

pub const MIN_SLEEP_HOURS: u8 = 0;
pub const MAX_SLEEP_HOURS: u8 = 10;

/// Checks a raw sleep-hours value against the slider range.
pub fn parse_sleep_hours(value: i64) -> Result<u8, InputError> {
    u8::try_from(value)
        .ok()
        .filter(|hours| (MIN_SLEEP_HOURS..=MAX_SLEEP_HOURS).contains(hours))
        .ok_or(InputError::SleepHoursOutOfRange {
            value,
            min: MIN_SLEEP_HOURS,
            max: MAX_SLEEP_HOURS,
        })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Workload {
    #[serde(rename = "Ringan")]
    Light,
    #[serde(rename = "Sedang")]
    Moderate,
    #[serde(rename = "Banyak")]
    Heavy,
}

impl Workload {
    pub const ALL: [Workload; 3] = [Workload::Light, Workload::Moderate, Workload::Heavy];

    /// Stored and displayed name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Workload::Light => "Ringan",
            Workload::Moderate => "Sedang",
            Workload::Heavy => "Banyak",
        }
    }

    pub fn code(&self) -> u8 {
        match self {
            Workload::Light => 1,
            Workload::Moderate => 2,
            Workload::Heavy => 3,
        }
    }
}

impl fmt::Display for Workload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Workload {
    type Err = InputError;

    /// Accepts the stored name or its English equivalent, ignoring case.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "ringan" | "light" => Ok(Workload::Light),
            "sedang" | "moderate" => Ok(Workload::Moderate),
            "banyak" | "heavy" => Ok(Workload::Heavy),
            _ => Err(InputError::UnknownWorkload(value.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmotionalPressure {
    #[serde(rename = "Rendah")]
    Low,
    #[serde(rename = "Sedang")]
    Moderate,
    #[serde(rename = "Tinggi")]
    High,
}

impl EmotionalPressure {
    pub const ALL: [EmotionalPressure; 3] = [
        EmotionalPressure::Low,
        EmotionalPressure::Moderate,
        EmotionalPressure::High,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EmotionalPressure::Low => "Rendah",
            EmotionalPressure::Moderate => "Sedang",
            EmotionalPressure::High => "Tinggi",
        }
    }

    pub fn code(&self) -> u8 {
        match self {
            EmotionalPressure::Low => 1,
            EmotionalPressure::Moderate => 2,
            EmotionalPressure::High => 3,
        }
    }
}

impl fmt::Display for EmotionalPressure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmotionalPressure {
    type Err = InputError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "rendah" | "low" => Ok(EmotionalPressure::Low),
            "sedang" | "moderate" => Ok(EmotionalPressure::Moderate),
            "tinggi" | "high" => Ok(EmotionalPressure::High),
            _ => Err(InputError::UnknownEmotionalPressure(value.to_string())),
        }
    }
}
