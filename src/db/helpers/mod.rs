use anyhow::{anyhow, Context, Result};

use crate::models::{EmotionalPressure, Workload};

pub fn to_u8(value: i64, field: &str) -> Result<u8> {
    u8::try_from(value).map_err(|_| anyhow!("{field} contains out-of-range value {value}"))
}

pub fn parse_workload(value: &str, field: &str) -> Result<Workload> {
    value
        .parse()
        .with_context(|| format!("failed to parse {field}"))
}

pub fn parse_emotional_pressure(value: &str, field: &str) -> Result<EmotionalPressure> {
    value
        .parse()
        .with_context(|| format!("failed to parse {field}"))
}
