use thiserror::Error;

/// Rejected prediction input.
///
/// The interactive prompts only offer valid choices, so these surface from the
/// command line and library callers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("sleep hours must be between {min} and {max}, got {value}")]
    SleepHoursOutOfRange { value: i64, min: u8, max: u8 },

    #[error("unknown workload '{0}' (expected Ringan, Sedang or Banyak)")]
    UnknownWorkload(String),

    #[error("unknown emotional pressure '{0}' (expected Rendah, Sedang or Tinggi)")]
    UnknownEmotionalPressure(String),
}
