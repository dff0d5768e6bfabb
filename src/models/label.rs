use std::fmt;

use serde::{Deserialize, Serialize};

/// Predicted stress level.
///
/// The value space comes from the training dataset's `stres` column, so the
/// label is kept as an opaque string rather than an enum.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StressLabel(String);

impl StressLabel {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StressLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for StressLabel {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for StressLabel {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
