use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::{history::LOW_SLEEP_THRESHOLD, models::MAX_SLEEP_HOURS};

/// Runtime settings. Every key is optional in the JSON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub dataset_path: PathBuf,
    /// Insight fires when the lowest per-label mean sleep is below this.
    pub low_sleep_threshold: f64,
    pub default_sleep_hours: u8,
    /// Width in characters of the longest chart bar.
    pub chart_width: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from("stres.db"),
            dataset_path: PathBuf::from("data_stres.csv"),
            low_sleep_threshold: LOW_SLEEP_THRESHOLD,
            default_sleep_hours: 6,
            chart_width: 40,
        }
    }
}

impl AppConfig {
    /// Reads the config file when one is given, defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => {
                let contents = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config from {}", path.display()))?;
                serde_json::from_str(&contents)
                    .with_context(|| format!("Failed to parse config {}", path.display()))?
            }
            None => Self::default(),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn with_overrides(mut self, db_path: Option<PathBuf>, dataset_path: Option<PathBuf>) -> Self {
        if let Some(db_path) = db_path {
            self.db_path = db_path;
        }
        if let Some(dataset_path) = dataset_path {
            self.dataset_path = dataset_path;
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !self.low_sleep_threshold.is_finite() {
            bail!("low_sleep_threshold must be a finite number");
        }
        if self.default_sleep_hours > MAX_SLEEP_HOURS {
            bail!(
                "default_sleep_hours must be at most {MAX_SLEEP_HOURS}, got {}",
                self.default_sleep_hours
            );
        }
        if self.chart_width == 0 {
            bail!("chart_width must be positive");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn config_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn defaults_without_file() {
        let config = AppConfig::load(None).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.db_path, PathBuf::from("stres.db"));
        assert_eq!(config.low_sleep_threshold, 6.0);
        assert_eq!(config.default_sleep_hours, 6);
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let file = config_file(r#"{ "db_path": "/tmp/riwayat.db", "chart_width": 20 }"#);
        let config = AppConfig::load(Some(file.path())).unwrap();

        assert_eq!(config.db_path, PathBuf::from("/tmp/riwayat.db"));
        assert_eq!(config.chart_width, 20);
        assert_eq!(config.dataset_path, PathBuf::from("data_stres.csv"));
    }

    #[test]
    fn malformed_or_invalid_file_is_rejected() {
        let broken = config_file("{ not json");
        assert!(AppConfig::load(Some(broken.path())).is_err());

        let invalid = config_file(r#"{ "default_sleep_hours": 12 }"#);
        let err = AppConfig::load(Some(invalid.path())).unwrap_err();
        assert!(err.to_string().contains("default_sleep_hours"));
    }

    #[test]
    fn overrides_replace_paths() {
        let config = AppConfig::default()
            .with_overrides(Some(PathBuf::from("other.db")), None);
        assert_eq!(config.db_path, PathBuf::from("other.db"));
        assert_eq!(config.dataset_path, PathBuf::from("data_stres.csv"));
    }
}
