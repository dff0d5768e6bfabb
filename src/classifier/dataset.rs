//! Training dataset loading (`data_stres.csv`).

use std::{fs::File, io::Read, path::Path};

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use super::Features;
use crate::{log_info, models::StressLabel};

const ENABLE_LOGS: bool = true;

const REQUIRED_COLUMNS: [&str; 4] = ["jam_tidur", "beban_tugas", "emosi", "stres"];

/// One dataset row. Category columns are already numerically encoded.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TrainingSample {
    #[serde(rename = "jam_tidur")]
    pub sleep_hours: f64,
    #[serde(rename = "beban_tugas")]
    pub workload_code: f64,
    #[serde(rename = "emosi")]
    pub emotion_code: f64,
    #[serde(rename = "stres")]
    pub label: StressLabel,
}

impl TrainingSample {
    pub fn features(&self) -> Features {
        [self.sleep_hours, self.workload_code, self.emotion_code]
    }
}

#[derive(Debug, Clone)]
pub struct Dataset {
    samples: Vec<TrainingSample>,
}

impl Dataset {
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("failed to open dataset {}", path.display()))?;
        let dataset = Self::from_reader(file)
            .with_context(|| format!("failed to read dataset {}", path.display()))?;

        log_info!(
            "Loaded {} training samples from {}",
            dataset.samples().len(),
            path.display()
        );
        Ok(dataset)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = csv_reader
            .headers()
            .context("failed to read dataset header")?
            .clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|header| header == column) {
                bail!("dataset is missing column '{column}'");
            }
        }

        let mut samples = Vec::new();
        for (index, row) in csv_reader.deserialize::<TrainingSample>().enumerate() {
            // Header is line 1.
            let line = index + 2;
            let sample = row.with_context(|| format!("malformed dataset row at line {line}"))?;
            if sample.label.as_str().is_empty() {
                bail!("dataset row at line {line} has an empty 'stres' label");
            }
            let finite = sample.features().iter().all(|value| value.is_finite());
            if !finite {
                bail!("dataset row at line {line} has a non-finite feature");
            }
            samples.push(sample);
        }

        if samples.is_empty() {
            bail!("dataset contains no rows");
        }

        Ok(Self { samples })
    }

    pub fn samples(&self) -> &[TrainingSample] {
        &self.samples
    }
}
