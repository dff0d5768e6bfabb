//! Gaussian naive Bayes over the three encoded input features.
//!
//! Each class keeps a prior plus a per-feature mean and variance. Prediction
//! picks the class with the highest joint log likelihood:
//!
//! ```text
//! ln P(c) - ½ Σ ln(2π σ²_cj) - ½ Σ (x_j - μ_cj)² / σ²_cj
//! ```
//!
//! Every class variance is widened by `VAR_SMOOTHING` times the largest
//! feature variance of the whole dataset, which keeps single-sample and
//! constant-feature classes usable.
//!
//! Classes are ordered by label, numerically when every label is a number
//! (so `"9"` precedes `"10"`), otherwise as strings. Likelihood ties go to the
//! earlier class.

use std::collections::BTreeMap;
use std::f64::consts::PI;

use anyhow::{bail, Result};
use serde::Serialize;

use super::{dataset::TrainingSample, Features, FEATURE_COUNT};
use crate::{log_debug, log_info, models::StressLabel};

const ENABLE_LOGS: bool = true;

const VAR_SMOOTHING: f64 = 1e-9;

#[derive(Debug, Clone)]
struct ClassStats {
    label: StressLabel,
    sample_count: usize,
    log_prior: f64,
    means: Features,
    variances: Features,
}

/// Per-class view of the fitted model.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassSummary {
    pub label: StressLabel,
    pub sample_count: usize,
    pub prior: f64,
    pub means: Features,
    pub variances: Features,
}

#[derive(Debug, Clone)]
pub struct GaussianNb {
    /// Sorted by label; ties in likelihood go to the earlier class.
    classes: Vec<ClassStats>,
    epsilon: f64,
}

impl GaussianNb {
    pub fn fit(samples: &[TrainingSample]) -> Result<Self> {
        if samples.is_empty() {
            bail!("cannot fit classifier on an empty dataset");
        }

        let all_features: Vec<Features> = samples.iter().map(TrainingSample::features).collect();
        let (_, overall_variances) = mean_and_variance(&all_features);
        let max_variance = overall_variances.iter().copied().fold(0.0, f64::max);
        let epsilon = if max_variance > 0.0 {
            VAR_SMOOTHING * max_variance
        } else {
            VAR_SMOOTHING
        };

        let mut grouped: BTreeMap<&StressLabel, Vec<Features>> = BTreeMap::new();
        for sample in samples {
            grouped
                .entry(&sample.label)
                .or_default()
                .push(sample.features());
        }

        let total = samples.len() as f64;
        let classes: Vec<ClassStats> = grouped
            .into_iter()
            .map(|(label, rows)| {
                let (means, mut variances) = mean_and_variance(&rows);
                for variance in variances.iter_mut() {
                    *variance += epsilon;
                }
                ClassStats {
                    label: label.clone(),
                    sample_count: rows.len(),
                    log_prior: (rows.len() as f64 / total).ln(),
                    means,
                    variances,
                }
            })
            .collect();
        let classes = sort_numeric_labels(classes);

        log_info!(
            "Fitted Gaussian naive Bayes on {} samples, classes: {}",
            samples.len(),
            classes
                .iter()
                .map(|class| class.label.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );

        Ok(Self { classes, epsilon })
    }

    /// Most likely label for one feature vector.
    pub fn predict(&self, features: &Features) -> &StressLabel {
        let mut best = &self.classes[0];
        let mut best_score = joint_log_likelihood(best, features);

        for class in &self.classes[1..] {
            let score = joint_log_likelihood(class, features);
            if score > best_score {
                best = class;
                best_score = score;
            }
        }

        log_debug!(
            "Predicted {} for {:?} (log likelihood {best_score:.4})",
            best.label,
            features
        );
        &best.label
    }

    pub fn classes(&self) -> impl Iterator<Item = &StressLabel> {
        self.classes.iter().map(|class| &class.label)
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    pub fn summary(&self) -> Vec<ClassSummary> {
        self.classes
            .iter()
            .map(|class| ClassSummary {
                label: class.label.clone(),
                sample_count: class.sample_count,
                prior: class.log_prior.exp(),
                means: class.means,
                variances: class.variances,
            })
            .collect()
    }
}

/// Reorders string-sorted classes numerically when every label parses as a
/// finite number. Stable, so equal values keep their string order.
fn sort_numeric_labels(classes: Vec<ClassStats>) -> Vec<ClassStats> {
    let values: Option<Vec<f64>> = classes
        .iter()
        .map(|class| {
            class
                .label
                .as_str()
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
        })
        .collect();

    match values {
        Some(values) => {
            let mut keyed: Vec<(f64, ClassStats)> = values.into_iter().zip(classes).collect();
            keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
            keyed.into_iter().map(|(_, class)| class).collect()
        }
        None => classes,
    }
}

fn joint_log_likelihood(class: &ClassStats, features: &Features) -> f64 {
    let mut score = class.log_prior;
    for j in 0..FEATURE_COUNT {
        let variance = class.variances[j];
        let diff = features[j] - class.means[j];
        score -= 0.5 * (2.0 * PI * variance).ln();
        score -= 0.5 * diff * diff / variance;
    }
    score
}

/// Population mean and variance per feature.
fn mean_and_variance(rows: &[Features]) -> (Features, Features) {
    let count = rows.len() as f64;
    let mut means = [0.0; FEATURE_COUNT];
    for row in rows {
        for (mean, value) in means.iter_mut().zip(row) {
            *mean += value;
        }
    }
    for mean in means.iter_mut() {
        *mean /= count;
    }

    let mut variances = [0.0; FEATURE_COUNT];
    for row in rows {
        for j in 0..FEATURE_COUNT {
            let diff = row[j] - means[j];
            variances[j] += diff * diff;
        }
    }
    for variance in variances.iter_mut() {
        *variance /= count;
    }

    (means, variances)
}
