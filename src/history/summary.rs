use std::collections::BTreeMap;

use serde::Serialize;

use crate::{db::StressRecord, models::StressLabel};

/// Mean sleep hours below this counts as "low sleep".
pub const LOW_SLEEP_THRESHOLD: f64 = 6.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelCount {
    pub label: StressLabel,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelSleepMean {
    pub label: StressLabel,
    pub mean_sleep_hours: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Insight {
    LowSleep,
    Acceptable,
}

impl Insight {
    pub fn message(&self) -> &'static str {
        match self {
            Insight::LowSleep => {
                "Mahasiswa dengan stres tinggi cenderung memiliki jam tidur rendah."
            }
            Insight::Acceptable => "Pola tidur relatif baik.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistorySummary {
    /// Most frequent label first, ties by label.
    pub label_counts: Vec<LabelCount>,
    /// Ordered by label.
    pub mean_sleep: Vec<LabelSleepMean>,
    pub low_sleep: bool,
    pub insight: Insight,
}

/// Aggregates the history for the charts. `None` when there is nothing to show.
pub fn summarize(history: &[StressRecord]) -> Option<HistorySummary> {
    summarize_with_threshold(history, LOW_SLEEP_THRESHOLD)
}

pub fn summarize_with_threshold(history: &[StressRecord], threshold: f64) -> Option<HistorySummary> {
    if history.is_empty() {
        return None;
    }

    let mut groups: BTreeMap<&StressLabel, (usize, u64)> = BTreeMap::new();
    for record in history {
        let (count, sleep_total) = groups.entry(&record.result).or_insert((0, 0));
        *count += 1;
        *sleep_total += u64::from(record.sleep_hours);
    }

    let mean_sleep: Vec<LabelSleepMean> = groups
        .iter()
        .map(|(label, (count, sleep_total))| LabelSleepMean {
            label: (*label).clone(),
            mean_sleep_hours: *sleep_total as f64 / *count as f64,
        })
        .collect();

    let mut label_counts: Vec<LabelCount> = groups
        .iter()
        .map(|(label, (count, _))| LabelCount {
            label: (*label).clone(),
            count: *count,
        })
        .collect();
    label_counts.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));

    // Lowest mean across every label, not just the high-stress one.
    let lowest_mean = mean_sleep
        .iter()
        .map(|entry| entry.mean_sleep_hours)
        .fold(f64::INFINITY, f64::min);
    let low_sleep = lowest_mean < threshold;

    Some(HistorySummary {
        label_counts,
        mean_sleep,
        low_sleep,
        insight: if low_sleep {
            Insight::LowSleep
        } else {
            Insight::Acceptable
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EmotionalPressure, Workload};

    fn record(id: i64, sleep_hours: u8, result: &str) -> StressRecord {
        StressRecord {
            id,
            sleep_hours,
            workload: Workload::Moderate,
            emotional_pressure: EmotionalPressure::Moderate,
            result: result.into(),
        }
    }

    #[test]
    fn empty_history_has_no_summary() {
        assert_eq!(summarize(&[]), None);
    }

    #[test]
    fn all_high_with_short_sleep_flags_low_sleep() {
        let history = vec![record(1, 4, "Tinggi"), record(2, 6, "Tinggi"), record(3, 5, "Tinggi")];
        let summary = summarize(&history).unwrap();

        assert_eq!(
            summary.label_counts,
            vec![LabelCount { label: "Tinggi".into(), count: 3 }]
        );
        assert_eq!(summary.mean_sleep.len(), 1);
        assert!((summary.mean_sleep[0].mean_sleep_hours - 5.0).abs() < 1e-12);
        assert!(summary.low_sleep);
        assert_eq!(summary.insight, Insight::LowSleep);
        assert!(summary.insight.message().contains("jam tidur rendah"));
    }

    #[test]
    fn counts_sorted_by_frequency_and_means_by_label() {
        let history = vec![
            record(1, 8, "Rendah"),
            record(2, 7, "Sedang"),
            record(3, 9, "Rendah"),
            record(4, 6, "Tinggi"),
            record(5, 7, "Sedang"),
            record(6, 10, "Rendah"),
        ];
        let summary = summarize(&history).unwrap();

        let counts: Vec<(&str, usize)> = summary
            .label_counts
            .iter()
            .map(|entry| (entry.label.as_str(), entry.count))
            .collect();
        assert_eq!(counts, vec![("Rendah", 3), ("Sedang", 2), ("Tinggi", 1)]);

        let means: Vec<(&str, f64)> = summary
            .mean_sleep
            .iter()
            .map(|entry| (entry.label.as_str(), entry.mean_sleep_hours))
            .collect();
        assert_eq!(means, vec![("Rendah", 9.0), ("Sedang", 7.0), ("Tinggi", 6.0)]);

        // 6.0 is not below the threshold.
        assert!(!summary.low_sleep);
        assert_eq!(summary.insight, Insight::Acceptable);
    }

    #[test]
    fn any_label_with_low_mean_triggers_insight() {
        let history = vec![record(1, 9, "Tinggi"), record(2, 3, "Rendah")];
        assert!(summarize(&history).unwrap().low_sleep);
    }

    #[test]
    fn threshold_is_configurable() {
        let history = vec![record(1, 7, "Sedang")];
        assert!(!summarize(&history).unwrap().low_sleep);
        assert!(summarize_with_threshold(&history, 8.0).unwrap().low_sleep);
    }
}
