//! Horizontal text bar charts for the history summary.

use console::style;

use crate::history::HistorySummary;

const BAR_CHAR: char = '█';

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    /// Text printed after the bar.
    pub display: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub title: String,
    pub category_axis: String,
    pub value_axis: String,
    pub bars: Vec<Bar>,
}

impl BarChart {
    pub fn label_distribution(summary: &HistorySummary) -> Self {
        Self {
            title: "Distribusi Tingkat Stres".into(),
            category_axis: "Tingkat Stres".into(),
            value_axis: "Jumlah".into(),
            bars: summary
                .label_counts
                .iter()
                .map(|entry| Bar {
                    label: entry.label.to_string(),
                    value: entry.count as f64,
                    display: entry.count.to_string(),
                })
                .collect(),
        }
    }

    pub fn mean_sleep(summary: &HistorySummary) -> Self {
        Self {
            title: "Rata-rata Jam Tidur per Tingkat Stres".into(),
            category_axis: "Tingkat Stres".into(),
            value_axis: "Jam Tidur".into(),
            bars: summary
                .mean_sleep
                .iter()
                .map(|entry| Bar {
                    label: entry.label.to_string(),
                    value: entry.mean_sleep_hours,
                    display: format!("{:.2}", entry.mean_sleep_hours),
                })
                .collect(),
        }
    }

    /// Renders with the largest bar `width` characters long.
    pub fn render(&self, width: usize) -> String {
        let label_width = self
            .bars
            .iter()
            .map(|bar| bar.label.chars().count())
            .chain(std::iter::once(self.category_axis.chars().count()))
            .max()
            .unwrap_or(0);
        let max_value = self.bars.iter().map(|bar| bar.value).fold(0.0, f64::max);

        let mut lines = vec![
            style(&self.title).bold().to_string(),
            format!(
                "{:<label_width$}  {}",
                self.category_axis,
                style(&self.value_axis).dim()
            ),
        ];

        for bar in &self.bars {
            let length = bar_length(bar.value, max_value, width);
            lines.push(format!(
                "{:<label_width$}  {} {}",
                bar.label,
                BAR_CHAR.to_string().repeat(length),
                bar.display
            ));
        }

        lines.join("\n")
    }
}

fn bar_length(value: f64, max_value: f64, width: usize) -> usize {
    if max_value <= 0.0 || value <= 0.0 {
        return 0;
    }
    // Keep tiny positive values visible.
    ((value / max_value) * width as f64).round().max(1.0) as usize
}
