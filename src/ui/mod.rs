pub mod charts;
pub mod interactive;
pub mod table;

use console::style;

use crate::{
    classifier::GaussianNb,
    db::StressRecord,
    history::{summarize_with_threshold, HistorySummary, Insight},
};

use charts::BarChart;

pub const EMPTY_HISTORY_MESSAGE: &str = "Belum ada riwayat diagnosa.";

pub fn prediction_message(record: &StressRecord) -> String {
    style(format!("Hasil Prediksi: {}", record.result))
        .green()
        .bold()
        .to_string()
}

/// History table, then charts and insight when there is any history.
pub fn render_dashboard(history: &[StressRecord], low_sleep_threshold: f64, chart_width: usize) -> String {
    let mut sections = vec![
        style("📋 Riwayat Diagnosa").bold().cyan().to_string(),
        table::render_history(history),
    ];

    if let Some(summary) = summarize_with_threshold(history, low_sleep_threshold) {
        sections.push(String::new());
        sections.push(style("📊 Visualisasi & Analisis").bold().cyan().to_string());
        sections.push(render_summary(&summary, chart_width));
    }

    sections.join("\n")
}

pub fn render_summary(summary: &HistorySummary, chart_width: usize) -> String {
    let insight = match summary.insight {
        Insight::LowSleep => style(summary.insight.message()).yellow().to_string(),
        Insight::Acceptable => style(summary.insight.message()).cyan().to_string(),
    };

    [
        BarChart::label_distribution(summary).render(chart_width),
        String::new(),
        BarChart::mean_sleep(summary).render(chart_width),
        String::new(),
        style("🧠 Insight Sistem").bold().to_string(),
        insight,
    ]
    .join("\n")
}

pub fn render_model(model: &GaussianNb) -> String {
    let mut lines = vec![style("Gaussian naive Bayes").bold().to_string()];
    lines.push(format!("variance smoothing: {:e}", model.epsilon()));
    for class in model.summary() {
        lines.push(format!(
            "{}: {} samples, prior {:.3}, mean [{:.2}, {:.2}, {:.2}], variance [{:.3}, {:.3}, {:.3}]",
            class.label,
            class.sample_count,
            class.prior,
            class.means[0],
            class.means[1],
            class.means[2],
            class.variances[0],
            class.variances[1],
            class.variances[2],
        ));
    }
    lines.join("\n")
}
