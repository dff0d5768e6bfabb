use anyhow::Result;
use console::style;
use dialoguer::{theme::ColorfulTheme, Input, Select};

use crate::{
    log_error,
    models::{EmotionalPressure, Workload, MAX_SLEEP_HOURS},
    prediction::{
        commands::{load_history, predict_and_record},
        PredictionInput,
    },
    AppState,
};

use super::{prediction_message, render_dashboard};

const ENABLE_LOGS: bool = true;

const MENU_ITEMS: [&str; 2] = ["Prediksi & Simpan", "Keluar"];

/// Prompt loop: input, predict, store, then redraw the full history.
pub async fn run_interactive(state: &AppState) -> Result<()> {
    let theme = ColorfulTheme::default();

    println!("{}", style("🧠 Sistem Cerdas Prediksi Stres Mahasiswa").bold().cyan());
    println!("Machine Learning + Database + Visualisasi\n");
    show_dashboard(state).await;

    loop {
        println!("\n{}", style("🔍 Input Data").bold().cyan());

        let sleep_hours: u8 = Input::with_theme(&theme)
            .with_prompt(format!("Jam tidur per hari (0-{MAX_SLEEP_HOURS})"))
            .default(state.config.default_sleep_hours)
            .validate_with(|value: &u8| -> Result<(), String> {
                if *value <= MAX_SLEEP_HOURS {
                    Ok(())
                } else {
                    Err(format!("Masukkan angka 0 sampai {MAX_SLEEP_HOURS}"))
                }
            })
            .interact_text()?;

        let workload = Select::with_theme(&theme)
            .with_prompt("Beban tugas")
            .items(&Workload::ALL)
            .default(0)
            .interact()?;

        let emotion = Select::with_theme(&theme)
            .with_prompt("Tekanan emosional")
            .items(&EmotionalPressure::ALL)
            .default(0)
            .interact()?;

        let action = Select::with_theme(&theme)
            .items(&MENU_ITEMS)
            .default(0)
            .interact()?;
        if action == 1 {
            break;
        }

        let input = PredictionInput::new(
            i64::from(sleep_hours),
            Workload::ALL[workload],
            EmotionalPressure::ALL[emotion],
        )?;

        match predict_and_record(state, input).await {
            Ok(record) => println!("\n{}\n", prediction_message(&record)),
            Err(err) => {
                log_error!("Prediction failed: {err:#}");
                println!(
                    "\n{}\n",
                    style(format!("Gagal menyimpan prediksi: {err:#}")).red().bold()
                );
            }
        }

        show_dashboard(state).await;
    }

    Ok(())
}

async fn show_dashboard(state: &AppState) {
    println!("{}", dashboard_text(state).await);
}

/// Rendered history, or the read error in its place so the loop keeps going.
async fn dashboard_text(state: &AppState) -> String {
    match load_history(state).await {
        Ok(history) => render_dashboard(
            &history,
            state.config.low_sleep_threshold,
            state.config.chart_width,
        ),
        Err(err) => {
            log_error!("Loading history failed: {err:#}");
            style(format!("Gagal memuat riwayat: {err:#}"))
                .red()
                .bold()
                .to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::config::AppConfig;

    fn test_state(temp_dir: &TempDir) -> AppState {
        let dataset_path = temp_dir.path().join("data_stres.csv");
        fs::write(
            &dataset_path,
            "jam_tidur,beban_tugas,emosi,stres\n8,1,1,Rendah\n3,3,3,Tinggi\n",
        )
        .unwrap();
        AppState::initialize(AppConfig {
            db_path: temp_dir.path().join("stres.db"),
            dataset_path,
            ..AppConfig::default()
        })
        .unwrap()
    }

    #[tokio::test]
    async fn dashboard_renders_history() {
        let temp_dir = TempDir::new().unwrap();
        let state = test_state(&temp_dir);
        predict_and_record(
            &state,
            PredictionInput::new(4, Workload::Heavy, EmotionalPressure::High).unwrap(),
        )
        .await
        .unwrap();

        let text = dashboard_text(&state).await;
        assert!(text.contains("Banyak"));
        assert!(text.contains("Distribusi Tingkat Stres"));
    }

    #[tokio::test]
    async fn dashboard_reports_read_failure() {
        let temp_dir = TempDir::new().unwrap();
        let state = test_state(&temp_dir);
        state
            .db
            .execute(|conn| {
                conn.execute_batch("DROP TABLE riwayat_stres")?;
                Ok(())
            })
            .await
            .unwrap();

        let text = dashboard_text(&state).await;
        assert!(text.contains("Gagal memuat riwayat"));
        assert!(text.contains("failed to load prediction history"));
    }
}
