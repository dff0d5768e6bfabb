use anyhow::{anyhow, Context, Result};
use rusqlite::{params, Row};

use crate::{
    db::{
        helpers::{parse_emotional_pressure, parse_workload, to_u8},
        models::{NewStressRecord, StressRecord},
        Database,
    },
    log_info,
};

const ENABLE_LOGS: bool = true;

fn row_to_stress_record(row: &Row) -> Result<StressRecord> {
    let sleep_hours: i64 = row.get("jam_tidur")?;
    let workload: String = row.get("beban_tugas")?;
    let emotion: String = row.get("emosi")?;
    let result: String = row.get("hasil")?;

    Ok(StressRecord {
        id: row.get("id")?,
        sleep_hours: to_u8(sleep_hours, "jam_tidur")?,
        workload: parse_workload(&workload, "beban_tugas")?,
        emotional_pressure: parse_emotional_pressure(&emotion, "emosi")?,
        result: result.into(),
    })
}

impl Database {
    /// Append one prediction and return it with its assigned id.
    pub async fn insert_stress_record(&self, input: NewStressRecord) -> Result<StressRecord> {
        let record = self
            .execute(move |conn| {
                conn.execute(
                    "INSERT INTO riwayat_stres (jam_tidur, beban_tugas, emosi, hasil)
                     VALUES (?1, ?2, ?3, ?4)",
                    params![
                        input.sleep_hours,
                        input.workload.as_str(),
                        input.emotional_pressure.as_str(),
                        input.result.as_str(),
                    ],
                )
                .with_context(|| "failed to insert stress record")?;

                let record_id = conn.last_insert_rowid();

                let mut stmt = conn.prepare(
                    "SELECT id, jam_tidur, beban_tugas, emosi, hasil
                     FROM riwayat_stres
                     WHERE id = ?1",
                )?;
                let mut rows = stmt.query(params![record_id])?;
                let record = match rows.next()? {
                    Some(row) => row_to_stress_record(row)?,
                    None => return Err(anyhow!("stress record {record_id} not found after insert")),
                };

                Ok(record)
            })
            .await?;

        log_info!(
            "Stored prediction {} ({} h, {}, {}) -> {}",
            record.id,
            record.sleep_hours,
            record.workload,
            record.emotional_pressure,
            record.result
        );
        Ok(record)
    }

    /// Full prediction history in insertion order.
    pub async fn get_stress_history(&self) -> Result<Vec<StressRecord>> {
        self.execute(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, jam_tidur, beban_tugas, emosi, hasil
                 FROM riwayat_stres
                 ORDER BY id ASC",
            )?;

            let mut rows = stmt.query([])?;
            let mut records = Vec::new();
            while let Some(row) = rows.next()? {
                records.push(row_to_stress_record(row)?);
            }

            Ok(records)
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::models::{EmotionalPressure, Workload};

    fn new_record(sleep_hours: u8, workload: Workload, emotion: EmotionalPressure, result: &str) -> NewStressRecord {
        NewStressRecord {
            sleep_hours,
            workload,
            emotional_pressure: emotion,
            result: result.into(),
        }
    }

    #[tokio::test]
    async fn insert_assigns_increasing_ids() {
        let temp_dir = TempDir::new().unwrap();
        let db = Database::new(temp_dir.path().join("stres.db")).unwrap();

        let first = db
            .insert_stress_record(new_record(4, Workload::Heavy, EmotionalPressure::High, "Tinggi"))
            .await
            .unwrap();
        let second = db
            .insert_stress_record(new_record(8, Workload::Light, EmotionalPressure::Low, "Rendah"))
            .await
            .unwrap();

        assert!(second.id > first.id);
        assert_eq!(first.workload, Workload::Heavy);
        assert_eq!(first.emotional_pressure, EmotionalPressure::High);
        assert_eq!(first.result.as_str(), "Tinggi");
    }

    #[tokio::test]
    async fn history_is_in_insertion_order_and_stable() {
        let temp_dir = TempDir::new().unwrap();
        let db = Database::new(temp_dir.path().join("stres.db")).unwrap();

        let mut inserted = Vec::new();
        for (hours, label) in [(7, "Rendah"), (3, "Tinggi"), (5, "Sedang")] {
            inserted.push(
                db.insert_stress_record(new_record(
                    hours,
                    Workload::Moderate,
                    EmotionalPressure::Moderate,
                    label,
                ))
                .await
                .unwrap(),
            );
        }

        let first_read = db.get_stress_history().await.unwrap();
        let second_read = db.get_stress_history().await.unwrap();

        assert_eq!(first_read, inserted);
        assert_eq!(first_read, second_read);
        assert_eq!(first_read.len(), 3);
    }

    #[tokio::test]
    async fn records_survive_reopening() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("stres.db");

        let stored = {
            let db = Database::new(db_path.clone()).unwrap();
            db.insert_stress_record(new_record(6, Workload::Light, EmotionalPressure::Moderate, "Sedang"))
                .await
                .unwrap()
        };

        let reopened = Database::new(db_path).unwrap();
        assert_eq!(reopened.get_stress_history().await.unwrap(), vec![stored]);
    }

    #[tokio::test]
    async fn rejects_rows_with_unknown_categories() {
        let temp_dir = TempDir::new().unwrap();
        let db = Database::new(temp_dir.path().join("stres.db")).unwrap();
        db.execute(|conn| {
            conn.execute(
                "INSERT INTO riwayat_stres (jam_tidur, beban_tugas, emosi, hasil)
                 VALUES (5, 'Ekstrem', 'Tinggi', 'Tinggi')",
                [],
            )?;
            Ok(())
        })
        .await
        .unwrap();

        let err = db.get_stress_history().await.unwrap_err();
        assert!(format!("{err:#}").contains("beban_tugas"));
    }
}
