use anyhow::{Context, Result};
use rusqlite::Connection;

/// Creates `riwayat_stres` when missing. Existing tables and rows are left
/// alone, whatever else the file holds.
pub fn ensure_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(include_str!("schemas/schema_v1.sql"))
        .context("failed to execute schema_v1.sql")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn legacy_store() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "CREATE TABLE riwayat_stres (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                jam_tidur INTEGER,
                beban_tugas TEXT,
                emosi TEXT,
                hasil TEXT
            );
            INSERT INTO riwayat_stres (jam_tidur, beban_tugas, emosi, hasil)
            VALUES (5, 'Sedang', 'Tinggi', 'Tinggi');",
        )
        .unwrap();
        conn
    }

    fn row_count(conn: &Connection) -> i64 {
        conn.query_row("SELECT COUNT(*) FROM riwayat_stres", [], |row| row.get(0))
            .unwrap()
    }

    #[test]
    fn creates_history_table() {
        let conn = Connection::open_in_memory().unwrap();
        ensure_schema(&conn).unwrap();

        let tables: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'riwayat_stres'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(tables, 1);
        assert_eq!(row_count(&conn), 0);
    }

    #[test]
    fn adopts_existing_unversioned_table() {
        let conn = legacy_store();

        ensure_schema(&conn).unwrap();
        ensure_schema(&conn).unwrap();

        assert_eq!(row_count(&conn), 1);
    }

    #[test]
    fn opens_store_with_foreign_user_version() {
        let conn = legacy_store();
        conn.pragma_update(None, "user_version", 7).unwrap();

        ensure_schema(&conn).unwrap();

        assert_eq!(row_count(&conn), 1);
        let version: i32 = conn
            .pragma_query_value(None, "user_version", |row| row.get(0))
            .unwrap();
        assert_eq!(version, 7);
    }
}
