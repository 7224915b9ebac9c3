//! Usage: Durable key-value rows backing the tap counter (reads with defaults, upsert writes).

use crate::shared::time::now_unix_seconds;
use rusqlite::{params, Connection, OptionalExtension};

pub(crate) const KEY_TOTAL_TAPS: &str = "totalTaps";
pub(crate) const KEY_FIRST_INSTALL_DATE: &str = "firstInstallDate";
pub(crate) const KEY_UNLOCKED_ACHIEVEMENTS_COUNT: &str = "UnlockedAchievementsCount";

/// Missing keys are not an error; the caller-supplied default is returned.
pub(crate) fn get_i64(conn: &Connection, key: &str, default: i64) -> Result<i64, String> {
    let value: Option<i64> = conn
        .query_row(
            "SELECT value FROM counter_store WHERE key = ?1",
            params![key],
            |row| row.get(0),
        )
        .optional()
        .map_err(|e| format!("DB_ERROR: failed to read counter_store[{key}]: {e}"))?;

    Ok(value.unwrap_or(default))
}

pub(crate) fn set_i64(conn: &Connection, key: &str, value: i64) -> Result<(), String> {
    conn.execute(
        r#"
INSERT INTO counter_store(key, value, updated_at) VALUES (?1, ?2, ?3)
ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at
"#,
        params![key, value, now_unix_seconds()],
    )
    .map_err(|e| format!("DB_ERROR: failed to write counter_store[{key}]: {e}"))?;

    Ok(())
}

/// Set-once: writes `now` only when the key is absent, always returns the stored value.
pub(crate) fn ensure_first_install_date(conn: &Connection, now: i64) -> Result<i64, String> {
    conn.execute(
        "INSERT OR IGNORE INTO counter_store(key, value, updated_at) VALUES (?1, ?2, ?3)",
        params![KEY_FIRST_INSTALL_DATE, now, now],
    )
    .map_err(|e| format!("DB_ERROR: failed to init {KEY_FIRST_INSTALL_DATE}: {e}"))?;

    get_i64(conn, KEY_FIRST_INSTALL_DATE, now)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_conn() -> Connection {
        let conn = Connection::open_in_memory().expect("open in-memory sqlite");
        conn.execute_batch(
            r#"
CREATE TABLE counter_store (
  key TEXT PRIMARY KEY,
  value INTEGER NOT NULL,
  updated_at INTEGER NOT NULL
);
"#,
        )
        .expect("create schema");
        conn
    }

    #[test]
    fn get_i64_returns_default_for_missing_key() {
        let conn = setup_conn();
        assert_eq!(get_i64(&conn, KEY_TOTAL_TAPS, 0).expect("get"), 0);
        assert_eq!(get_i64(&conn, KEY_TOTAL_TAPS, 99).expect("get"), 99);
    }

    #[test]
    fn set_i64_round_trips_and_overwrites() {
        let conn = setup_conn();

        set_i64(&conn, KEY_TOTAL_TAPS, 42).expect("set 42");
        assert_eq!(get_i64(&conn, KEY_TOTAL_TAPS, 0).expect("get"), 42);

        set_i64(&conn, KEY_TOTAL_TAPS, 43).expect("set 43");
        assert_eq!(get_i64(&conn, KEY_TOTAL_TAPS, 0).expect("get"), 43);
    }

    #[test]
    fn keys_are_independent() {
        let conn = setup_conn();

        set_i64(&conn, KEY_TOTAL_TAPS, 10).expect("set taps");
        set_i64(&conn, KEY_UNLOCKED_ACHIEVEMENTS_COUNT, 1).expect("set unlocked");

        assert_eq!(get_i64(&conn, KEY_TOTAL_TAPS, 0).expect("get"), 10);
        assert_eq!(
            get_i64(&conn, KEY_UNLOCKED_ACHIEVEMENTS_COUNT, 0).expect("get"),
            1
        );
    }

    #[test]
    fn first_install_date_is_set_once() {
        let conn = setup_conn();

        assert_eq!(ensure_first_install_date(&conn, 1000).expect("first"), 1000);
        assert_eq!(
            ensure_first_install_date(&conn, 2000).expect("second"),
            1000
        );
        assert_eq!(
            get_i64(&conn, KEY_FIRST_INSTALL_DATE, 0).expect("get"),
            1000
        );
    }
}
