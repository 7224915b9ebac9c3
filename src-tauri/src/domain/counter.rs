//! Usage: The single authoritative tap counter (in-memory value mirrored to counter_store).

use crate::achievements;
use crate::counter_store;
use rusqlite::Connection;
use serde::Serialize;

/// Result of one counter mutation, also the `counter:changed` event payload.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct TapSnapshot {
    pub count: i64,
    pub unlocked_count: i64,
    pub newly_unlocked: Option<String>,
}

#[derive(Debug)]
pub(crate) struct TapCounterService {
    count: i64,
}

impl TapCounterService {
    pub(crate) fn load(conn: &Connection) -> Result<Self, String> {
        let count = counter_store::get_i64(conn, counter_store::KEY_TOTAL_TAPS, 0)?;
        Ok(Self {
            count: count.max(0),
        })
    }

    pub(crate) fn count(&self) -> i64 {
        self.count
    }

    pub(crate) fn snapshot(&self) -> TapSnapshot {
        TapSnapshot {
            count: self.count,
            unlocked_count: achievements::unlocked_count(self.count),
            newly_unlocked: None,
        }
    }

    /// Adds one tap and mirrors the new state to storage. Saturates at i64::MAX.
    pub(crate) fn increment(&mut self, conn: &Connection) -> Result<TapSnapshot, String> {
        let unlocked_before = achievements::unlocked_count(self.count);

        self.count = self.count.saturating_add(1);
        let unlocked_count = achievements::unlocked_count(self.count);
        self.persist(conn, unlocked_count)?;

        let newly_unlocked = if unlocked_count > unlocked_before {
            achievements::unlocked_tiers(self.count)
                .last()
                .map(|tier| tier.name.to_string())
        } else {
            None
        };

        Ok(TapSnapshot {
            count: self.count,
            unlocked_count,
            newly_unlocked,
        })
    }

    /// Back to zero. Consent is the caller's job; this component does not ask.
    pub(crate) fn reset(&mut self, conn: &Connection) -> Result<TapSnapshot, String> {
        self.count = 0;
        self.persist(conn, 0)?;

        Ok(TapSnapshot {
            count: 0,
            unlocked_count: 0,
            newly_unlocked: None,
        })
    }

    fn persist(&self, conn: &Connection, unlocked_count: i64) -> Result<(), String> {
        counter_store::set_i64(conn, counter_store::KEY_TOTAL_TAPS, self.count)?;
        counter_store::set_i64(
            conn,
            counter_store::KEY_UNLOCKED_ACHIEVEMENTS_COUNT,
            unlocked_count,
        )?;
        Ok(())
    }
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
    fn load_defaults_to_zero_on_empty_store() {
        let conn = setup_conn();
        let service = TapCounterService::load(&conn).expect("load");
        assert_eq!(service.count(), 0);
        assert_eq!(service.snapshot().unlocked_count, 0);
    }

    #[test]
    fn increment_adds_exactly_one_per_call() {
        let conn = setup_conn();
        let mut service = TapCounterService::load(&conn).expect("load");

        for expected in 1..=25 {
            let snapshot = service.increment(&conn).expect("increment");
            assert_eq!(snapshot.count, expected);
        }
        assert_eq!(service.count(), 25);
    }

    #[test]
    fn every_mutation_is_mirrored_to_storage() {
        let conn = setup_conn();
        let mut service = TapCounterService::load(&conn).expect("load");

        for _ in 0..12 {
            service.increment(&conn).expect("increment");
        }
        assert_eq!(
            counter_store::get_i64(&conn, counter_store::KEY_TOTAL_TAPS, 0).expect("get"),
            12
        );
        assert_eq!(
            counter_store::get_i64(&conn, counter_store::KEY_UNLOCKED_ACHIEVEMENTS_COUNT, -1)
                .expect("get"),
            1
        );

        service.reset(&conn).expect("reset");
        assert_eq!(
            counter_store::get_i64(&conn, counter_store::KEY_TOTAL_TAPS, -1).expect("get"),
            0
        );
        assert_eq!(
            counter_store::get_i64(&conn, counter_store::KEY_UNLOCKED_ACHIEVEMENTS_COUNT, -1)
                .expect("get"),
            0
        );
    }

    #[test]
    fn load_restores_the_persisted_count() {
        let conn = setup_conn();
        counter_store::set_i64(&conn, counter_store::KEY_TOTAL_TAPS, 42).expect("seed");

        let service = TapCounterService::load(&conn).expect("load");
        assert_eq!(service.count(), 42);
    }

    #[test]
    fn load_clamps_tampered_negative_counts_to_zero() {
        let conn = setup_conn();
        counter_store::set_i64(&conn, counter_store::KEY_TOTAL_TAPS, -5).expect("seed");

        let service = TapCounterService::load(&conn).expect("load");
        assert_eq!(service.count(), 0);
    }

    #[test]
    fn tenth_tap_reports_novice_as_newly_unlocked() {
        let conn = setup_conn();
        counter_store::set_i64(&conn, counter_store::KEY_TOTAL_TAPS, 9).expect("seed");
        let mut service = TapCounterService::load(&conn).expect("load");

        assert_eq!(achievements::unlocked_count(service.count()), 0);

        let snapshot = service.increment(&conn).expect("increment");
        assert_eq!(snapshot.count, 10);
        assert_eq!(snapshot.unlocked_count, 1);
        assert_eq!(snapshot.newly_unlocked.as_deref(), Some("Novice"));

        let snapshot = service.increment(&conn).expect("increment");
        assert_eq!(snapshot.count, 11);
        assert_eq!(snapshot.newly_unlocked, None);
    }

    #[test]
    fn hundred_thousandth_tap_unlocks_the_last_tier() {
        let conn = setup_conn();
        counter_store::set_i64(&conn, counter_store::KEY_TOTAL_TAPS, 99999).expect("seed");
        let mut service = TapCounterService::load(&conn).expect("load");

        let snapshot = service.increment(&conn).expect("increment");
        assert_eq!(snapshot.count, 100000);
        assert_eq!(snapshot.unlocked_count, 7);
        assert_eq!(snapshot.newly_unlocked.as_deref(), Some("God"));
    }

    #[test]
    fn reset_zeroes_any_prior_count() {
        let conn = setup_conn();
        counter_store::set_i64(&conn, counter_store::KEY_TOTAL_TAPS, 500).expect("seed");
        let mut service = TapCounterService::load(&conn).expect("load");

        let snapshot = service.reset(&conn).expect("reset");
        assert_eq!(snapshot.count, 0);
        assert_eq!(snapshot.unlocked_count, 0);
        assert_eq!(service.count(), 0);
    }

    #[test]
    fn increment_saturates_at_i64_max() {
        let conn = setup_conn();
        counter_store::set_i64(&conn, counter_store::KEY_TOTAL_TAPS, i64::MAX).expect("seed");
        let mut service = TapCounterService::load(&conn).expect("load");

        let snapshot = service.increment(&conn).expect("increment");
        assert_eq!(snapshot.count, i64::MAX);
        assert_eq!(
            counter_store::get_i64(&conn, counter_store::KEY_TOTAL_TAPS, 0).expect("get"),
            i64::MAX
        );
    }
}
