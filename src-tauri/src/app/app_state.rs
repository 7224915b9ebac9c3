//! Usage: Shared Tauri state types and DB initialization gate used by `commands/*`.

use crate::shared::mutex_ext::MutexExt;
use crate::{blocking, counter, db};
use rusqlite::Connection;
use std::sync::Mutex;
use tauri::Manager;
use tokio::sync::OnceCell;

#[derive(Default)]
pub(crate) struct CounterState(pub(crate) Mutex<Option<counter::TapCounterService>>);

#[derive(Default)]
pub(crate) struct DbInitState(pub(crate) OnceCell<Result<db::Db, String>>);

pub(crate) async fn ensure_db_ready(
    app: tauri::AppHandle,
    state: &DbInitState,
) -> Result<db::Db, String> {
    state
        .0
        .get_or_init(|| async move { blocking::run("db_init", move || db::init(&app)).await })
        .await
        .clone()
}

/// Runs `f` against the single authoritative counter service, loading it from
/// storage on first use. All counter access serializes behind this lock.
pub(crate) fn with_counter<T>(
    app: &tauri::AppHandle,
    db: &db::Db,
    f: impl FnOnce(&mut counter::TapCounterService, &Connection) -> Result<T, String>,
) -> Result<T, String> {
    let conn = db.open_connection()?;
    let state = app.state::<CounterState>();
    let mut guard = state.0.lock_or_recover();

    if guard.is_none() {
        *guard = Some(counter::TapCounterService::load(&conn)?);
    }
    let Some(service) = guard.as_mut() else {
        return Err("COUNTER_STATE: counter not initialized".to_string());
    };

    f(service, &conn)
}

/// Drops the in-memory counter so the next command reloads from storage.
pub(crate) fn clear_counter(app: &tauri::AppHandle) {
    let state = app.state::<CounterState>();
    let mut guard = state.0.lock_or_recover();
    *guard = None;
}
