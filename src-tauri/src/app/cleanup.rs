//! Usage: Best-effort cleanup hooks for app lifecycle events (exit/restart).

use super::app_state::DbInitState;
use crate::blocking;
use std::sync::atomic::{AtomicBool, Ordering};
use tauri::Manager;

static CLEANUP_STARTED: AtomicBool = AtomicBool::new(false);

pub(crate) async fn cleanup_before_exit(app: &tauri::AppHandle) {
    if CLEANUP_STARTED.swap(true, Ordering::SeqCst) {
        return;
    }

    let db = {
        let state = app.state::<DbInitState>();
        state.0.get().and_then(|r| r.as_ref().ok()).cloned()
    };
    let Some(db) = db else {
        return;
    };

    match blocking::run("cleanup_wal_checkpoint", move || {
        let conn = db.open_connection()?;
        conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")
            .map_err(|e| format!("DB_ERROR: wal checkpoint failed: {e}"))
    })
    .await
    {
        Ok(()) => tracing::info!("退出清理：已完成 WAL checkpoint"),
        Err(err) => tracing::warn!("退出清理：WAL checkpoint 失败: {}", err),
    }
}
