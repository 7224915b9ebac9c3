//! Usage: Tap counter related Tauri commands.

use crate::app_state::{ensure_db_ready, with_counter, DbInitState};
use crate::{blocking, counter, counter_store, feedback, notice, settings};
use tauri::Emitter;

pub(crate) const COUNTER_EVENT_NAME: &str = "counter:changed";

#[derive(Debug, Clone, serde::Serialize)]
pub(crate) struct TapStats {
    pub count: i64,
    pub unlocked_count: i64,
    pub first_install_date: i64,
}

#[tauri::command]
pub(crate) async fn tap_increment(
    app: tauri::AppHandle,
    db_state: tauri::State<'_, DbInitState>,
) -> Result<counter::TapSnapshot, String> {
    let db = ensure_db_ready(app.clone(), db_state.inner()).await?;
    blocking::run("tap_increment", move || {
        let cfg = settings::read(&app).unwrap_or_default();
        let snapshot = with_counter(&app, &db, |service, conn| service.increment(conn))?;

        feedback::notify_tap(&app, cfg.sound_enabled, cfg.haptics_enabled);
        let _ = app.emit(COUNTER_EVENT_NAME, snapshot.clone());
        if let Some(tier_name) = snapshot.newly_unlocked.as_deref() {
            tracing::info!(tier = %tier_name, count = snapshot.count, "achievement unlocked");
            let _ = notice::emit(
                &app,
                notice::build(
                    notice::NoticeLevel::Success,
                    None,
                    format!("Achievement unlocked: {tier_name}"),
                ),
            );
        }

        Ok(snapshot)
    })
    .await
}

/// The frontend asks for confirmation before invoking this; the counter itself does not.
#[tauri::command]
pub(crate) async fn tap_reset(
    app: tauri::AppHandle,
    db_state: tauri::State<'_, DbInitState>,
) -> Result<counter::TapSnapshot, String> {
    let db = ensure_db_ready(app.clone(), db_state.inner()).await?;
    blocking::run("tap_reset", move || {
        let snapshot = with_counter(&app, &db, |service, conn| service.reset(conn))?;

        tracing::info!("tap count reset to 0");
        let _ = app.emit(COUNTER_EVENT_NAME, snapshot.clone());

        Ok(snapshot)
    })
    .await
}

#[tauri::command]
pub(crate) async fn tap_stats_get(
    app: tauri::AppHandle,
    db_state: tauri::State<'_, DbInitState>,
) -> Result<TapStats, String> {
    let db = ensure_db_ready(app.clone(), db_state.inner()).await?;
    blocking::run("tap_stats_get", move || {
        let first_install_date = {
            let conn = db.open_connection()?;
            counter_store::get_i64(&conn, counter_store::KEY_FIRST_INSTALL_DATE, 0)?
        };
        let snapshot = with_counter(&app, &db, |service, _conn| Ok(service.snapshot()))?;

        Ok(TapStats {
            count: snapshot.count,
            unlocked_count: snapshot.unlocked_count,
            first_install_date,
        })
    })
    .await
}
