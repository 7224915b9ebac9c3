//! Usage: Achievement screen related Tauri commands.

use crate::app_state::{ensure_db_ready, with_counter, DbInitState};
use crate::{achievements, blocking};

#[tauri::command]
pub(crate) async fn achievements_list(
    app: tauri::AppHandle,
    db_state: tauri::State<'_, DbInitState>,
) -> Result<Vec<achievements::AchievementRow>, String> {
    let db = ensure_db_ready(app.clone(), db_state.inner()).await?;
    blocking::run("achievements_list", move || {
        with_counter(&app, &db, |service, _conn| {
            Ok(achievements::list_rows(service.count()))
        })
    })
    .await
}
