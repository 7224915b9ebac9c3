//! Usage: App-level Tauri commands (about info, data reset, lifecycle).

use crate::app_state::clear_counter;
use crate::{app_paths, blocking, data_management};

#[derive(Debug, Clone, serde::Serialize)]
pub(crate) struct AppAboutInfo {
    os: String,
    arch: String,
    profile: String,
    app_version: String,
}

#[tauri::command]
pub(crate) fn app_about_get() -> AppAboutInfo {
    AppAboutInfo {
        os: std::env::consts::OS.to_string(),
        arch: std::env::consts::ARCH.to_string(),
        profile: if cfg!(debug_assertions) {
            "debug".to_string()
        } else {
            "release".to_string()
        },
        app_version: env!("CARGO_PKG_VERSION").to_string(),
    }
}

#[tauri::command]
pub(crate) async fn app_data_dir_get(app: tauri::AppHandle) -> Result<String, String> {
    blocking::run("app_data_dir_get", move || {
        Ok(app_paths::app_data_dir(&app)?.to_string_lossy().to_string())
    })
    .await
}

/// Full wipe (settings + db). The frontend confirms first and restarts after.
#[tauri::command]
pub(crate) async fn app_data_reset(app: tauri::AppHandle) -> Result<bool, String> {
    blocking::run("app_data_reset", move || {
        let removed = data_management::app_data_reset(&app)?;
        clear_counter(&app);
        tracing::info!("app data reset completed");
        Ok(removed)
    })
    .await
}

#[tauri::command]
pub(crate) fn app_exit(app: tauri::AppHandle) -> Result<bool, String> {
    std::thread::spawn(move || {
        std::thread::sleep(std::time::Duration::from_millis(200));
        app.exit(0);
    });
    Ok(true)
}

#[tauri::command]
pub(crate) fn app_restart(app: tauri::AppHandle) -> Result<bool, String> {
    std::thread::spawn(move || {
        std::thread::sleep(std::time::Duration::from_millis(200));
        tauri::async_runtime::block_on(crate::cleanup::cleanup_before_exit(&app));
        app.request_restart();
    });
    Ok(true)
}
