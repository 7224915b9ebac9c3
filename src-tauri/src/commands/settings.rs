//! Usage: Settings related Tauri commands (sound/haptics toggles).

use crate::{blocking, settings};

#[tauri::command]
pub(crate) async fn settings_get(app: tauri::AppHandle) -> Result<settings::AppSettings, String> {
    blocking::run("settings_get", move || settings::read(&app)).await
}

#[tauri::command]
pub(crate) async fn settings_set(
    app: tauri::AppHandle,
    sound_enabled: bool,
    haptics_enabled: bool,
) -> Result<settings::AppSettings, String> {
    blocking::run("settings_set", move || {
        let mut cfg = settings::read(&app).unwrap_or_default();
        cfg.sound_enabled = sound_enabled;
        cfg.haptics_enabled = haptics_enabled;
        settings::write(&app, &cfg)
    })
    .await
}
