//! Usage: Persisted application settings (schema + read/write helpers).

use crate::app_paths;
use crate::shared::fs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub(crate) const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct AppSettings {
    pub schema_version: u32,
    pub sound_enabled: bool,
    pub haptics_enabled: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            sound_enabled: true,
            haptics_enabled: true,
        }
    }
}

fn settings_path(app: &tauri::AppHandle) -> Result<PathBuf, String> {
    Ok(app_paths::app_data_dir(app)?.join("settings.json"))
}

fn parse_settings_json(content: &str) -> Result<AppSettings, String> {
    serde_json::from_str(content).map_err(|e| format!("failed to parse settings.json: {e}"))
}

pub(crate) fn read(app: &tauri::AppHandle) -> Result<AppSettings, String> {
    let path = settings_path(app)?;

    let Some(bytes) = fs::read_optional_file(&path)? else {
        let settings = AppSettings::default();
        // Best-effort: create default settings.json on first read to make the config discoverable/editable.
        let _ = write(app, &settings);
        return Ok(settings);
    };

    let content =
        String::from_utf8(bytes).map_err(|e| format!("failed to read settings: {e}"))?;
    let mut settings = parse_settings_json(&content)?;

    if settings.schema_version != SCHEMA_VERSION {
        settings.schema_version = SCHEMA_VERSION;
        // Best-effort: persist the stamped schema_version while keeping read semantics.
        let _ = write(app, &settings);
    }

    Ok(settings)
}

pub(crate) fn write(app: &tauri::AppHandle, settings: &AppSettings) -> Result<AppSettings, String> {
    let path = settings_path(app)?;
    let content = serde_json::to_vec_pretty(settings)
        .map_err(|e| format!("failed to serialize settings: {e}"))?;

    fs::write_file_atomic(&path, &content)?;

    Ok(*settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_missing_fields_falls_back_to_defaults() {
        let settings = parse_settings_json("{}").expect("parse");
        assert_eq!(settings.schema_version, SCHEMA_VERSION);
        assert!(settings.sound_enabled);
        assert!(settings.haptics_enabled);
    }

    #[test]
    fn parse_keeps_explicit_toggles() {
        let settings =
            parse_settings_json(r#"{"schema_version":1,"sound_enabled":false,"haptics_enabled":true}"#)
                .expect("parse");
        assert!(!settings.sound_enabled);
        assert!(settings.haptics_enabled);
    }

    #[test]
    fn parse_rejects_malformed_json() {
        let err = parse_settings_json("{not json").expect_err("must fail");
        assert!(err.contains("failed to parse settings.json"), "{err}");
    }

    #[test]
    fn settings_serialize_round_trip() {
        let settings = AppSettings {
            schema_version: SCHEMA_VERSION,
            sound_enabled: false,
            haptics_enabled: false,
        };
        let json = serde_json::to_string(&settings).expect("serialize");
        let parsed = parse_settings_json(&json).expect("parse");
        assert!(!parsed.sound_enabled);
        assert!(!parsed.haptics_enabled);
    }
}
