//! Usage: App data management helpers (full reset of settings + db files).

use crate::app_paths;
use crate::db;
use std::io;
use std::path::{Path, PathBuf};

fn remove_file_if_exists(path: &Path) -> Result<bool, String> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(err) => Err(format!(
            "failed to remove {}: {err}",
            path.to_string_lossy()
        )),
    }
}

fn db_related_paths(db_path: &Path) -> (PathBuf, PathBuf) {
    let wal_path = {
        let mut out = db_path.to_path_buf().into_os_string();
        out.push("-wal");
        PathBuf::from(out)
    };
    let shm_path = {
        let mut out = db_path.to_path_buf().into_os_string();
        out.push("-shm");
        PathBuf::from(out)
    };
    (wal_path, shm_path)
}

/// Removes every persisted artifact (settings.json + sqlite db). The caller is
/// expected to restart the app afterwards; live pool connections keep pointing
/// at the unlinked file until then.
pub(crate) fn app_data_reset(app: &tauri::AppHandle) -> Result<bool, String> {
    // Ensure the app data dir exists.
    let dir = app_paths::app_data_dir(app)?;

    // settings.json (+ temp artifact)
    let settings_path = dir.join("settings.json");
    let settings_tmp_path = dir.join("settings.json.tmp");
    let _ = remove_file_if_exists(&settings_tmp_path)?;
    let _ = remove_file_if_exists(&settings_path)?;

    // sqlite db (+ wal/shm)
    let db_path = db::db_path(app)?;
    let (wal_path, shm_path) = db_related_paths(&db_path);
    let _ = remove_file_if_exists(&wal_path)?;
    let _ = remove_file_if_exists(&shm_path)?;
    let _ = remove_file_if_exists(&db_path)?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn db_related_paths_appends_wal_and_shm_suffixes() {
        let (wal, shm) = db_related_paths(Path::new("/tmp/tapme.db"));
        assert_eq!(wal, PathBuf::from("/tmp/tapme.db-wal"));
        assert_eq!(shm, PathBuf::from("/tmp/tapme.db-shm"));
    }

    #[test]
    fn remove_file_if_exists_is_quiet_for_missing_files() {
        let removed =
            remove_file_if_exists(Path::new("/tmp/tapme-test-definitely-missing")).expect("ok");
        assert!(!removed);
    }
}
