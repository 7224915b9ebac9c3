//! Usage: Store screen related Tauri commands (display-only catalog).

use crate::store_catalog;

#[tauri::command]
pub(crate) fn store_catalog_get() -> Vec<store_catalog::StoreUpgrade> {
    store_catalog::catalog()
}
