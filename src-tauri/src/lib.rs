mod app;
mod commands;
mod domain;
mod infra;
mod shared;

pub(crate) use app::{app_state, cleanup, feedback, notice};
pub(crate) use domain::{achievements, counter, store_catalog};
pub(crate) use infra::{app_paths, counter_store, data_management, db, settings};
pub(crate) use shared::blocking;

use app_state::{ensure_db_ready, with_counter, CounterState, DbInitState};
use commands::*;
use shared::time::now_unix_seconds;
use tauri::Emitter;
use tauri::Manager;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let app = tauri::Builder::default()
        .manage(DbInitState::default())
        .manage(CounterState::default())
        .plugin(tauri_plugin_opener::init())
        .setup(|app| {
            crate::app::logging::init(app.handle());

            let app_handle = app.handle().clone();
            tauri::async_runtime::spawn(async move {
                let db_state = app_handle.state::<DbInitState>();
                let db = match ensure_db_ready(app_handle.clone(), db_state.inner()).await {
                    Ok(db) => db,
                    Err(err) => {
                        tracing::error!("数据库初始化失败: {}", err);
                        return;
                    }
                };

                let snapshot = match blocking::run("startup_counter_load", {
                    let app_handle = app_handle.clone();
                    let db = db.clone();
                    move || {
                        {
                            let conn = db.open_connection()?;
                            counter_store::ensure_first_install_date(&conn, now_unix_seconds())?;
                        }
                        with_counter(&app_handle, &db, |service, _conn| Ok(service.snapshot()))
                    }
                })
                .await
                {
                    Ok(snapshot) => snapshot,
                    Err(err) => {
                        tracing::error!("计数器初始化失败: {}", err);
                        return;
                    }
                };

                tracing::info!(
                    count = snapshot.count,
                    unlocked = snapshot.unlocked_count,
                    "counter ready"
                );
                let _ = app_handle.emit(COUNTER_EVENT_NAME, snapshot);
            });

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            tap_increment,
            tap_reset,
            tap_stats_get,
            achievements_list,
            store_catalog_get,
            settings_get,
            settings_set,
            app_about_get,
            app_data_dir_get,
            app_data_reset,
            app_exit,
            app_restart
        ])
        .build(tauri::generate_context!())
        .expect("error while building tauri application");

    app.run(|app_handle, event| {
        if let tauri::RunEvent::ExitRequested { api, code, .. } = &event {
            // Note: `prevent_exit` is ignored for restart requests.
            // For app_restart we run cleanup explicitly before requesting restart.
            if *code != Some(tauri::RESTART_EXIT_CODE) {
                tracing::info!("收到退出请求，开始清理...");
                api.prevent_exit();

                let app_handle = app_handle.clone();
                tauri::async_runtime::spawn(async move {
                    cleanup::cleanup_before_exit(&app_handle).await;
                    std::process::exit(0);
                });
            }
        }
    });
}
