//! Usage: Run blocking work off the async runtime with a labeled join error.

pub(crate) async fn run<T, F>(name: &'static str, task: F) -> Result<T, String>
where
    F: FnOnce() -> Result<T, String> + Send + 'static,
    T: Send + 'static,
{
    tauri::async_runtime::spawn_blocking(task)
        .await
        .map_err(|e| format!("TASK_JOIN: {name}: {e}"))?
}
