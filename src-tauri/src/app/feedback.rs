//! Usage: Per-tap feedback event (sound cue / haptic pulse), fire-and-forget.

use tauri::Emitter;

pub(crate) const FEEDBACK_EVENT_NAME: &str = "feedback:tap";

#[derive(Debug, Clone, Copy, serde::Serialize)]
pub(crate) struct FeedbackEventPayload {
    pub sound: bool,
    pub haptics: bool,
}

/// Never blocks the counter mutation and never reports failure to the caller;
/// emit errors are logged and swallowed.
pub(crate) fn notify_tap(app: &tauri::AppHandle, sound_enabled: bool, haptics_enabled: bool) {
    if !sound_enabled && !haptics_enabled {
        return;
    }

    let payload = FeedbackEventPayload {
        sound: sound_enabled,
        haptics: haptics_enabled,
    };
    if let Err(err) = app.emit(FEEDBACK_EVENT_NAME, payload) {
        tracing::warn!("tap feedback emit failed: {err}");
    }
}
