//! Usage: User-facing notices.
//!
//! Rust code calls `notice::emit(app, payload)`; the frontend listens for the
//! event, mirrors it in the status line and forwards it as a system
//! notification.

use tauri::Emitter;

pub(crate) const NOTICE_EVENT_NAME: &str = "notice:notify";

const NOTICE_PREFIX: &str = "IdleMute";

#[derive(Debug, Clone, Copy, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum NoticeLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, serde::Serialize)]
pub(crate) struct NoticeEventPayload {
    pub(crate) level: NoticeLevel,
    pub(crate) title: String,
    pub(crate) body: String,
}

fn default_title(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Success => "Saved",
        NoticeLevel::Error => "Something went wrong",
    }
}

pub(crate) fn build(level: NoticeLevel, body: String) -> NoticeEventPayload {
    NoticeEventPayload {
        level,
        title: format!("{NOTICE_PREFIX} · {}", default_title(level)),
        body,
    }
}

pub(crate) fn emit(app: &tauri::AppHandle, payload: NoticeEventPayload) -> Result<(), String> {
    app.emit(NOTICE_EVENT_NAME, payload)
        .map_err(|e| format!("NOTICE_EMIT: {e}"))?;
    Ok(())
}
