//! Usage: Settings-screen commands (initialize / save / autostart toggle).

use crate::app_state::ScreenStateCell;
use crate::autostart::AppAutostart;
use crate::inactivity::InactivityState;
use crate::screen::bridge::Bridge;
use crate::screen::{ScreenState, DEFAULT_TIMEOUT_MINUTES};
use crate::settings::SettingsStore;
use crate::shared::mutex_ext::MutexExt;
use crate::{blocking, notice};
use tauri::Manager;

const MIN_TIMEOUT_MINUTES: u32 = 1;
const MAX_TIMEOUT_MINUTES: u32 = 24 * 60;

#[tauri::command]
pub(crate) async fn settings_screen_init(app: tauri::AppHandle) -> Result<ScreenState, String> {
    blocking::run("settings_screen_init", move || screen_init_blocking(&app)).await
}

#[tauri::command]
pub(crate) async fn inactivity_timeout_save(
    app: tauri::AppHandle,
    minutes: Option<u32>,
) -> Result<ScreenState, String> {
    let requested = clamp_requested_minutes(minutes);

    let outcome = blocking::run("inactivity_timeout_save", {
        let app = app.clone();
        move || save_blocking(&app, requested)
    })
    .await;

    match &outcome {
        Ok(state) => {
            let _ = notice::emit(
                &app,
                notice::build(
                    notice::NoticeLevel::Success,
                    format!(
                        "Audio will mute after {} minute(s) of inactivity.",
                        state.timeout_minutes
                    ),
                ),
            );
        }
        Err(err) => {
            let _ = notice::emit(&app, notice::build(notice::NoticeLevel::Error, err.clone()));
        }
    }

    outcome
}

#[tauri::command]
pub(crate) async fn autostart_toggle(app: tauri::AppHandle) -> Result<ScreenState, String> {
    let outcome = blocking::run("autostart_toggle", {
        let app = app.clone();
        move || toggle_blocking(&app)
    })
    .await;

    if let Err(err) = &outcome {
        let _ = notice::emit(&app, notice::build(notice::NoticeLevel::Error, err.clone()));
    }

    outcome
}

/// Startup path shares the exact command behavior; also called from `setup`.
pub(crate) fn screen_init_blocking(app: &tauri::AppHandle) -> Result<ScreenState, String> {
    let store = SettingsStore::for_app(app)?;
    let screen_cell = app.state::<ScreenStateCell>();
    let inactivity = app.state::<InactivityState>();

    let mut ui = screen_cell.0.lock_or_recover();
    let mut bridge = Bridge::new(&store, AppAutostart(app), inactivity.inner(), *ui);
    bridge.initialize();
    *ui = bridge.state();
    Ok(*ui)
}

fn save_blocking(app: &tauri::AppHandle, minutes: u32) -> Result<ScreenState, String> {
    let store = SettingsStore::for_app(app)?;
    let screen_cell = app.state::<ScreenStateCell>();
    let inactivity = app.state::<InactivityState>();

    let mut ui = screen_cell.0.lock_or_recover();
    let mut bridge = Bridge::new(&store, AppAutostart(app), inactivity.inner(), *ui);
    let result = bridge.save(minutes);
    // Written back even on failure: the edited value stays visible while the
    // error notice tells the user the save did not take.
    *ui = bridge.state();
    result.map(|()| *ui)
}

fn toggle_blocking(app: &tauri::AppHandle) -> Result<ScreenState, String> {
    let store = SettingsStore::for_app(app)?;
    let screen_cell = app.state::<ScreenStateCell>();
    let inactivity = app.state::<InactivityState>();

    let mut ui = screen_cell.0.lock_or_recover();
    let mut bridge = Bridge::new(&store, AppAutostart(app), inactivity.inner(), *ui);
    let result = bridge.toggle_autostart();
    *ui = bridge.state();
    result.map(|_| *ui)
}

/// Absent input falls back to the default; everything else is clamped into
/// the range the monitor accepts.
fn clamp_requested_minutes(minutes: Option<u32>) -> u32 {
    minutes
        .unwrap_or(DEFAULT_TIMEOUT_MINUTES)
        .clamp(MIN_TIMEOUT_MINUTES, MAX_TIMEOUT_MINUTES)
}
