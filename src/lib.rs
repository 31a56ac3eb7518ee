mod app;
mod commands;
mod domain;
mod infra;
mod shared;

pub(crate) use app::{app_state, notice, resident};
pub(crate) use domain::screen;
pub(crate) use infra::{app_paths, autostart, inactivity, settings};
pub(crate) use shared::blocking;

use commands::*;
use infra::inactivity::InactivityState;
use tauri::Manager;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let builder = tauri::Builder::default()
        .manage(app_state::ScreenStateCell::default())
        .manage(InactivityState::default());

    #[cfg(desktop)]
    let builder = builder
        .plugin(tauri_plugin_autostart::Builder::new().build())
        .plugin(tauri_plugin_notification::init())
        .plugin(tauri_plugin_single_instance::init(|app, _argv, _cwd| {
            resident::show_main_window(app);
        }));

    builder
        .on_window_event(resident::on_window_event)
        .setup(|app| {
            crate::app::logging::init(app.handle());

            #[cfg(desktop)]
            {
                if let Err(err) = resident::setup_tray(app.handle()) {
                    tracing::error!("tray setup failed: {err}");
                }
            }

            // Reconcile the persisted timeout and the autostart registry into
            // the screen state before the window is first used.
            let app_handle = app.handle().clone();
            tauri::async_runtime::spawn(async move {
                let init = blocking::run("startup_screen_init", {
                    let app_handle = app_handle.clone();
                    move || screen_init_blocking(&app_handle)
                })
                .await;

                match init {
                    Ok(state) => {
                        let threshold = app_handle.state::<InactivityState>().current_threshold();
                        tracing::info!(
                            timeout_minutes = state.timeout_minutes,
                            autostart_enabled = state.autostart_enabled,
                            monitor_threshold_secs = threshold.as_secs(),
                            "settings screen initialized"
                        );
                    }
                    Err(err) => tracing::warn!("startup settings initialization failed: {err}"),
                }
            });

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            settings_screen_init,
            inactivity_timeout_save,
            autostart_toggle,
            app_about_get
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
