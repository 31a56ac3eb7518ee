//! Usage: OS autostart registry adapter backed by the autostart plugin.
//!
//! The registry is the sole owner of the preference; this adapter only
//! forwards queries and writes. Callers cache the result and must never flip
//! their cached copy without a confirmed write going through here first.

use crate::screen::bridge::AutostartPort;

pub(crate) struct AppAutostart<'a>(pub(crate) &'a tauri::AppHandle);

#[cfg(desktop)]
impl AutostartPort for AppAutostart<'_> {
    fn is_enabled(&self) -> Result<bool, String> {
        use tauri_plugin_autostart::ManagerExt;
        self.0.autolaunch().is_enabled().map_err(|e| e.to_string())
    }

    fn enable(&self) -> Result<(), String> {
        use tauri_plugin_autostart::ManagerExt;
        self.0.autolaunch().enable().map_err(|e| e.to_string())
    }

    fn disable(&self) -> Result<(), String> {
        use tauri_plugin_autostart::ManagerExt;
        self.0.autolaunch().disable().map_err(|e| e.to_string())
    }
}

#[cfg(not(desktop))]
impl AutostartPort for AppAutostart<'_> {
    fn is_enabled(&self) -> Result<bool, String> {
        Err("autostart is not available on this platform".to_string())
    }

    fn enable(&self) -> Result<(), String> {
        Err("autostart is not available on this platform".to_string())
    }

    fn disable(&self) -> Result<(), String> {
        Err("autostart is not available on this platform".to_string())
    }
}
