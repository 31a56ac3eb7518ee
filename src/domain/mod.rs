//! Usage: Core settings-synchronization logic, independent of the Tauri runtime.

pub(crate) mod screen;
