//! Usage: Shared Tauri-managed state for the settings screen.

use crate::screen::ScreenState;
use std::sync::Mutex;

/// The screen's in-memory state, shared by the startup reconciliation and
/// every command. One lock over the whole state serializes concurrent
/// toggle/save sequences without changing single-operation behavior.
#[derive(Default)]
pub(crate) struct ScreenStateCell(pub(crate) Mutex<ScreenState>);
