//! Usage: Application layer (managed state, logging, notices, tray/window lifecycle).

pub(crate) mod app_state;
pub(crate) mod logging;
pub(crate) mod notice;
pub(crate) mod resident;
