//! Usage: Cross-cutting utilities shared across modules (blocking offload, fs helpers, mutex recovery).

pub(crate) mod blocking;
pub(crate) mod fs;
pub(crate) mod mutex_ext;
