//! Usage: Tracing initialization (stdout plus a rotating file in the app data dir).

use crate::app_paths;
use std::sync::OnceLock;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const LOG_DIR_NAME: &str = "logs";
const LOG_FILE_PREFIX: &str = "idle-mute.log";
const LOG_FILTER_ENV: &str = "IDLE_MUTE_LOG";
const DEFAULT_LOG_FILTER: &str = "info";

// Keeps the non-blocking writer alive for the lifetime of the process.
static FILE_WRITER_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

pub(crate) fn init(app: &tauri::AppHandle) {
    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let stdout_layer = tracing_subscriber::fmt::layer().with_target(false);

    let file_layer = match app_paths::app_data_dir(app) {
        Ok(dir) => {
            let appender = tracing_appender::rolling::daily(dir.join(LOG_DIR_NAME), LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let _ = FILE_WRITER_GUARD.set(guard);
            Some(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(writer),
            )
        }
        Err(err) => {
            eprintln!("log file unavailable, logging to stdout only: {err}");
            None
        }
    };

    // Route `log`-crate records (from dependencies) into tracing.
    let _ = tracing_log::LogTracer::init();

    // try_init: a second call (tests, dev reload) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init();
}
