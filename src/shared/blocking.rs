//! Usage: Run synchronous work off the async runtime, with a label for error context.

pub(crate) async fn run<T, F>(label: &str, f: F) -> Result<T, String>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, String> + Send + 'static,
{
    match tokio::task::spawn_blocking(f).await {
        Ok(result) => result,
        Err(err) => Err(format!("blocking task {label} failed to join: {err}")),
    }
}
