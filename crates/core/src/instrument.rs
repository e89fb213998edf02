//! Timing and logging wrapper for request handlers.

use std::fmt::Display;
use std::future::Future;
use std::time::Instant;

/// Run `fut` to completion, logging its outcome and wall-clock duration.
///
/// Exactly one log line is written per invocation: informational on
/// success, error severity on failure. The value (or error) is returned
/// unchanged, so wrapping a handler body does not alter its contract.
///
/// The duration is measured from the first poll to completion, so it spans
/// any suspension points inside `fut`. The start instant lives on this
/// future's own stack; concurrent invocations time themselves independently.
pub async fn instrument<Fut, T, E>(name: &str, fut: Fut) -> Result<T, E>
where
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    let start = Instant::now();
    match fut.await {
        Ok(value) => {
            let elapsed = start.elapsed().as_secs_f64();
            tracing::info!("Request {name} completed in {elapsed:.2}s");
            Ok(value)
        }
        Err(err) => {
            let elapsed = start.elapsed().as_secs_f64();
            tracing::error!("Request {name} failed after {elapsed:.2}s: {err}");
            Err(err)
        }
    }
}
