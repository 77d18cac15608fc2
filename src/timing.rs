use std::time::{Duration, Instant};

/// Runs `f`, logging how long it took under `label`.
///
/// # Returns
///
/// The value produced by `f` together with the elapsed wall-clock time.
pub fn timed<T>(label: &str, f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let value = f();
    let elapsed = start.elapsed();

    info!("'{label}' took {:.3} sec.", elapsed.as_secs_f64());
    (value, elapsed)
}
