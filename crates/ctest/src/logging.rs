/// Environment variable holding the log filter, e.g. `CTEST_LOG=ctest_harness=debug`
pub const LOG_ENV: &str = "CTEST_LOG";

/// Send the harness's `tracing` events to stderr
///
/// Does nothing unless `CTEST_LOG` is set, or if a global subscriber is
/// already installed.
pub fn init_logging() {
    if std::env::var_os(LOG_ENV).is_none() {
        return;
    }
    let filter = tracing_subscriber::EnvFilter::from_env(LOG_ENV);
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}
