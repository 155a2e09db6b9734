use tracing_subscriber::{fmt, EnvFilter};

/// Initialize logging.
///
/// Reads the filter from `RUST_LOG` (default: `info`), e.g. `RUST_LOG=booth_plan_rs=debug`
/// to see every solver iteration. Logs go to stderr so rendered tables stay on stdout.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .init();
}

/// Initialize logging for tests at debug level.
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
