use tracing_subscriber::EnvFilter;

/// Sets up tracing once for the entire application.
///
/// The filter defaults to `info` and can be overridden via `RUST_LOG`.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
