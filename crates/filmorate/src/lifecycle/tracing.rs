//! Subscriber setup shared by the binary and ad-hoc tools.

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG`.
///
/// Records from the `log` facade, such as actix-web's access log, are
/// forwarded into the same output.
///
/// # Panics
///
/// Panics if a global subscriber is already installed.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
