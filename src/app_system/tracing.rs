/// Configure tracing once at process startup.
///
/// Filtering comes from `RUST_LOG` and falls back to `info`:
///
/// ```bash
/// RUST_LOG=debug cargo run                          # include generated ids
/// RUST_LOG=smartbooking_identity=warn cargo run     # failures only
/// ```
///
/// Calling this again after a subscriber is installed is a no-op, so tests and
/// embedding services can call it freely.
pub fn setup_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .compact()
        .try_init();
}
