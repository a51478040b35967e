//! Logging initialization

/// Initialize the logging system
///
/// Uses env_logger with default filter level of `info`.
/// Override with RUST_LOG environment variable.
///
/// # Example
/// ```
/// pointcanvas::core::logging::init();
/// log::info!("Canvas demo started");
/// ```
pub fn init() {
    // A second call (tests, embedding hosts) must not panic
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    ).try_init();
}
