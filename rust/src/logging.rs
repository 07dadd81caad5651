use tracing::Level;

/// Installs the stderr subscriber used by the binaries. Stdout is reserved
/// for the report.
pub fn init() {
    init_with_level(Level::INFO);
}

/// The first call wins; later calls are no-ops.
pub fn init_with_level(level: Level) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_names(true)
        .try_init();
}
