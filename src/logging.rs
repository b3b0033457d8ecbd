use tracing_subscriber::EnvFilter;

/// Log level for a `-v` count. Quiet by default so status lines stand alone.
pub fn level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "error",
        1 => "warn",
        2 => "info",
        3 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber, writing to stderr.
pub fn init(verbosity: u8) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level(verbosity)))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
