//! Diagnostic logging on stderr.
//!
//! Stdout carries only the banner and matched lines, so every tracing event
//! goes to stderr. The level comes from the `-v` count alone; RUST_LOG is not
//! read.

use tracing_subscriber::EnvFilter;

pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

pub fn init(verbosity: u8) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level_for(verbosity)))
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!(
        version = env!("CARGO_PKG_VERSION"),
        verbosity,
        "Logging initialised"
    );
}
