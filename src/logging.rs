//! Diagnostic logging to stderr.
//!
//! `RUST_LOG` wins when set; otherwise `-v` raises the level from `warn`.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Level directive for a `-v` count.
pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init(verbosity: u8, json: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_for(verbosity)));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!json)
        .with_target(verbosity >= 2);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init();
}
