//! Structured logging setup for the command-line tool

use tracing_subscriber::{EnvFilter, fmt};

/// Pick a log filter from `-v` repetitions and `--quiet`
///
/// With no flags, `RUST_LOG` is honored and falls back to `info`.
pub fn filter_for(verbosity: u8, quiet: bool) -> EnvFilter {
    if quiet {
        return EnvFilter::new("error");
    }
    match verbosity {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    }
}

/// Install a stderr subscriber
///
/// Returns `false` if a global subscriber was already set.
pub fn init(verbosity: u8, quiet: bool) -> bool {
    fmt()
        .with_env_filter(filter_for(verbosity, quiet))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
