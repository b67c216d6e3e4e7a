//! Diagnostic logging
//!
//! Events go to stderr so stdout stays clean for `--json`. `EMOTEGEN_LOG`
//! takes an `EnvFilter` directive and overrides the `-v` count.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::config::Verbosity;

pub const LOG_ENV: &str = "EMOTEGEN_LOG";

/// Level for a `-v` count combined with the configured verbosity.
pub fn level_for(verbose: u8, verbosity: Verbosity) -> LevelFilter {
    if verbose == 0 && verbosity == Verbosity::Quiet {
        return LevelFilter::ERROR;
    }
    match verbose.max(verbosity.as_flag_count()) {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Install the global subscriber. Later calls are ignored.
pub fn init(verbose: u8, verbosity: Verbosity, ansi: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::default().add_directive(level_for(verbose, verbosity).into()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .with_target(false)
        .without_time()
        .try_init();
}
