//! Log setup for the tfscaffold binary.
//!
//! Logs go to stderr so templates printed to stdout stay clean. `RUST_LOG`
//! takes precedence over the `-v`/`-q` flags when it is set.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT_LOGGING: Once = Once::new();

/// Filter directive for a verbosity level.
pub fn level_for(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init_logging(verbose: u8, quiet: bool) {
    INIT_LOGGING.call_once(|| {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::new(level_for(verbose, quiet))
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
