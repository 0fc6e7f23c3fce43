//! Tracing subscriber setup

use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter directive
pub const LOG_ENV: &str = "MOODLOG_LOG";

/// Install a stderr subscriber. MOODLOG_LOG overrides the level chosen by `verbose`.
pub fn init(verbose: bool) {
    let default = if verbose { "moodlog=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    // a subscriber may already be installed when embedded or under test
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
