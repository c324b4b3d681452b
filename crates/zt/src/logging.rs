//! Diagnostic logging of the test engine itself.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Environment variable holding the log filter, e.g. `ZT_LOG=zt_core=debug`.
pub const LOG_ENV: &str = "ZT_LOG";

/// Install a stderr logger filtered by [`LOG_ENV`].
///
/// Logging is off unless the variable is set, so test output stays exactly
/// as the runner writes it. Does nothing if a global subscriber exists.
pub fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("off"));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time(),
        )
        .try_init();
}
