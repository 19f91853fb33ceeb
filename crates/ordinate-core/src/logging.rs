//! Logging setup on top of `tracing-subscriber`.

use tracing_subscriber::EnvFilter;

/// Directive used when `RUST_LOG` is not set.
pub const DEFAULT_DIRECTIVE: &str = "info,ordinate=debug";

/// Install a formatting subscriber filtered by `RUST_LOG`, falling back to
/// [`DEFAULT_DIRECTIVE`].
///
/// Calling this more than once is harmless; only the first call installs a
/// subscriber.
pub fn init() {
    init_with_directive(DEFAULT_DIRECTIVE);
}

/// Install a formatting subscriber using `directive` unless `RUST_LOG` is set.
pub fn init_with_directive(directive: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));
    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_err()
    {
        tracing::trace!("global subscriber already installed");
    }
}

/// Install a test-friendly subscriber that writes through the test harness.
pub fn init_for_tests() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("trace"))
        .with_test_writer()
        .try_init();
}
