//! Tracing setup for the client's test binaries.
//!
//! Unit tests reach this through the client's `test_bootstrap` module and the
//! integration binaries through the `ctor` hook in `tests/support/logging.rs`,
//! so both see the same filter.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

/// Quiet overall, but keep the start-screen race visible in a failing test's
/// captured output: timer arming, clicks and which source won.
pub const DEFAULT_DIRECTIVE: &str = "warn,client::transition=info";

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// `TEST_LOG` wins over `RUST_LOG`; with neither set, [`DEFAULT_DIRECTIVE`].
pub fn pick_directive(lookup: impl Fn(&str) -> Option<String>) -> String {
    ["TEST_LOG", "RUST_LOG"]
        .into_iter()
        .find_map(|var| lookup(var).filter(|value| !value.trim().is_empty()))
        .unwrap_or_else(|| DEFAULT_DIRECTIVE.to_string())
}

/// Installs the subscriber once per test process.
///
/// Output goes through the test writer and carries no timestamps, since the
/// transition suites run on a paused clock where wall time means nothing.
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let directive = pick_directive(|var| std::env::var(var).ok());
        let filter = EnvFilter::try_new(&directive)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

        // The ctor hook and test_bootstrap can both get here; first one wins.
        let _ = fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init();
    });
}
