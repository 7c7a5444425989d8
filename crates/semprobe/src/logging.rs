//! Test log setup.
//!
//! Checks, actions and recompositions are reported through `tracing`. Call
//! [`init_tracing`] at the top of a test to see them; the filter comes from
//! `SEMPROBE_LOG` (e.g. `SEMPROBE_LOG=semprobe=debug`).

use std::sync::Once;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "SEMPROBE_LOG";

/// Environment variable selecting the output format (`json` or `pretty`)
pub const LOG_FORMAT_ENV: &str = "SEMPROBE_LOG_FORMAT";

/// Filter used when `SEMPROBE_LOG` is unset or invalid
pub const DEFAULT_FILTER: &str = "warn";

static INIT: Once = Once::new();

/// Install a test-writer subscriber once per process.
///
/// Later calls are no-ops, as is the first call when another global
/// subscriber is already installed.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        let json = std::env::var(LOG_FORMAT_ENV)
            .is_ok_and(|format| format.eq_ignore_ascii_case("json"));
        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_test_writer();
        let installed = if json {
            builder.json().try_init()
        } else {
            builder.try_init()
        };
        if installed.is_err() {
            tracing::debug!("global subscriber already installed");
        }
    });
}
