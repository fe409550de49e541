//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding per-target filter directives.
pub const LOG_ENV: &str = "ANVIL_LOG";

/// Directives used when `ANVIL_LOG` is unset or does not parse.
pub const DEFAULT_DIRECTIVES: &str = "anvil=info";

static INIT: Once = Once::new();

/// Build the filter for `directives`, e.g. `anvil_analysis=debug,anvil_core=warn`.
/// Missing or malformed directives fall back to [`DEFAULT_DIRECTIVES`].
pub fn resolve_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVES))
}

/// Install the global fmt subscriber filtered by `ANVIL_LOG`.
///
/// Runs once per process. A subscriber installed by the embedding process
/// takes precedence; returns whether this call's subscriber is the active one.
pub fn init_tracing() -> bool {
    let mut installed = false;
    INIT.call_once(|| {
        let directives = std::env::var(LOG_ENV).ok();
        installed = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(resolve_filter(directives.as_deref()))
            .try_init()
            .is_ok();
    });
    installed
}
