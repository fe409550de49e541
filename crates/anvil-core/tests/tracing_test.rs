//! Tests for the anvil tracing setup.

use std::sync::Mutex;

use anvil_core::tracing::setup::{init_tracing, resolve_filter, DEFAULT_DIRECTIVES, LOG_ENV};
use tracing::level_filters::LevelFilter;

/// Serializes tests that touch `ANVIL_LOG`.
static TRACING_MUTEX: Mutex<()> = Mutex::new(());

#[test]
fn test_global_level_directive() {
    let filter = resolve_filter(Some("debug"));
    assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
}

#[test]
fn test_per_target_directives_keep_the_most_verbose_level() {
    let filter = resolve_filter(Some("anvil_analysis=trace,anvil_core=warn"));
    assert_eq!(filter.max_level_hint(), Some(LevelFilter::TRACE));
}

#[test]
fn test_missing_directives_use_default() {
    assert_eq!(resolve_filter(None).max_level_hint(), Some(LevelFilter::INFO));
    assert_eq!(
        resolve_filter(Some(DEFAULT_DIRECTIVES)).max_level_hint(),
        Some(LevelFilter::INFO)
    );
}

#[test]
fn test_malformed_directives_fall_back_as_a_whole() {
    // The valid trace directive is dropped along with the bad one.
    let filter = resolve_filter(Some("anvil_analysis=trace,anvil=verbose"));
    assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));
}

#[test]
fn test_init_installs_global_subscriber_once() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var(LOG_ENV, "anvil_core=debug");

    let first = init_tracing();
    let second = init_tracing();
    std::env::remove_var(LOG_ENV);

    assert!(first);
    assert!(!second);
    assert!(tracing::dispatcher::has_been_set());
}
