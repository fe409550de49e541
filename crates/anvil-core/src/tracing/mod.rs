//! Tracing setup for anvil.

pub mod setup;

pub use setup::{init_tracing, resolve_filter};
