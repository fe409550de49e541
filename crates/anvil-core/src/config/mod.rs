//! Configuration system for anvil.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod anvil_config;
pub mod checks_config;
pub mod factories_config;
pub mod rails_config;

pub use anvil_config::{AnvilConfig, CliOverrides};
pub use checks_config::ChecksConfig;
pub use factories_config::FactoriesConfig;
pub use rails_config::RailsConfig;
