//! Configuration module for stepper-indexer.
//!
//! Provides types for loading and validating the controller configuration
//! from TOML files (with `std` feature) or pre-parsed data.

mod controller;
#[cfg(feature = "std")]
mod loader;
mod range;
pub mod units;

pub use controller::{validate_config, ControllerConfig, IndexerConfig};
pub use range::SafeRange;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::Steps;
