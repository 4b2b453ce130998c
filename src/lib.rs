//! # stepper-indexer
//!
//! Firmware core for a serial-commanded single stepper position indexer
//! with embedded-hal 1.0 support.
//!
//! ## Features
//!
//! - **Position model**: absolute step count with a movable zero reference;
//!   every move is validated against a guarded safe window before pulses
//! - **Named positions**: fixed-capacity table of recorded positions that
//!   survives power cycles
//! - **Circular planning**: shortest-path moves on a wrapping revolution,
//!   with a fixed forward tie-break at the antipode
//! - **Persistence**: fixed-layout non-volatile record with sentinel-based
//!   termination and corruption recovery
//! - **embedded-hal 1.0**: uses `OutputPin` for STEP/DIR, `DelayNs` for
//!   pulse timing
//! - **no_std compatible**: core library works without the standard library
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use stepper_indexer::{Controller, StepperMotorBuilder, Steps};
//!
//! // Load configuration from TOML
//! let config = stepper_indexer::load_config("indexer.toml")?;
//!
//! // Create motor with embedded-hal pins
//! let motor = StepperMotorBuilder::new()
//!     .step_pin(step_pin)
//!     .dir_pin(dir_pin)
//!     .delay(delay)
//!     .from_config(&config.controller)
//!     .build()?;
//!
//! // Restore state from the non-volatile store and run commands
//! let mut controller = Controller::new(motor, store, &config.controller)?;
//! controller.move_to(Steps(90))?;
//! controller.save_position("load")?;
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `alloc`: Enables heap allocation for no_std with allocator
//! - `defmt`: Enables defmt logging for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Core modules
pub mod config;
mod controller;
pub mod error;
pub mod motion;
pub mod motor;
pub mod positions;
pub mod store;

// Re-exports for ergonomic API
pub use config::{validate_config, ControllerConfig, IndexerConfig, SafeRange};
pub use controller::Controller;
pub use error::{Error, Result};
pub use motion::{plan_move, Direction};
pub use motor::{MoveReport, PositionTracker, StepperMotor, StepperMotorBuilder};
pub use positions::{NamedPosition, PositionTable, MAX_NAME_LEN, MAX_POSITIONS};
pub use store::{NvMemory, RamStore, Restored};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::load_config;

// Unit types
pub use config::units::Steps;
