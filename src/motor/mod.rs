//! Motor module for stepper-indexer.
//!
//! Provides the stepper motor driver and relative position tracking.

mod builder;
mod driver;
mod position;

pub use builder::StepperMotorBuilder;
pub use driver::{MoveReport, StepperMotor};
pub use position::PositionTracker;
