//! Motion module for stepper-indexer.
//!
//! Provides direction resolution and circular shortest-path planning.

mod planner;

pub use planner::{plan_move, Direction};
