//! Named-position module for stepper-indexer.
//!
//! Provides the fixed-capacity table of named logical positions.

mod table;

pub use table::{NamedPosition, PositionTable, MAX_NAME_LEN, MAX_POSITIONS};
