//! Safe-range configuration and checks.
//!
//! The controller refuses to drive the motor outside a guarded window of
//! logical positions. Every move is validated against this window before a
//! single pulse is emitted.

use super::units::Steps;

/// Guarded window of logical positions, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SafeRange {
    /// Minimum allowed logical position in steps.
    pub min: Steps,

    /// Maximum allowed logical position in steps.
    pub max: Steps,
}

impl SafeRange {
    /// Create a new safe range.
    pub const fn new(min: Steps, max: Steps) -> Self {
        Self { min, max }
    }

    /// Check if the range is valid (min < max).
    pub fn is_valid(&self) -> bool {
        self.min < self.max
    }

    /// Check if a logical position is within the window.
    pub fn contains(&self, position: Steps) -> bool {
        position >= self.min && position <= self.max
    }
}

impl Default for SafeRange {
    /// The guarded variant's default window of +/-100 steps.
    fn default() -> Self {
        Self {
            min: Steps(-100),
            max: Steps(100),
        }
    }
}
