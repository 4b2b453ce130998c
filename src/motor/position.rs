//! Position tracking for the stepper motor.
//!
//! The motor's absolute step count runs from controller start; the user sees
//! positions relative to a movable reference ("zero") offset.

use crate::config::units::Steps;

/// Motor position tracker.
///
/// Maintains the absolute step count and the reference offset, and derives
/// the logical position exposed to the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PositionTracker {
    /// Absolute step count since controller start.
    current: Steps,
    /// Step count treated as logical zero.
    reference: Steps,
}

impl PositionTracker {
    /// Create a tracker at the boot state (0, 0).
    #[inline]
    pub const fn new() -> Self {
        Self {
            current: Steps::ZERO,
            reference: Steps::ZERO,
        }
    }

    /// Create a tracker restored from a persisted absolute position.
    ///
    /// The reference offset is not part of the persistent record, so a
    /// restored tracker starts with its reference at zero.
    #[inline]
    pub const fn restored(current: Steps) -> Self {
        Self {
            current,
            reference: Steps::ZERO,
        }
    }

    /// Get the absolute step count.
    #[inline]
    pub fn current(&self) -> Steps {
        self.current
    }

    /// Get the reference offset.
    #[inline]
    pub fn reference(&self) -> Steps {
        self.reference
    }

    /// Get the logical position (`current - reference`).
    #[inline]
    pub fn logical(&self) -> Steps {
        self.current - self.reference
    }

    /// Advance the absolute position by a completed move.
    #[inline]
    pub fn advance(&mut self, delta: Steps) {
        self.current = self.current + delta;
    }

    /// Make the current position the new logical zero.
    #[inline]
    pub fn rezero(&mut self) {
        self.reference = self.current;
    }
}
