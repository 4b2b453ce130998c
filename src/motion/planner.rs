//! Circular shortest-path planning.
//!
//! The position space wraps every revolution, so a target can be reached by
//! turning either way. The planner picks the direction with the smaller step
//! count.

use crate::config::units::Steps;

/// Direction of motor motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Clockwise (positive step count).
    Clockwise,
    /// Counter-clockwise (negative step count).
    CounterClockwise,
}

impl Direction {
    /// Get direction from signed step count.
    #[inline]
    pub fn from_steps(steps: Steps) -> Self {
        if steps.value() >= 0 {
            Direction::Clockwise
        } else {
            Direction::CounterClockwise
        }
    }

    /// Get the sign multiplier.
    #[inline]
    pub fn sign(self) -> i32 {
        match self {
            Direction::Clockwise => 1,
            Direction::CounterClockwise => -1,
        }
    }
}

impl core::fmt::Display for Direction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Direction::Clockwise => write!(f, "CW"),
            Direction::CounterClockwise => write!(f, "CCW"),
        }
    }
}

/// Compute the minimal signed step delta from `current` to `target` on a
/// circle of `period` steps.
///
/// Two candidates are considered: the forward (clockwise, increasing) path
/// and the backward (counter-clockwise) path. The one with the smaller
/// magnitude wins.
///
/// Tie-break: in the antipodal case, where both paths are exactly half a
/// revolution, the forward candidate is chosen. This is a fixed contract,
/// not an accident of evaluation order.
///
/// The planner only plans. It emits no pulses and does not check the safe
/// window; callers validate the destination before moving.
pub fn plan_move(current: Steps, target: Steps, period: Steps) -> Steps {
    debug_assert!(period.value() > 0);

    let direct = target - current;

    let forward = if direct.value() >= 0 {
        direct
    } else {
        direct + period
    };

    let backward = if direct.value() <= 0 {
        direct
    } else {
        direct - period
    };

    if forward.unsigned_abs() <= backward.unsigned_abs() {
        forward
    } else {
        backward
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_path_when_shortest() {
        // 10 -> 50 on a 200-step circle: forward 40 beats backward -160.
        assert_eq!(plan_move(Steps(10), Steps(50), Steps(200)), Steps(40));
        // 50 -> 10: backward -40 beats forward 160.
        assert_eq!(plan_move(Steps(50), Steps(10), Steps(200)), Steps(-40));
    }

    #[test]
    fn test_wrap_path_when_shortest() {
        // 10 -> 190 the short way is backward through zero: -20, not +180.
        assert_eq!(plan_move(Steps(10), Steps(190), Steps(200)), Steps(-20));
        // And the mirror case wraps forward.
        assert_eq!(plan_move(Steps(190), Steps(10), Steps(200)), Steps(20));
    }

    #[test]
    fn test_zero_delta() {
        assert_eq!(plan_move(Steps(42), Steps(42), Steps(200)), Steps::ZERO);
    }

    #[test]
    fn test_antipodal_tie_breaks_forward() {
        // Both paths are exactly 100 steps; the forward candidate must win,
        // and must keep winning on repeated calls.
        for _ in 0..3 {
            assert_eq!(plan_move(Steps(0), Steps(100), Steps(200)), Steps(100));
        }
        // Antipodal from a nonzero start as well.
        assert_eq!(plan_move(Steps(30), Steps(130), Steps(200)), Steps(100));
    }

    #[test]
    fn test_negative_positions() {
        // Logical positions can sit below zero inside the guarded window.
        assert_eq!(plan_move(Steps(-90), Steps(90), Steps(200)), Steps(-20));
        assert_eq!(plan_move(Steps(-10), Steps(10), Steps(200)), Steps(20));
    }

    #[test]
    fn test_direction_from_steps() {
        assert_eq!(Direction::from_steps(Steps(5)), Direction::Clockwise);
        assert_eq!(Direction::from_steps(Steps::ZERO), Direction::Clockwise);
        assert_eq!(Direction::from_steps(Steps(-5)), Direction::CounterClockwise);
        assert_eq!(Direction::Clockwise.sign(), 1);
        assert_eq!(Direction::CounterClockwise.sign(), -1);
    }
}
