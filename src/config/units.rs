//! Unit types for motor quantities.
//!
//! Provides a type-safe representation of step counts to keep raw integers
//! from crossing API boundaries unlabeled.

use core::fmt;
use core::ops::{Add, Neg, Sub};

use serde::Deserialize;

/// Motor position or displacement in steps.
///
/// Signed: positive values are the clockwise direction. Uses `i32` so the
/// value maps directly onto the 4-byte field of the persistent record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct Steps(pub i32);

impl Steps {
    /// Zero steps.
    pub const ZERO: Self = Self(0);

    /// Create a new Steps value.
    #[inline]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> i32 {
        self.0
    }

    /// Get the magnitude as an unsigned count.
    #[inline]
    pub const fn unsigned_abs(self) -> u32 {
        self.0.unsigned_abs()
    }

    /// Get the absolute value.
    #[inline]
    pub const fn abs(self) -> Self {
        Self(self.0.abs())
    }

    /// Check whether this is a zero displacement.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl Add for Steps {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Steps {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Neg for Steps {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl fmt::Display for Steps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for Steps {
    fn from(value: i32) -> Self {
        Self(value)
    }
}
