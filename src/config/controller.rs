//! Controller configuration from TOML.

use heapless::String;
use serde::Deserialize;

use crate::error::{ConfigError, Error, Result};

use super::range::SafeRange;
use super::units::Steps;

/// Default per-half-cycle step delay in microseconds.
fn default_step_interval_us() -> u32 {
    500
}

/// Complete controller configuration from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct ControllerConfig {
    /// Human-readable name (max 32 chars).
    pub name: String<32>,

    /// Steps in one full revolution of the output shaft. This is the
    /// wraparound modulus for circular shortest-path planning.
    pub period_steps: i32,

    /// Minimum allowed logical position in steps.
    pub safe_min_steps: i32,

    /// Maximum allowed logical position in steps.
    pub safe_max_steps: i32,

    /// Delay per half-cycle of the step square wave, in microseconds.
    #[serde(default = "default_step_interval_us")]
    pub step_interval_us: u32,

    /// Invert direction pin logic.
    #[serde(default)]
    pub invert_direction: bool,
}

impl ControllerConfig {
    /// The wraparound period as a typed step count.
    pub fn period(&self) -> Steps {
        Steps(self.period_steps)
    }

    /// The guarded logical-position window.
    pub fn safe_range(&self) -> SafeRange {
        SafeRange::new(Steps(self.safe_min_steps), Steps(self.safe_max_steps))
    }
}

/// Root configuration structure from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct IndexerConfig {
    /// The single controller this firmware drives.
    pub controller: ControllerConfig,
}

/// Validate an indexer configuration.
///
/// Checks:
/// - Period is positive (at least one step per revolution)
/// - Safe range is a proper window (min < max)
/// - Step interval is non-zero
pub fn validate_config(config: &IndexerConfig) -> Result<()> {
    let controller = &config.controller;

    if controller.period_steps <= 0 {
        return Err(Error::Config(ConfigError::InvalidPeriod(
            controller.period_steps,
        )));
    }

    if !controller.safe_range().is_valid() {
        return Err(Error::Config(ConfigError::InvalidSafeRange {
            min: controller.safe_min_steps,
            max: controller.safe_max_steps,
        }));
    }

    if controller.step_interval_us == 0 {
        return Err(Error::Config(ConfigError::InvalidStepInterval(
            controller.step_interval_us,
        )));
    }

    Ok(())
}
