//! Builder pattern for StepperMotor.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::config::ControllerConfig;
use crate::error::{ConfigError, Error, Result};

use super::driver::StepperMotor;
use super::position::PositionTracker;

/// Builder for creating StepperMotor instances.
pub struct StepperMotorBuilder<STEP, DIR, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
{
    step_pin: Option<STEP>,
    dir_pin: Option<DIR>,
    delay: Option<DELAY>,
    invert_direction: bool,
    step_interval_us: u32,
    position: PositionTracker,
}

impl<STEP, DIR, DELAY> Default for StepperMotorBuilder<STEP, DIR, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<STEP, DIR, DELAY> StepperMotorBuilder<STEP, DIR, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
{
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            step_pin: None,
            dir_pin: None,
            delay: None,
            invert_direction: false,
            step_interval_us: 500,
            position: PositionTracker::new(),
        }
    }

    /// Set the STEP pin.
    pub fn step_pin(mut self, pin: STEP) -> Self {
        self.step_pin = Some(pin);
        self
    }

    /// Set the DIR pin.
    pub fn dir_pin(mut self, pin: DIR) -> Self {
        self.dir_pin = Some(pin);
        self
    }

    /// Set the delay provider.
    pub fn delay(mut self, delay: DELAY) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Set direction inversion.
    pub fn invert_direction(mut self, invert: bool) -> Self {
        self.invert_direction = invert;
        self
    }

    /// Set the per-half-cycle step delay in microseconds.
    pub fn step_interval_us(mut self, interval: u32) -> Self {
        self.step_interval_us = interval;
        self
    }

    /// Start from a previously restored position tracker.
    pub fn position(mut self, position: PositionTracker) -> Self {
        self.position = position;
        self
    }

    /// Configure timing and direction polarity from a ControllerConfig.
    pub fn from_config(mut self, config: &ControllerConfig) -> Self {
        self.invert_direction = config.invert_direction;
        self.step_interval_us = config.step_interval_us;
        self
    }

    /// Build the StepperMotor.
    ///
    /// # Errors
    ///
    /// Returns an error if required fields are missing.
    pub fn build(self) -> Result<StepperMotor<STEP, DIR, DELAY>> {
        let step_pin = self.step_pin.ok_or_else(|| {
            Error::Config(ConfigError::ParseError(
                heapless::String::try_from("step_pin is required").unwrap(),
            ))
        })?;

        let dir_pin = self.dir_pin.ok_or_else(|| {
            Error::Config(ConfigError::ParseError(
                heapless::String::try_from("dir_pin is required").unwrap(),
            ))
        })?;

        let delay = self.delay.ok_or_else(|| {
            Error::Config(ConfigError::ParseError(
                heapless::String::try_from("delay is required").unwrap(),
            ))
        })?;

        if self.step_interval_us == 0 {
            return Err(Error::Config(ConfigError::InvalidStepInterval(0)));
        }

        Ok(StepperMotor::new(
            step_pin,
            dir_pin,
            delay,
            self.position,
            self.invert_direction,
            self.step_interval_us,
        ))
    }
}
