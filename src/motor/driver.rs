//! Stepper motor driver.
//!
//! Generic over embedded-hal 1.0 pin types. Pulse emission is a blocking
//! two-phase square wave with fixed per-half-cycle timing; a move always
//! runs to completion.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::config::units::Steps;
use crate::error::{MotorError, Result};
use crate::motion::Direction;

use super::position::PositionTracker;

/// Outcome of a completed move, for echoing back to the command loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MoveReport {
    /// Signed distance actually moved.
    pub moved: Steps,
    /// Resolved direction, `None` for a zero-length move.
    pub direction: Option<Direction>,
}

impl MoveReport {
    /// Report for a move that issued no pulses.
    pub const NO_MOTION: Self = Self {
        moved: Steps::ZERO,
        direction: None,
    };
}

impl core::fmt::Display for MoveReport {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.direction {
            Some(dir) => write!(f, "moved {} steps {}", self.moved.unsigned_abs(), dir),
            None => write!(f, "already at position"),
        }
    }
}

/// Stepper motor driver.
///
/// Generic over:
/// - `STEP`: STEP pin type (must implement `OutputPin`)
/// - `DIR`: DIR pin type (must implement `OutputPin`)
/// - `DELAY`: Delay provider (must implement `DelayNs`)
pub struct StepperMotor<STEP, DIR, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
{
    /// STEP pin (pulse to move one step).
    step_pin: STEP,

    /// DIR pin (high = CW, low = CCW, or inverted).
    dir_pin: DIR,

    /// Delay provider for step timing.
    delay: DELAY,

    /// Current position.
    position: PositionTracker,

    /// Current direction (cached to avoid unnecessary pin writes).
    current_direction: Option<Direction>,

    /// Whether direction pin logic is inverted.
    invert_direction: bool,

    /// Delay per half-cycle of the step square wave, in microseconds.
    step_interval_us: u32,
}

impl<STEP, DIR, DELAY> StepperMotor<STEP, DIR, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
{
    pub(crate) fn new(
        step_pin: STEP,
        dir_pin: DIR,
        delay: DELAY,
        position: PositionTracker,
        invert_direction: bool,
        step_interval_us: u32,
    ) -> Self {
        Self {
            step_pin,
            dir_pin,
            delay,
            position,
            current_direction: None,
            invert_direction,
            step_interval_us,
        }
    }

    /// Get the position tracker.
    #[inline]
    pub fn position(&self) -> &PositionTracker {
        &self.position
    }

    /// Get the current logical position.
    #[inline]
    pub fn logical_position(&self) -> Steps {
        self.position.logical()
    }

    /// Make the current position the new logical zero.
    #[inline]
    pub fn rezero(&mut self) {
        self.position.rezero();
    }

    /// Replace the tracker with one restored from persistence.
    pub(crate) fn restore_position(&mut self, position: PositionTracker) {
        self.position = position;
    }

    /// Move by a signed step delta, blocking until the move completes.
    ///
    /// A zero delta is a no-op with no pin I/O. Otherwise the sign selects
    /// the direction and the magnitude is the pulse count; the tracker is
    /// advanced only after the full pulse train has been emitted.
    ///
    /// No range checking happens here. Callers validate the destination
    /// before invoking the primitive, so a rejected move never reaches the
    /// pins.
    pub fn move_by(&mut self, delta: Steps) -> Result<MoveReport> {
        if delta.is_zero() {
            return Ok(MoveReport::NO_MOTION);
        }

        let direction = Direction::from_steps(delta);
        self.set_direction(direction)?;

        for _ in 0..delta.unsigned_abs() {
            self.pulse()?;
        }

        self.position.advance(delta);

        Ok(MoveReport {
            moved: delta,
            direction: Some(direction),
        })
    }

    /// Emit one step pulse: one full square-wave cycle on the STEP pin.
    fn pulse(&mut self) -> Result<()> {
        self.step_pin.set_high().map_err(|_| MotorError::PinError)?;
        self.delay.delay_us(self.step_interval_us);
        self.step_pin.set_low().map_err(|_| MotorError::PinError)?;
        self.delay.delay_us(self.step_interval_us);
        Ok(())
    }

    fn set_direction(&mut self, direction: Direction) -> Result<()> {
        if self.current_direction == Some(direction) {
            return Ok(());
        }

        let pin_high = match direction {
            Direction::Clockwise => !self.invert_direction,
            Direction::CounterClockwise => self.invert_direction,
        };

        if pin_high {
            self.dir_pin.set_high().map_err(|_| MotorError::PinError)?;
        } else {
            self.dir_pin.set_low().map_err(|_| MotorError::PinError)?;
        }

        self.current_direction = Some(direction);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motor::StepperMotorBuilder;

    use embedded_hal_mock::eh1::delay::NoopDelay;
    use embedded_hal_mock::eh1::digital::{
        Mock as PinMock, State as PinState, Transaction as PinTransaction,
    };

    fn build_motor(step: PinMock, dir: PinMock) -> StepperMotor<PinMock, PinMock, NoopDelay> {
        StepperMotorBuilder::new()
            .step_pin(step)
            .dir_pin(dir)
            .delay(NoopDelay::new())
            .step_interval_us(10)
            .build()
            .unwrap()
    }

    #[test]
    fn test_zero_delta_touches_no_pins() {
        let step = PinMock::new(&[]);
        let dir = PinMock::new(&[]);
        let mut motor = build_motor(step, dir);

        let report = motor.move_by(Steps::ZERO).unwrap();
        assert_eq!(report, MoveReport::NO_MOTION);
        assert_eq!(motor.logical_position(), Steps::ZERO);

        motor.step_pin.done();
        motor.dir_pin.done();
    }

    #[test]
    fn test_move_emits_exact_pulse_count() {
        let step = PinMock::new(&[
            PinTransaction::set(PinState::High),
            PinTransaction::set(PinState::Low),
            PinTransaction::set(PinState::High),
            PinTransaction::set(PinState::Low),
            PinTransaction::set(PinState::High),
            PinTransaction::set(PinState::Low),
        ]);
        let dir = PinMock::new(&[PinTransaction::set(PinState::High)]);
        let mut motor = build_motor(step, dir);

        let report = motor.move_by(Steps(3)).unwrap();
        assert_eq!(report.moved, Steps(3));
        assert_eq!(report.direction, Some(Direction::Clockwise));
        assert_eq!(motor.logical_position(), Steps(3));

        motor.step_pin.done();
        motor.dir_pin.done();
    }

    #[test]
    fn test_direction_pin_cached_across_moves() {
        let step = PinMock::new(&[
            PinTransaction::set(PinState::High),
            PinTransaction::set(PinState::Low),
            PinTransaction::set(PinState::High),
            PinTransaction::set(PinState::Low),
        ]);
        // DIR is written once even though two CCW moves run.
        let dir = PinMock::new(&[PinTransaction::set(PinState::Low)]);
        let mut motor = build_motor(step, dir);

        motor.move_by(Steps(-1)).unwrap();
        motor.move_by(Steps(-1)).unwrap();
        assert_eq!(motor.logical_position(), Steps(-2));

        motor.step_pin.done();
        motor.dir_pin.done();
    }
}
