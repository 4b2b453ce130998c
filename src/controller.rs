//! Indexer controller: the single owning context for the command loop.
//!
//! Owns the motor, the named-position table, and the non-volatile store, and
//! exposes the operations the command dispatcher calls with already-parsed
//! arguments. Constructed once at startup and passed by reference to each
//! operation; there are no globals.
//!
//! Every state-changing operation flushes to the store before returning, so
//! an acknowledged command is a persisted command. Rejected operations leave
//! no state change: range checks run before a single pulse is emitted.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::config::units::Steps;
use crate::config::{ControllerConfig, SafeRange};
use crate::error::{MotorError, Result, TableError};
use crate::motion::plan_move;
use crate::motor::{MoveReport, StepperMotor};
use crate::positions::{NamedPosition, PositionTable};
use crate::store::{self, NvMemory};

/// Single-motor indexer controller.
///
/// Generic over the motor's pin and delay types and the storage backend.
pub struct Controller<STEP, DIR, DELAY, STORE>
where
    STEP: OutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
    STORE: NvMemory,
{
    motor: StepperMotor<STEP, DIR, DELAY>,
    table: PositionTable,
    store: STORE,
    safe_range: SafeRange,
    period: Steps,
    /// Header value as last written, for the wear-reduction dirty check.
    persisted_position: Steps,
    /// Whether startup restore recovered from corrupted storage.
    recovered: bool,
}

impl<STEP, DIR, DELAY, STORE> Controller<STEP, DIR, DELAY, STORE>
where
    STEP: OutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
    STORE: NvMemory,
{
    /// Create a controller, restoring position state and the named-position
    /// table from the store.
    ///
    /// Corrupted storage never fails startup: an out-of-range header loads
    /// as position 0 and the anomaly is reported via
    /// [`recovered_from_corruption`](Self::recovered_from_corruption).
    ///
    /// # Errors
    ///
    /// Only backend I/O failures propagate.
    pub fn new(
        mut motor: StepperMotor<STEP, DIR, DELAY>,
        mut store: STORE,
        config: &ControllerConfig,
    ) -> Result<Self> {
        let safe_range = config.safe_range();
        let restored = store::load(&mut store, &safe_range)?;

        let persisted_position = restored.position.current();
        motor.restore_position(restored.position);

        Ok(Self {
            motor,
            table: restored.table,
            store,
            safe_range,
            period: config.period(),
            persisted_position,
            recovered: restored.recovered,
        })
    }

    /// Current logical position.
    pub fn logical_position(&self) -> Steps {
        self.motor.logical_position()
    }

    /// The guarded logical-position window.
    pub fn safe_range(&self) -> &SafeRange {
        &self.safe_range
    }

    /// Steps in one full revolution.
    pub fn period(&self) -> Steps {
        self.period
    }

    /// Whether startup restore had to recover from corrupted storage.
    pub fn recovered_from_corruption(&self) -> bool {
        self.recovered
    }

    /// Move by a signed step delta.
    ///
    /// Rejects with `OutOfRange` before any pulses if the destination lies
    /// outside the safe window; a rejected move has zero side effects.
    pub fn move_by(&mut self, delta: Steps) -> Result<MoveReport> {
        let destination = self.logical_position() + delta;
        self.check_range(destination)?;

        let report = self.motor.move_by(delta)?;
        self.flush_if_moved()?;
        Ok(report)
    }

    /// Move to a target logical position along the circular shortest path.
    ///
    /// The planner treats the position space as wrapping every revolution
    /// and resolves the antipodal tie toward the forward direction. The
    /// planned destination is still validated against the safe window:
    /// a wrap plan that would leave it is rejected, not clamped.
    pub fn move_to(&mut self, target: Steps) -> Result<MoveReport> {
        let delta = plan_move(self.logical_position(), target, self.period);
        self.move_by(delta)
    }

    /// Make the current position the new logical zero.
    pub fn reset_zero(&mut self) -> Result<()> {
        self.motor.rezero();
        self.flush_if_moved()
    }

    /// Record the current logical position under `name`.
    ///
    /// Returns the assigned table index.
    pub fn save_position(&mut self, name: &str) -> Result<usize> {
        let value = self.logical_position();
        let index = self.table.add(name, value)?;
        self.flush()?;
        Ok(index)
    }

    /// Move to a previously recorded position.
    pub fn recall_position(&mut self, name: &str) -> Result<MoveReport> {
        let target = self.table.value_of(name).ok_or_else(|| {
            TableError::NotFound(heapless::String::try_from(name).unwrap_or_default())
        })?;
        self.move_to(target)
    }

    /// Delete a recorded position, returning the removed entry.
    pub fn delete_position(&mut self, name: &str) -> Result<NamedPosition> {
        let removed = self.table.delete(name)?;
        self.flush()?;
        Ok(removed)
    }

    /// Find the table index of a recorded position.
    pub fn find_position(&self, name: &str) -> Option<usize> {
        self.table.find(name)
    }

    /// Iterate over recorded positions in table order.
    pub fn positions(&self) -> impl Iterator<Item = (&str, Steps)> {
        self.table.iter()
    }

    /// The named-position table.
    pub fn table(&self) -> &PositionTable {
        &self.table
    }

    /// The storage backend, for imaging its contents.
    pub fn store(&self) -> &STORE {
        &self.store
    }

    fn check_range(&self, destination: Steps) -> Result<()> {
        if !self.safe_range.contains(destination) {
            return Err(MotorError::OutOfRange {
                target: destination.value(),
                min: self.safe_range.min.value(),
                max: self.safe_range.max.value(),
            }
            .into());
        }
        Ok(())
    }

    /// Flush unless the persisted header would be unchanged. Table
    /// mutations go through [`flush`](Self::flush) directly; this path only
    /// serves moves, where skipping identical rewrites reduces wear without
    /// changing observable state.
    fn flush_if_moved(&mut self) -> Result<()> {
        if self.motor.position().current() == self.persisted_position {
            return Ok(());
        }
        self.flush()
    }

    fn flush(&mut self) -> Result<()> {
        store::save(&mut self.store, self.motor.position(), &self.table)?;
        self.persisted_position = self.motor.position().current();
        Ok(())
    }
}
