//! Non-volatile memory abstraction.
//!
//! The persistence codec talks to storage through a byte-addressable trait so
//! firmware can back it with EEPROM or a flash page while host tests use a
//! RAM buffer. Synchronous by design: the controller is single-threaded and
//! run-to-completion, so there is no executor to await on.

use crate::error::StoreError;

/// Byte-addressable non-volatile storage.
///
/// Implementations provide plain offset-addressed reads and writes over the
/// record region. The codec always rewrites the full record set on any
/// mutation, so implementations do not need partial-update atomicity.
pub trait NvMemory {
    /// Read `buffer.len()` bytes starting at `offset`.
    fn read(&mut self, offset: usize, buffer: &mut [u8]) -> Result<(), StoreError>;

    /// Write `data` starting at `offset`.
    fn write(&mut self, offset: usize, data: &[u8]) -> Result<(), StoreError>;
}
