//! RAM-backed store.
//!
//! Fixed-size in-memory implementation of [`NvMemory`]. Used by host tests
//! to simulate power cycles, and usable as a volatile default store.

use crate::error::StoreError;

use super::codec::STORE_BYTES;
use super::nv::NvMemory;

/// In-memory [`NvMemory`] over a fixed byte array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RamStore {
    bytes: [u8; STORE_BYTES],
}

impl RamStore {
    /// Create a zeroed store.
    ///
    /// A zeroed store loads as position 0 with an empty table: the first
    /// name slot's NUL byte is the end-of-table sentinel.
    pub const fn new() -> Self {
        Self {
            bytes: [0; STORE_BYTES],
        }
    }

    /// Create a store over existing contents.
    pub const fn from_bytes(bytes: [u8; STORE_BYTES]) -> Self {
        Self { bytes }
    }

    /// Raw contents, for inspection.
    pub fn bytes(&self) -> &[u8; STORE_BYTES] {
        &self.bytes
    }

    fn check_bounds(&self, offset: usize, len: usize) -> Result<(), StoreError> {
        if offset.checked_add(len).map_or(true, |end| end > STORE_BYTES) {
            return Err(StoreError::OutOfBounds { offset, len });
        }
        Ok(())
    }
}

impl Default for RamStore {
    fn default() -> Self {
        Self::new()
    }
}

impl NvMemory for RamStore {
    fn read(&mut self, offset: usize, buffer: &mut [u8]) -> Result<(), StoreError> {
        self.check_bounds(offset, buffer.len())?;
        buffer.copy_from_slice(&self.bytes[offset..offset + buffer.len()]);
        Ok(())
    }

    fn write(&mut self, offset: usize, data: &[u8]) -> Result<(), StoreError> {
        self.check_bounds(offset, data.len())?;
        self.bytes[offset..offset + data.len()].copy_from_slice(data);
        Ok(())
    }
}
