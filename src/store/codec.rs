//! Persistent record codec.
//!
//! Serializes the position state and the named-position table into a fixed,
//! versionless layout and reconstructs them at startup:
//!
//! ```text
//! offset 0                 current position, 4-byte little-endian i32
//! offset 4 + i * 15        record i: value (4-byte LE i32)
//!                                    name  (11-byte slot, NUL-terminated,
//!                                           NUL-padded)
//! ```
//!
//! A NUL in the first byte of a name slot is the sentinel: no entry here and
//! none after. Records are written and read contiguously from index 0, so
//! `save` must zero every dead slot or stale bytes would resurrect deleted
//! entries on the next load.
//!
//! Changing the slot width, capacity, or field order invalidates previously
//! stored data; there is no migration path.

use crate::config::units::Steps;
use crate::config::SafeRange;
use crate::error::Result;
use crate::motor::PositionTracker;
use crate::positions::{PositionTable, MAX_NAME_LEN, MAX_POSITIONS};

use super::nv::NvMemory;

/// Size of the position header in bytes.
pub const HEADER_BYTES: usize = 4;

/// Size of a record's value field in bytes.
pub const VALUE_BYTES: usize = 4;

/// Size of a record's name slot in bytes (usable characters + terminator).
pub const NAME_SLOT_BYTES: usize = MAX_NAME_LEN + 1;

/// Size of one record in bytes.
pub const RECORD_BYTES: usize = VALUE_BYTES + NAME_SLOT_BYTES;

/// Total size of the persistent record set in bytes.
pub const STORE_BYTES: usize = HEADER_BYTES + MAX_POSITIONS * RECORD_BYTES;

/// Byte offset of record `i`.
#[inline]
const fn record_offset(index: usize) -> usize {
    HEADER_BYTES + index * RECORD_BYTES
}

/// State reconstructed from non-volatile storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Restored {
    /// Restored position tracker (reference offset starts at zero).
    pub position: PositionTracker,
    /// Restored named-position table.
    pub table: PositionTable,
    /// True when stored data failed validation and was recovered to a safe
    /// default instead of being loaded as-is. The controller stays operable
    /// either way.
    pub recovered: bool,
}

/// Write the position state and the full table to storage.
///
/// Every one of the `MAX_POSITIONS` slots is written: live entries are
/// encoded, dead slots are zeroed. Zeroing keeps the sentinel invariant
/// intact after the table shrinks.
pub fn save<S: NvMemory>(
    store: &mut S,
    position: &PositionTracker,
    table: &PositionTable,
) -> Result<()> {
    let mut image = [0u8; STORE_BYTES];

    image[..HEADER_BYTES].copy_from_slice(&position.current().value().to_le_bytes());

    for (index, (name, value)) in table.iter().enumerate() {
        let offset = record_offset(index);
        image[offset..offset + VALUE_BYTES].copy_from_slice(&value.value().to_le_bytes());

        let name_slot = &mut image[offset + VALUE_BYTES..offset + RECORD_BYTES];
        name_slot[..name.len()].copy_from_slice(name.as_bytes());
        // Trailing bytes of the slot stay NUL: terminator plus padding.
    }

    store.write(0, &image)?;
    Ok(())
}

/// Reconstruct the position state and table from storage.
///
/// A header outside the safe range is recovered to position 0 rather than
/// failing; the anomaly is surfaced through [`Restored::recovered`]. The
/// record scan stops at the NUL sentinel, at capacity, or at the first
/// malformed record (unterminated or non-UTF-8 name, duplicate name), the
/// last of which is also reported as a recovery.
pub fn load<S: NvMemory>(store: &mut S, safe_range: &SafeRange) -> Result<Restored> {
    let mut image = [0u8; STORE_BYTES];
    store.read(0, &mut image)?;

    let mut recovered = false;

    let mut header = [0u8; HEADER_BYTES];
    header.copy_from_slice(&image[..HEADER_BYTES]);
    let mut current = Steps(i32::from_le_bytes(header));

    if !safe_range.contains(current) {
        current = Steps::ZERO;
        recovered = true;
    }

    let mut table = PositionTable::new();

    for index in 0..MAX_POSITIONS {
        let offset = record_offset(index);
        let name_slot = &image[offset + VALUE_BYTES..offset + RECORD_BYTES];

        // Sentinel: no entry here and no entries after.
        if name_slot[0] == 0 {
            break;
        }

        let name = match decode_name(name_slot) {
            Some(name) => name,
            None => {
                recovered = true;
                break;
            }
        };

        let mut value = [0u8; VALUE_BYTES];
        value.copy_from_slice(&image[offset..offset + VALUE_BYTES]);

        if table.add(name, Steps(i32::from_le_bytes(value))).is_err() {
            // Duplicate or otherwise unstorable record: stop scanning,
            // keep what loaded cleanly.
            recovered = true;
            break;
        }
    }

    Ok(Restored {
        position: PositionTracker::restored(current),
        table,
        recovered,
    })
}

/// Decode a NUL-terminated name from its fixed-width slot.
///
/// Returns `None` for an unterminated or non-UTF-8 slot.
fn decode_name(slot: &[u8]) -> Option<&str> {
    let len = slot.iter().position(|&b| b == 0)?;
    core::str::from_utf8(&slot[..len]).ok()
}
