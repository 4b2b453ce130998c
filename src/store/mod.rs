//! Persistence module for stepper-indexer.
//!
//! Provides the non-volatile storage abstraction, a RAM-backed store, and
//! the fixed-layout record codec.

mod codec;
mod nv;
mod ram;

pub use codec::{
    load, save, Restored, HEADER_BYTES, NAME_SLOT_BYTES, RECORD_BYTES, STORE_BYTES, VALUE_BYTES,
};
pub use nv::NvMemory;
pub use ram::RamStore;
