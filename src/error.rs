//! Error types for the stepper-indexer library.
//!
//! Provides unified error handling across configuration, motor control, the
//! named-position table, and non-volatile storage. Every error here is
//! recoverable: the command loop reports it and keeps running.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all stepper-indexer operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Motor operation error
    Motor(MotorError),
    /// Named-position table error
    Table(TableError),
    /// Non-volatile storage error
    Store(StoreError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Invalid revolution period (must be > 0 steps)
    InvalidPeriod(i32),
    /// Invalid safe range (min must be < max)
    InvalidSafeRange {
        /// Minimum limit value
        min: i32,
        /// Maximum limit value
        max: i32,
    },
    /// Invalid step interval (must be > 0 microseconds)
    InvalidStepInterval(u32),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Motor operation errors.
#[derive(Debug, Clone, PartialEq)]
pub enum MotorError {
    /// Pin operation failed
    PinError,
    /// Move would leave the guarded logical-position window
    OutOfRange {
        /// Logical position the move would end at
        target: i32,
        /// Window minimum
        min: i32,
        /// Window maximum
        max: i32,
    },
}

/// Named-position table errors.
#[derive(Debug, Clone, PartialEq)]
pub enum TableError {
    /// Table already holds the maximum number of entries
    CapacityExceeded,
    /// An entry with this name already exists
    DuplicateName(heapless::String<10>),
    /// Name exceeds the fixed on-disk slot width
    NameTooLong {
        /// Length of the rejected name
        len: usize,
        /// Maximum usable characters
        max: usize,
    },
    /// Name is empty or otherwise malformed
    InvalidName,
    /// No entry with this name exists
    NotFound(heapless::String<10>),
}

/// Non-volatile storage errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StoreError {
    /// Backend read or write failed
    Io,
    /// Access past the end of the record region
    OutOfBounds {
        /// Requested offset
        offset: usize,
        /// Requested length
        len: usize,
    },
    /// Stored data failed validation
    Corrupt,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Motor(e) => write!(f, "Motor error: {}", e),
            Error::Table(e) => write!(f, "Position table error: {}", e),
            Error::Store(e) => write!(f, "Storage error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::InvalidPeriod(v) => {
                write!(f, "Invalid period: {} steps. Must be > 0", v)
            }
            ConfigError::InvalidSafeRange { min, max } => {
                write!(f, "Invalid safe range: min ({}) must be < max ({})", min, max)
            }
            ConfigError::InvalidStepInterval(v) => {
                write!(f, "Invalid step interval: {} us. Must be > 0", v)
            }
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for MotorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotorError::PinError => write!(f, "GPIO pin operation failed"),
            MotorError::OutOfRange { target, min, max } => {
                write!(f, "Position {} outside safe range [{}, {}]", target, min, max)
            }
        }
    }
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::CapacityExceeded => write!(f, "Position table is full"),
            TableError::DuplicateName(name) => {
                write!(f, "Position '{}' already exists", name)
            }
            TableError::NameTooLong { len, max } => {
                write!(f, "Name of {} chars exceeds maximum of {}", len, max)
            }
            TableError::InvalidName => write!(f, "Name is empty or malformed"),
            TableError::NotFound(name) => write!(f, "Position '{}' not found", name),
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io => write!(f, "Storage backend operation failed"),
            StoreError::OutOfBounds { offset, len } => {
                write!(f, "Access of {} bytes at offset {} past end of store", len, offset)
            }
            StoreError::Corrupt => write!(f, "Stored record failed validation"),
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<MotorError> for Error {
    fn from(e: MotorError) -> Self {
        Error::Motor(e)
    }
}

impl From<TableError> for Error {
    fn from(e: TableError) -> Self {
        Error::Table(e)
    }
}

impl From<StoreError> for Error {
    fn from(e: StoreError) -> Self {
        Error::Store(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for MotorError {}

#[cfg(feature = "std")]
impl std::error::Error for TableError {}

#[cfg(feature = "std")]
impl std::error::Error for StoreError {}
