//! Named position table.
//!
//! A fixed-capacity mapping from short names to recorded logical positions.
//! Entries live in a dense, insertion-ordered prefix: deletion shifts later
//! entries left, so table indices are also the record indices used by the
//! persistence layer.

use heapless::{String, Vec};

use crate::config::units::Steps;
use crate::error::TableError;

/// Maximum number of stored positions.
pub const MAX_POSITIONS: usize = 10;

/// Maximum usable characters in a position name.
///
/// The on-disk name slot is `MAX_NAME_LEN + 1` bytes: the extra byte holds
/// the NUL terminator that doubles as the end-of-table sentinel.
pub const MAX_NAME_LEN: usize = 10;

/// A stored named position.
///
/// The value is a snapshot of the logical position at creation time, not a
/// live link to the motor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedPosition {
    /// Unique name, case-sensitive.
    pub name: String<MAX_NAME_LEN>,
    /// Recorded logical position.
    pub value: Steps,
}

/// Fixed-capacity table of named positions.
///
/// Lookup is a linear scan. The table is small and bounded and this is not a
/// hot path, so no hashing is used.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PositionTable {
    entries: Vec<NamedPosition, MAX_POSITIONS>,
}

impl PositionTable {
    /// Create an empty table.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fixed capacity of the table.
    pub const fn capacity(&self) -> usize {
        MAX_POSITIONS
    }

    /// Add a named position at the next free index.
    ///
    /// Returns the assigned index.
    ///
    /// # Errors
    ///
    /// - `CapacityExceeded` if the table is full
    /// - `InvalidName` if the name is empty
    /// - `NameTooLong` if the name exceeds the slot width
    /// - `DuplicateName` if the name is already present (exact match);
    ///   stored values are immutable, so re-adding does not overwrite
    pub fn add(&mut self, name: &str, value: Steps) -> Result<usize, TableError> {
        if name.is_empty() {
            return Err(TableError::InvalidName);
        }

        if name.len() > MAX_NAME_LEN {
            return Err(TableError::NameTooLong {
                len: name.len(),
                max: MAX_NAME_LEN,
            });
        }

        if self.entries.is_full() {
            return Err(TableError::CapacityExceeded);
        }

        if self.find(name).is_some() {
            return Err(TableError::DuplicateName(
                String::try_from(name).unwrap_or_default(),
            ));
        }

        let entry = NamedPosition {
            // Length checked above
            name: String::try_from(name).map_err(|_| TableError::InvalidName)?,
            value,
        };

        let index = self.entries.len();
        // Fullness checked above
        self.entries.push(entry).map_err(|_| TableError::CapacityExceeded)?;
        Ok(index)
    }

    /// Find the index of the first entry with an exactly matching name.
    pub fn find(&self, name: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| entry.name.as_str() == name)
    }

    /// Get an entry by index.
    pub fn get(&self, index: usize) -> Option<&NamedPosition> {
        self.entries.get(index)
    }

    /// Get the stored value for a name.
    pub fn value_of(&self, name: &str) -> Option<Steps> {
        self.find(name).map(|i| self.entries[i].value)
    }

    /// Delete an entry by name, shifting all later entries one index left.
    ///
    /// Returns the removed entry.
    ///
    /// # Errors
    ///
    /// `NotFound` if no entry matches.
    pub fn delete(&mut self, name: &str) -> Result<NamedPosition, TableError> {
        let index = self.find(name).ok_or_else(|| {
            TableError::NotFound(String::try_from(name).unwrap_or_default())
        })?;

        // heapless::Vec::remove is the shifting removal; order of the
        // survivors is preserved.
        Ok(self.entries.remove(index))
    }

    /// Iterate over live entries in insertion order.
    ///
    /// Read-only and restartable; order reflects table index.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Steps)> {
        self.entries
            .iter()
            .map(|entry| (entry.name.as_str(), entry.value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_assigns_sequential_indices() {
        let mut table = PositionTable::new();

        assert_eq!(table.add("home", Steps(0)).unwrap(), 0);
        assert_eq!(table.add("load", Steps(45)).unwrap(), 1);
        assert_eq!(table.add("eject", Steps(-30)).unwrap(), 2);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_find_after_add() {
        let mut table = PositionTable::new();

        let index = table.add("park", Steps(75)).unwrap();
        assert_eq!(table.find("park"), Some(index));
        assert_eq!(table.value_of("park"), Some(Steps(75)));
        assert_eq!(table.find("PARK"), None); // case-sensitive
    }

    #[test]
    fn test_duplicate_rejected_and_table_unchanged() {
        let mut table = PositionTable::new();
        table.add("home", Steps(0)).unwrap();
        table.add("load", Steps(45)).unwrap();

        let before = table.clone();
        let result = table.add("home", Steps(99));

        assert!(matches!(result, Err(TableError::DuplicateName(_))));
        assert_eq!(table, before);
        assert_eq!(table.value_of("home"), Some(Steps(0)));
    }

    #[test]
    fn test_name_length_limits() {
        let mut table = PositionTable::new();

        assert!(table.add("abcdefghij", Steps(1)).is_ok()); // exactly 10
        assert!(matches!(
            table.add("abcdefghijk", Steps(1)), // 11
            Err(TableError::NameTooLong { len: 11, max: 10 })
        ));
        assert!(matches!(table.add("", Steps(1)), Err(TableError::InvalidName)));
    }

    #[test]
    fn test_capacity_bound() {
        let mut table = PositionTable::new();
        for i in 0..MAX_POSITIONS {
            let mut name = String::<MAX_NAME_LEN>::new();
            use core::fmt::Write;
            write!(name, "p{}", i).unwrap();
            table.add(name.as_str(), Steps(i as i32)).unwrap();
        }

        assert!(matches!(
            table.add("overflow", Steps(0)),
            Err(TableError::CapacityExceeded)
        ));
        assert_eq!(table.len(), MAX_POSITIONS);
    }

    #[test]
    fn test_delete_compacts_and_preserves_order() {
        let mut table = PositionTable::new();
        table.add("a", Steps(1)).unwrap();
        table.add("b", Steps(2)).unwrap();
        table.add("c", Steps(3)).unwrap();
        table.add("d", Steps(4)).unwrap();

        let removed = table.delete("b").unwrap();
        assert_eq!(removed.value, Steps(2));

        let remaining: std::vec::Vec<_> = table.iter().collect();
        assert_eq!(remaining, vec![("a", Steps(1)), ("c", Steps(3)), ("d", Steps(4))]);
        assert_eq!(table.find("c"), Some(1));
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_delete_missing() {
        let mut table = PositionTable::new();
        table.add("a", Steps(1)).unwrap();

        assert!(matches!(table.delete("z"), Err(TableError::NotFound(_))));
        assert_eq!(table.find("a"), Some(0));

        table.delete("a").unwrap();
        assert!(table.find("a").is_none());
        assert!(table.is_empty());
    }

    #[test]
    fn test_iter_is_restartable() {
        let mut table = PositionTable::new();
        table.add("a", Steps(1)).unwrap();
        table.add("b", Steps(2)).unwrap();

        let first: std::vec::Vec<_> = table.iter().collect();
        let second: std::vec::Vec<_> = table.iter().collect();
        assert_eq!(first, second);
    }
}
