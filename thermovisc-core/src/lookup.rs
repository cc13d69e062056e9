//! Thermal Conductivity → Viscosity Lookup Table
//!
//! ## Overview
//!
//! A small fixed mapping from thermal conductivity to viscosity. It is
//! independent of the sample pipeline: callers look a value up with their
//! own key.
//!
//! ## Matching Rules
//!
//! Keys match exactly, with plain `f64` equality. There is no tolerance and
//! no interpolation between neighbouring entries:
//!
//! ```text
//! key 0.5   → 1.4        (entry)
//! key 0.55  → miss       (no entry, nothing interpolated)
//! key 0.1 + 0.2 → miss   (0.30000000000000004 is not the literal 0.3)
//! ```
//!
//! ## Two Miss Policies
//!
//! | Method         | On miss                                  |
//! |----------------|------------------------------------------|
//! | [`lookup`]     | `Err(ThermoViscError::KeyNotFound)`      |
//! | [`try_lookup`] | `NOT_FOUND_SENTINEL` (`-1.0`)            |
//! | [`get`]        | `None`                                   |
//!
//! `-1.0` is never a stored value; construction rejects it.
//!
//! ## Ownership
//!
//! A table is an immutable value. Build it once at startup with
//! [`ViscosityTable::standard`] or [`ViscosityTable::from_entries`] and pass
//! a reference to whatever needs it.
//!
//! [`lookup`]: ViscosityTable::lookup
//! [`try_lookup`]: ViscosityTable::try_lookup
//! [`get`]: ViscosityTable::get

use heapless::Vec;

use crate::{
    constants::tables::{MAX_TABLE_ENTRIES, NOT_FOUND_SENTINEL, STANDARD_VISCOSITY_ENTRIES},
    errors::{Result, ThermoViscError},
};

/// One table row
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViscosityEntry {
    /// Lookup key
    pub thermal_conductivity: f64,
    /// Value returned for the key
    pub viscosity: f64,
}

impl ViscosityEntry {
    /// Create an entry
    pub const fn new(thermal_conductivity: f64, viscosity: f64) -> Self {
        Self {
            thermal_conductivity,
            viscosity,
        }
    }
}

/// Immutable exact-match viscosity table
///
/// Memory: `MAX_TABLE_ENTRIES` × 16 bytes, no heap allocation.
#[derive(Debug, Clone, PartialEq)]
pub struct ViscosityTable {
    entries: Vec<ViscosityEntry, MAX_TABLE_ENTRIES>,
}

impl ViscosityTable {
    /// Seed table: 0.1 → 1.0 up to 1.0 → 1.9 in steps of 0.1
    pub fn standard() -> Self {
        // Capacity is checked at compile time next to the seed data
        let entries = Vec::from_slice(&STANDARD_VISCOSITY_ENTRIES).unwrap_or_default();
        Self { entries }
    }

    /// Build a custom table
    ///
    /// A repeated key keeps the last value given for it.
    pub fn from_entries(source: &[ViscosityEntry]) -> Result<Self> {
        let mut entries: Vec<ViscosityEntry, MAX_TABLE_ENTRIES> = Vec::new();

        for entry in source {
            if entry.viscosity == NOT_FOUND_SENTINEL {
                return Err(ThermoViscError::SentinelValue);
            }

            if let Some(existing) = entries
                .iter_mut()
                .find(|e| e.thermal_conductivity == entry.thermal_conductivity)
            {
                existing.viscosity = entry.viscosity;
                continue;
            }

            entries.push(*entry).map_err(|_| ThermoViscError::TableFull {
                capacity: MAX_TABLE_ENTRIES,
            })?;
        }

        Ok(Self { entries })
    }

    /// Viscosity for an exact key, `None` on a miss
    pub fn get(&self, thermal_conductivity: f64) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| e.thermal_conductivity == thermal_conductivity)
            .map(|e| e.viscosity)
    }

    /// Viscosity for an exact key, failing on a miss
    pub fn lookup(&self, thermal_conductivity: f64) -> Result<f64> {
        self.get(thermal_conductivity)
            .ok_or(ThermoViscError::KeyNotFound {
                key: thermal_conductivity,
            })
    }

    /// Viscosity for an exact key, `-1.0` on a miss
    pub fn try_lookup(&self, thermal_conductivity: f64) -> f64 {
        match self.get(thermal_conductivity) {
            Some(viscosity) => viscosity,
            None => {
                log_debug!("No viscosity entry for conductivity {}", thermal_conductivity);
                NOT_FOUND_SENTINEL
            }
        }
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the table has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &ViscosityEntry> {
        self.entries.iter()
    }
}

impl Default for ViscosityTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_exact_values() {
        let table = ViscosityTable::standard();

        assert_eq!(table.len(), 10);
        assert_eq!(table.lookup(0.1).unwrap(), 1.0);
        assert_eq!(table.lookup(0.5).unwrap(), 1.4);
        assert_eq!(table.lookup(1.0).unwrap(), 1.9);
        assert_eq!(table.try_lookup(0.1), 1.0);
    }

    #[test]
    fn standard_matches_seed_data() {
        let table = ViscosityTable::standard();
        let rebuilt = ViscosityTable::from_entries(&STANDARD_VISCOSITY_ENTRIES).unwrap();

        assert_eq!(table, rebuilt);
        assert!(table.iter().eq(STANDARD_VISCOSITY_ENTRIES.iter()));
        assert!(STANDARD_VISCOSITY_ENTRIES.len() <= MAX_TABLE_ENTRIES);
    }

    #[test]
    fn no_interpolation() {
        let table = ViscosityTable::standard();

        assert_eq!(table.try_lookup(0.55), NOT_FOUND_SENTINEL);
        assert_eq!(table.get(0.55), None);
        assert_eq!(
            table.lookup(0.55),
            Err(ThermoViscError::KeyNotFound { key: 0.55 })
        );
    }

    #[test]
    fn computed_keys_must_be_bit_identical() {
        let table = ViscosityTable::standard();

        // 0.1 + 0.2 != 0.3 in binary floating point
        assert!(table.get(0.1 + 0.2).is_none());
        assert_eq!(table.get(0.3), Some(1.2));
    }

    #[test]
    fn out_of_range_keys_miss() {
        let table = ViscosityTable::standard();

        assert_eq!(table.try_lookup(0.0), -1.0);
        assert_eq!(table.try_lookup(1.1), -1.0);
        assert_eq!(table.try_lookup(f64::NAN), -1.0);
    }

    #[test]
    fn sentinel_never_stored() {
        assert_eq!(
            ViscosityTable::from_entries(&[ViscosityEntry::new(2.0, -1.0)]),
            Err(ThermoViscError::SentinelValue)
        );
        assert!(ViscosityTable::standard()
            .iter()
            .all(|e| e.viscosity != NOT_FOUND_SENTINEL));
    }

    #[test]
    fn custom_table_last_duplicate_wins() {
        let table = ViscosityTable::from_entries(&[
            ViscosityEntry::new(2.0, 3.0),
            ViscosityEntry::new(4.0, 9.5),
            ViscosityEntry::new(2.0, 3.5),
        ])
        .unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.lookup(2.0).unwrap(), 3.5);
        assert_eq!(table.lookup(4.0).unwrap(), 9.5);
    }

    #[test]
    fn custom_table_capacity() {
        let too_many: alloc::vec::Vec<ViscosityEntry> = (0..=MAX_TABLE_ENTRIES)
            .map(|i| ViscosityEntry::new(i as f64, i as f64 + 0.5))
            .collect();

        assert_eq!(
            ViscosityTable::from_entries(&too_many),
            Err(ThermoViscError::TableFull { capacity: MAX_TABLE_ENTRIES })
        );
        assert!(ViscosityTable::from_entries(&too_many[..MAX_TABLE_ENTRIES]).is_ok());
    }

    #[test]
    fn empty_table_always_misses() {
        let table = ViscosityTable::from_entries(&[]).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.try_lookup(0.1), NOT_FOUND_SENTINEL);
    }
}
