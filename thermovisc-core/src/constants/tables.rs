//! Viscosity Table Limits and Seed Data

use crate::lookup::ViscosityEntry;

/// Maximum number of entries a viscosity table holds.
///
/// Tables live in a fixed-capacity buffer so construction never allocates.
/// The seed table uses 10 of these slots.
pub const MAX_TABLE_ENTRIES: usize = 32;

/// Value returned by the non-failing lookup when no entry matches.
///
/// No table may store this value, which keeps a miss distinguishable from a
/// hit.
pub const NOT_FOUND_SENTINEL: f64 = -1.0;

/// Seed mapping of thermal conductivity to viscosity.
///
/// Written out as literals rather than generated from a formula: keys must be
/// bit-identical to what callers type (`0.3`, not `3.0 * 0.1`), and later
/// entries need not follow the current linear pattern.
pub const STANDARD_VISCOSITY_ENTRIES: [ViscosityEntry; 10] = [
    ViscosityEntry::new(0.1, 1.0),
    ViscosityEntry::new(0.2, 1.1),
    ViscosityEntry::new(0.3, 1.2),
    ViscosityEntry::new(0.4, 1.3),
    ViscosityEntry::new(0.5, 1.4),
    ViscosityEntry::new(0.6, 1.5),
    ViscosityEntry::new(0.7, 1.6),
    ViscosityEntry::new(0.8, 1.7),
    ViscosityEntry::new(0.9, 1.8),
    ViscosityEntry::new(1.0, 1.9),
];

// The seed table must fit in a table
const _: () = assert!(STANDARD_VISCOSITY_ENTRIES.len() <= MAX_TABLE_ENTRIES);
