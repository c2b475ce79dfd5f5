//! Holidays shared by many countries.
//!
//! Country catalogs relabel these with [`Holiday::relabel`] instead of
//! restating the rule.

use libur_types::{Classification, Holiday};

/// New Year's Day, 1 January.
pub const NEW_YEAR: Holiday = Holiday::fixed("New Year's Day", Classification::Public, 1, 1);

/// Good Friday, two days before Easter.
pub const GOOD_FRIDAY: Holiday = Holiday::easter_offset("Good Friday", Classification::Religious, -2);

/// International Workers' Day, 1 May.
pub const WORKERS_DAY: Holiday = Holiday::fixed("International Workers' Day", Classification::Public, 5, 1);

/// Ascension Day, 39 days after Easter.
pub const ASCENSION_DAY: Holiday = Holiday::easter_offset("Ascension Day", Classification::Religious, 39);

/// Christmas Day, 25 December.
pub const CHRISTMAS_DAY: Holiday = Holiday::fixed("Christmas Day", Classification::Religious, 12, 25);
