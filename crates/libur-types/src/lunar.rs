use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::LiburError;

/// How a Hijri date is placed on the Gregorian calendar.
///
/// Indonesia follows the regional consensus: minor Islamic holidays use the
/// arithmetic calendar, holidays tied to specific obligations (the two Eids)
/// follow Umm al-Qura.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HijriMethod {
    /// Tabular (civil) arithmetic rules.
    Arithmetic,
    /// Umm al-Qura astronomical tables.
    UmmAlQura,
}

impl fmt::Display for HijriMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HijriMethod::Arithmetic => "arithmetic",
            HijriMethod::UmmAlQura => "Umm al-Qura",
        };
        write!(f, "{}", s)
    }
}

/// A recurring day of the Hijri year, without the year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LunarDate {
    pub month: u8,
    pub day: u8,
    pub method: HijriMethod,
}

impl LunarDate {
    /// Creates a lunar date without checking bounds; `month` belongs in
    /// [1, 12] and `day` in [1, 30]. Resolvers call [`LunarDate::validate`]
    /// before converting.
    pub const fn new(month: u8, day: u8, method: HijriMethod) -> Self {
        Self { month, day, method }
    }

    /// Checks the month and day bounds.
    ///
    /// Whether the day exists in a particular year's month (29 or 30 days)
    /// is only known once a year is chosen.
    pub fn validate(&self, year: i32) -> Result<(), LiburError> {
        if !(1..=12).contains(&self.month) {
            return Err(LiburError::conversion(
                self.method,
                (year, self.month, self.day),
                format!("lunar month {} outside 1..=12", self.month),
            ));
        }
        if !(1..=30).contains(&self.day) {
            return Err(LiburError::conversion(
                self.method,
                (year, self.month, self.day),
                format!("lunar day {} outside 1..=30", self.day),
            ));
        }
        Ok(())
    }
}

impl fmt::Display for LunarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.day, hijri_month_name(self.month), self.method)
    }
}

/// Returns the Indonesian name of a Hijri month.
pub fn hijri_month_name(month: u8) -> &'static str {
    match month {
        1 => "Muharam", 2 => "Safar", 3 => "Rabiulawal", 4 => "Rabiulakhir",
        5 => "Jumadilawal", 6 => "Jumadilakhir", 7 => "Rajab", 8 => "Syakban",
        9 => "Ramadan", 10 => "Syawal", 11 => "Zulkaidah", 12 => "Zulhijah",
        _ => "Unknown",
    }
}
