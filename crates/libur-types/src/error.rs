use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::lunar::HijriMethod;

/// Errors from libur operations.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LiburError {
    /// A lunar date could not be converted to a Gregorian date.
    #[error("Cannot convert {day}/{month}/{year} ({method}): {reason}")]
    Conversion {
        method: HijriMethod,
        year: i32,
        month: u8,
        day: u8,
        reason: String,
    },

    /// Reference date outside the range covered by the conversion tables.
    #[error("Date {date} is out of supported range ({min} to {max})")]
    DateOutOfRange {
        date: NaiveDate,
        min: NaiveDate,
        max: NaiveDate,
    },

    /// Invalid configuration.
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    /// A holiday could not be resolved while building a catalog.
    #[error("Failed to build catalog entry '{holiday}': {source}")]
    CatalogConstruction {
        holiday: String,
        #[source]
        source: Box<LiburError>,
    },
}

impl LiburError {
    /// Creates a `Conversion` error.
    pub fn conversion(
        method: HijriMethod,
        (year, month, day): (i32, u8, u8),
        reason: impl Into<String>,
    ) -> Self {
        Self::Conversion {
            method,
            year,
            month,
            day,
            reason: reason.into(),
        }
    }

    /// Creates an `InvalidConfiguration` error.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration { reason: reason.into() }
    }

    /// Wraps `self` as the cause of a failed catalog entry.
    pub fn in_catalog_entry(self, holiday: impl Into<String>) -> Self {
        Self::CatalogConstruction {
            holiday: holiday.into(),
            source: Box::new(self),
        }
    }

    /// Returns the innermost error, looking through `CatalogConstruction`.
    pub fn root_cause(&self) -> &LiburError {
        match self {
            Self::CatalogConstruction { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_message() {
        let err = LiburError::conversion(HijriMethod::UmmAlQura, (1445, 10, 30), "no such day");
        assert_eq!(
            err.to_string(),
            "Cannot convert 30/10/1445 (Umm al-Qura): no such day"
        );
    }

    #[test]
    fn test_root_cause_unwraps_catalog_errors() {
        let inner = LiburError::invalid_config("bad");
        let outer = inner.clone().in_catalog_entry("Maulid Nabi");
        assert!(matches!(outer, LiburError::CatalogConstruction { .. }));
        assert_eq!(outer.root_cause(), &inner);
        assert!(outer.to_string().contains("Maulid Nabi"));
    }

    #[test]
    fn test_serde_roundtrip() {
        let err = LiburError::conversion(HijriMethod::Arithmetic, (1445, 1, 1), "x")
            .in_catalog_entry("Tahun Baru Hijriah");
        let json = serde_json::to_string(&err).unwrap();
        let back: LiburError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, back);
    }
}
