//! Extension trait for `NaiveDate`.

use chrono::NaiveDate;
use std::sync::OnceLock;

use crate::{calendar, IndonesiaCalendar};
use libur_calendar::Observed;
use libur_types::{Holiday, LiburError};

static CALENDAR: OnceLock<IndonesiaCalendar> = OnceLock::new();

fn shared() -> &'static IndonesiaCalendar {
    CALENDAR.get_or_init(calendar)
}

/// Extends `NaiveDate` with Indonesian holiday lookups.
pub trait IndonesiaDateExt {
    /// Returns the holiday on this date, if any. Where two holidays coincide
    /// the one listed first in the catalog is returned.
    fn try_indonesian_holiday(&self) -> Result<Option<&'static Holiday>, LiburError>;

    /// Returns true if this date is an Indonesian holiday.
    fn is_indonesian_holiday(&self) -> Result<bool, LiburError>;

    /// Finds the next Indonesian holiday after this date (up to 400 days ahead).
    /// Returns `None` if lunar resolution fails along the way.
    fn next_indonesian_holiday(&self) -> Option<Observed<'static>>;
}

impl IndonesiaDateExt for NaiveDate {
    fn try_indonesian_holiday(&self) -> Result<Option<&'static Holiday>, LiburError> {
        shared().holiday_on(*self)
    }

    fn is_indonesian_holiday(&self) -> Result<bool, LiburError> {
        shared().is_holiday(*self)
    }

    fn next_indonesian_holiday(&self) -> Option<Observed<'static>> {
        shared().next_holiday(*self).ok().flatten()
    }
}
