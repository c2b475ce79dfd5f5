//! Holiday templates and yearly rule evaluation for libur.
//!
//! A [`HolidayCalendar`] holds a set of [`Holiday`] values and places each
//! of them on the Gregorian calendar for any requested year. Observed-on-
//! another-day rules are not modelled: a holiday that coincides with a
//! weekend or another holiday stays where it is.

mod easter;
pub mod templates;

use chrono::{Datelike, Duration, NaiveDate};
use log::debug;
use smallvec::SmallVec;

pub use easter::easter_sunday;
pub use libur_lunar::LunarResolver;
pub use libur_types::{Classification, DateRule, Holiday, LiburError};

/// Furthest ahead `next_holiday` looks.
pub const SEARCH_WINDOW_DAYS: i64 = 400;

/// One holiday placed on a concrete date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Observed<'a> {
    pub date: NaiveDate,
    pub holiday: &'a Holiday,
}

/// Returns the dates `holiday` falls on in Gregorian `year`.
///
/// Fixed days that do not exist in `year` (29 February) yield nothing.
pub fn dates_in_year<R: LunarResolver>(
    holiday: &Holiday,
    year: i32,
    resolver: &R,
) -> Result<SmallVec<[NaiveDate; 2]>, LiburError> {
    let mut dates = SmallVec::new();
    match holiday.rule {
        DateRule::FixedMonthDay { month, day } | DateRule::LunarResolved { month, day, .. } => {
            if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
                dates.push(date);
            }
        }
        DateRule::OffsetFromEaster(offset) => {
            if let Some(date) = easter_sunday(year).and_then(|e| e.checked_add_signed(Duration::days(offset))) {
                dates.push(date);
            }
        }
        DateRule::Lunar(lunar) => {
            dates = resolver.resolve_in_year(lunar, year)?;
        }
    }
    Ok(dates)
}

/// A set of holidays evaluated against one lunar resolver.
#[derive(Debug, Clone)]
pub struct HolidayCalendar<R: LunarResolver> {
    holidays: Vec<Holiday>,
    resolver: R,
}

impl<R: LunarResolver> HolidayCalendar<R> {
    pub fn new(resolver: R) -> Self {
        Self { holidays: Vec::new(), resolver }
    }

    pub fn with_holidays(resolver: R, holidays: impl IntoIterator<Item = Holiday>) -> Self {
        Self { holidays: holidays.into_iter().collect(), resolver }
    }

    /// Registers a holiday.
    pub fn add(mut self, holiday: Holiday) -> Self {
        self.holidays.push(holiday);
        self
    }

    pub fn holidays(&self) -> &[Holiday] {
        &self.holidays
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Every holiday occurrence in `year`, sorted by date. Holidays that
    /// coincide keep registration order.
    pub fn observances_in(&self, year: i32) -> Result<Vec<Observed<'_>>, LiburError> {
        let mut observed = Vec::with_capacity(self.holidays.len());
        for holiday in &self.holidays {
            for date in dates_in_year(holiday, year, &self.resolver)? {
                observed.push(Observed { date, holiday });
            }
        }
        observed.sort_by_key(|o| o.date);
        debug!("{} holiday occurrence(s) in {}", observed.len(), year);
        Ok(observed)
    }

    /// All holidays falling on `date`.
    pub fn holidays_on(&self, date: NaiveDate) -> Result<SmallVec<[&Holiday; 2]>, LiburError> {
        Ok(self
            .observances_in(date.year())?
            .into_iter()
            .filter(|o| o.date == date)
            .map(|o| o.holiday)
            .collect())
    }

    /// The first registered holiday falling on `date`.
    pub fn holiday_on(&self, date: NaiveDate) -> Result<Option<&Holiday>, LiburError> {
        Ok(self.holidays_on(date)?.into_iter().next())
    }

    pub fn is_holiday(&self, date: NaiveDate) -> Result<bool, LiburError> {
        Ok(!self.holidays_on(date)?.is_empty())
    }

    /// Finds the next holiday strictly after `date` (up to 400 days ahead).
    pub fn next_holiday(&self, date: NaiveDate) -> Result<Option<Observed<'_>>, LiburError> {
        let Some(limit) = date.checked_add_signed(Duration::days(SEARCH_WINDOW_DAYS)) else {
            return Ok(None);
        };
        for year in date.year()..=limit.year() {
            if let Some(found) = self
                .observances_in(year)?
                .into_iter()
                .find(|o| o.date > date && o.date <= limit)
            {
                return Ok(Some(found));
            }
        }
        Ok(None)
    }
}
