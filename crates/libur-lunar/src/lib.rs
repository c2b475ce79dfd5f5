//! Hijri lunar date resolution for libur.
//!
//! Answers "which Gregorian date is lunar day D of month M" for the lunar
//! year containing a reference date, or for every occurrence inside a
//! Gregorian year.

mod config;
mod hijri;

use chrono::{Datelike, NaiveDate};
use log::debug;
use smallvec::SmallVec;

pub use config::{ResolverConfig, ResolverConfigBuilder};
pub use hijri::{
    umm_al_qura_bounds, HijriResolver, HIJRI_MAX_YEAR, HIJRI_MIN_YEAR, UMM_AL_QURA_MAX_HIJRI_YEAR,
    UMM_AL_QURA_MIN_HIJRI_YEAR,
};
pub use libur_types::{HijriMethod, LiburError, LunarDate};

/// Converts between the Hijri calendar and Gregorian dates.
///
/// Implementors supply the two engine operations; resolution is built on
/// top of them.
pub trait LunarResolver: std::fmt::Debug + Send + Sync {
    /// Returns the Hijri year containing `date`.
    fn lunar_year(&self, method: HijriMethod, date: NaiveDate) -> Result<i32, LiburError>;

    /// Converts a full Hijri date to its Gregorian date.
    fn to_gregorian(
        &self,
        method: HijriMethod,
        year: i32,
        month: u8,
        day: u8,
    ) -> Result<NaiveDate, LiburError>;

    /// Resolves lunar `month`/`day` in the lunar year containing `reference`
    /// to a Gregorian (month, day) pair.
    fn resolve(
        &self,
        method: HijriMethod,
        lunar_month: u8,
        lunar_day: u8,
        reference: NaiveDate,
    ) -> Result<(u32, u32), LiburError> {
        let date = self.resolve_date(LunarDate::new(lunar_month, lunar_day, method), reference)?;
        Ok((date.month(), date.day()))
    }

    /// Resolves `lunar` in the lunar year containing `reference`.
    fn resolve_date(&self, lunar: LunarDate, reference: NaiveDate) -> Result<NaiveDate, LiburError> {
        let year = self.lunar_year(lunar.method, reference)?;
        lunar.validate(year)?;
        let date = self.to_gregorian(lunar.method, year, lunar.month, lunar.day)?;
        debug!("resolved {} {} AH to {} (reference {})", lunar, year, date, reference);
        Ok(date)
    }

    /// Returns every occurrence of `lunar` within Gregorian `year`, in order.
    ///
    /// A Gregorian year overlaps two or three Hijri years, so the result
    /// holds zero, one or two dates.
    fn resolve_in_year(&self, lunar: LunarDate, year: i32) -> Result<SmallVec<[NaiveDate; 2]>, LiburError> {
        let (first, last) = match (
            NaiveDate::from_ymd_opt(year, 1, 1),
            NaiveDate::from_ymd_opt(year, 12, 31),
        ) {
            (Some(first), Some(last)) => (first, last),
            _ => {
                return Err(LiburError::conversion(
                    lunar.method,
                    (0, lunar.month, lunar.day),
                    format!("Gregorian year {} is not representable", year),
                ))
            }
        };

        let from = self.lunar_year(lunar.method, first)?;
        let to = self.lunar_year(lunar.method, last)?;
        lunar.validate(from)?;

        let mut dates = SmallVec::new();
        for lunar_year in from..=to {
            let date = self.to_gregorian(lunar.method, lunar_year, lunar.month, lunar.day)?;
            if date.year() == year {
                dates.push(date);
            }
        }
        debug!("{} falls {} time(s) in {}", lunar, dates.len(), year);
        Ok(dates)
    }
}

impl<R: LunarResolver + ?Sized> LunarResolver for &R {
    fn lunar_year(&self, method: HijriMethod, date: NaiveDate) -> Result<i32, LiburError> {
        (**self).lunar_year(method, date)
    }

    fn to_gregorian(
        &self,
        method: HijriMethod,
        year: i32,
        month: u8,
        day: u8,
    ) -> Result<NaiveDate, LiburError> {
        (**self).to_gregorian(method, year, month, day)
    }
}
