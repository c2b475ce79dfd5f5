use chrono::{Datelike, Duration, NaiveDate};
use hijri_date::HijriDate;
use icu_calendar::islamic::IslamicCivil;
use icu_calendar::Date;
use log::trace;
use std::sync::OnceLock;

use crate::config::ResolverConfig;
use crate::LunarResolver;
use libur_types::{HijriMethod, LiburError};

/// First Hijri year in the Umm al-Qura tables.
pub const UMM_AL_QURA_MIN_HIJRI_YEAR: i32 = 1357;
/// Last Hijri year in the Umm al-Qura tables.
pub const UMM_AL_QURA_MAX_HIJRI_YEAR: i32 = 1499;

/// First Gregorian year lying wholly inside the Umm al-Qura tables.
/// 1938 is only covered from 1 Muharram 1357 (early March).
pub const HIJRI_MIN_YEAR: i32 = 1939;
/// Last Gregorian year lying wholly inside the Umm al-Qura tables.
/// 2076 is only covered up to the end of 1499 AH (November).
pub const HIJRI_MAX_YEAR: i32 = 2075;

/// Default resolver: `hijri_date` tables for Umm al-Qura, ICU's civil
/// calendar for arithmetic rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HijriResolver {
    config: ResolverConfig,
}

impl HijriResolver {
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    fn shift(&self, date: NaiveDate, days: i64) -> Result<NaiveDate, LiburError> {
        date.checked_add_signed(Duration::days(days))
            .ok_or_else(|| unrepresentable(date))
    }
}

/// Creates a `DateOutOfRange` error for dates chrono or ICU cannot carry.
fn unrepresentable(date: NaiveDate) -> LiburError {
    LiburError::DateOutOfRange { date, min: NaiveDate::MIN, max: NaiveDate::MAX }
}

static UMM_AL_QURA_BOUNDS: OnceLock<(NaiveDate, NaiveDate)> = OnceLock::new();

/// First and last Gregorian days covered by the Umm al-Qura tables.
pub fn umm_al_qura_bounds() -> (NaiveDate, NaiveDate) {
    *UMM_AL_QURA_BOUNDS.get_or_init(|| {
        let gregorian = |h: &HijriDate| {
            NaiveDate::from_ymd_opt(h.year_gr() as i32, h.month_gr() as u32, h.day_gr() as u32)
        };
        let first = HijriDate::from_hijri(UMM_AL_QURA_MIN_HIJRI_YEAR as usize, 1, 1)
            .ok()
            .and_then(|h| gregorian(&h))
            .unwrap_or(NaiveDate::MIN);
        let last = HijriDate::from_hijri(UMM_AL_QURA_MAX_HIJRI_YEAR as usize, 12, 29)
            .ok()
            .and_then(|h| gregorian(&h))
            .map(|day_29| {
                // Zulhijah 1499 may have a 30th day.
                day_29
                    .succ_opt()
                    .filter(|next| {
                        HijriDate::from_gr(next.year() as usize, next.month() as usize, next.day() as usize)
                            .map(|h| h.year() as i32 == UMM_AL_QURA_MAX_HIJRI_YEAR)
                            .unwrap_or(false)
                    })
                    .unwrap_or(day_29)
            })
            .unwrap_or(NaiveDate::MAX);
        (first, last)
    })
}

/// Creates a `DateOutOfRange` error with the Umm al-Qura table bounds.
fn date_out_of_range(date: NaiveDate) -> LiburError {
    let (min, max) = umm_al_qura_bounds();
    LiburError::DateOutOfRange { date, min, max }
}

impl LunarResolver for HijriResolver {
    fn lunar_year(&self, method: HijriMethod, date: NaiveDate) -> Result<i32, LiburError> {
        let adjusted = self.shift(date, self.config.adjustment)?;

        let year = match method {
            HijriMethod::UmmAlQura => {
                let hijri = HijriDate::from_gr(
                    adjusted.year() as usize,
                    adjusted.month() as usize,
                    adjusted.day() as usize,
                )
                .map_err(|_| date_out_of_range(date))?;
                let year = hijri.year() as i32;
                // from_gr answers a little past the years from_hijri accepts.
                if !(UMM_AL_QURA_MIN_HIJRI_YEAR..=UMM_AL_QURA_MAX_HIJRI_YEAR).contains(&year) {
                    return Err(date_out_of_range(date));
                }
                year
            }
            HijriMethod::Arithmetic => {
                let iso = Date::try_new_iso_date(adjusted.year(), adjusted.month() as u8, adjusted.day() as u8)
                    .map_err(|_| unrepresentable(date))?;
                iso.to_calendar(IslamicCivil::new()).year().number
            }
        };

        trace!("{} is in {} AH ({})", date, year, method);
        Ok(year)
    }

    fn to_gregorian(
        &self,
        method: HijriMethod,
        year: i32,
        month: u8,
        day: u8,
    ) -> Result<NaiveDate, LiburError> {
        let conversion = |reason: String| LiburError::conversion(method, (year, month, day), reason);

        let table_date = match method {
            HijriMethod::UmmAlQura => {
                let lunar_year = usize::try_from(year)
                    .map_err(|_| conversion(format!("year {} precedes the Hijri epoch", year)))?;
                let hijri = HijriDate::from_hijri(lunar_year, month as usize, day as usize)
                    .map_err(|e| conversion(e.to_string()))?;
                let gregorian = NaiveDate::from_ymd_opt(
                    hijri.year_gr() as i32,
                    hijri.month_gr() as u32,
                    hijri.day_gr() as u32,
                )
                .ok_or_else(|| conversion("table produced an invalid Gregorian date".to_string()))?;

                // Tables roll a missing day 30 into the next month; catch it.
                let back = HijriDate::from_gr(
                    gregorian.year() as usize,
                    gregorian.month() as usize,
                    gregorian.day() as usize,
                )
                .map_err(|e| conversion(e.to_string()))?;
                if (back.year(), back.month(), back.day()) != (lunar_year, month as usize, day as usize) {
                    return Err(conversion(format!(
                        "day {} does not exist in month {} of {} AH",
                        day, month, year
                    )));
                }
                gregorian
            }
            HijriMethod::Arithmetic => {
                let hijri = Date::try_new_islamic_civil_date_with_calendar(year, month, day, IslamicCivil::new())
                    .map_err(|e| conversion(e.to_string()))?;
                let iso = hijri.to_iso();
                NaiveDate::from_ymd_opt(
                    iso.year().number,
                    iso.month().ordinal,
                    iso.day_of_month().0,
                )
                .ok_or_else(|| conversion("calendar produced an invalid Gregorian date".to_string()))?
            }
        };

        self.shift(table_date, -self.config.adjustment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use libur_types::LunarDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_lunar_year_both_methods() {
        let resolver = HijriResolver::default();
        let d = date(2024, 3, 11);
        assert_eq!(resolver.lunar_year(HijriMethod::UmmAlQura, d).unwrap(), 1445);
        assert_eq!(resolver.lunar_year(HijriMethod::Arithmetic, d).unwrap(), 1445);
    }

    #[test]
    fn test_umm_al_qura_out_of_range() {
        let resolver = HijriResolver::default();
        let res = resolver.lunar_year(HijriMethod::UmmAlQura, date(1900, 1, 1));
        assert!(matches!(res, Err(LiburError::DateOutOfRange { .. })));

        let res = resolver.lunar_year(HijriMethod::UmmAlQura, date(2100, 1, 1));
        assert!(matches!(res, Err(LiburError::DateOutOfRange { .. })));
    }

    #[test]
    fn test_umm_al_qura_table_edges() {
        let resolver = HijriResolver::default();
        // 1 Muharram 1357 falls in early March 1938.
        let res = resolver.lunar_year(HijriMethod::UmmAlQura, date(1938, 1, 1));
        assert!(matches!(res, Err(LiburError::DateOutOfRange { .. })), "got {:?}", res);
        assert_eq!(resolver.lunar_year(HijriMethod::UmmAlQura, date(1938, 6, 1)).unwrap(), 1357);

        // 1 Muharram 1500 falls in November 2076.
        assert_eq!(resolver.lunar_year(HijriMethod::UmmAlQura, date(2076, 1, 1)).unwrap(), 1499);
        let res = resolver.lunar_year(HijriMethod::UmmAlQura, date(2076, 12, 31));
        assert!(matches!(res, Err(LiburError::DateOutOfRange { .. })), "got {:?}", res);
    }

    #[test]
    fn test_out_of_range_reports_table_bounds() {
        let (min, max) = umm_al_qura_bounds();
        assert_eq!(min.year(), 1938);
        assert!((2..=3).contains(&min.month()), "min {}", min);
        assert_eq!(max.year(), 2076);
        assert!((10..=12).contains(&max.month()), "max {}", max);

        let resolver = HijriResolver::default();
        assert!(resolver.lunar_year(HijriMethod::UmmAlQura, min).is_ok());
        assert!(resolver.lunar_year(HijriMethod::UmmAlQura, max).is_ok());

        match resolver.lunar_year(HijriMethod::UmmAlQura, date(1930, 1, 1)) {
            Err(LiburError::DateOutOfRange { min: lo, max: hi, .. }) => assert_eq!((lo, hi), (min, max)),
            other => panic!("expected DateOutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn test_whole_years_in_tables() {
        let resolver = HijriResolver::default();
        let eid = LunarDate::new(10, 1, HijriMethod::UmmAlQura);
        assert_eq!(resolver.resolve_in_year(eid, HIJRI_MIN_YEAR).unwrap().len(), 1);
        assert_eq!(resolver.resolve_in_year(eid, HIJRI_MAX_YEAR).unwrap().len(), 1);
        assert!(matches!(
            resolver.resolve_in_year(eid, HIJRI_MAX_YEAR + 1),
            Err(LiburError::DateOutOfRange { .. })
        ));
    }

    #[test]
    fn test_umm_al_qura_rejects_missing_day_30() {
        // Jumada al-Ula 1445 has 29 days in the Umm al-Qura tables.
        let resolver = HijriResolver::default();
        let res = resolver.to_gregorian(HijriMethod::UmmAlQura, 1445, 5, 30);
        assert!(matches!(res, Err(LiburError::Conversion { .. })), "got {:?}", res);
    }

    #[test]
    fn test_arithmetic_has_no_table_limit() {
        let resolver = HijriResolver::default();
        let d = resolver
            .resolve_date(LunarDate::new(1, 1, HijriMethod::Arithmetic), date(2150, 6, 1))
            .unwrap();
        assert!(d <= date(2150, 6, 1));
    }

    #[test]
    fn test_arithmetic_rejects_missing_day_30() {
        // Safar has 29 days in the civil calendar.
        let resolver = HijriResolver::default();
        let res = resolver.to_gregorian(HijriMethod::Arithmetic, 1445, 2, 30);
        assert!(matches!(res, Err(LiburError::Conversion { .. })));
    }

    #[test]
    fn test_adjustment_shifts_result() {
        let plain = HijriResolver::default();
        let ahead = HijriResolver::new(ResolverConfig::new().adjustment(1));

        let a = plain.to_gregorian(HijriMethod::Arithmetic, 1445, 7, 27).unwrap();
        let b = ahead.to_gregorian(HijriMethod::Arithmetic, 1445, 7, 27).unwrap();
        assert_eq!(a - b, Duration::days(1));
    }
}
