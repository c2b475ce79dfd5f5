use chrono::{Datelike, Duration, NaiveDate};
use libur_core::prelude::*;
use libur_core::{dates_in_year, declarations, HIJRI_MAX_YEAR, HIJRI_MIN_YEAR};
use proptest::prelude::*;

fn method_strategy() -> impl Strategy<Value = HijriMethod> {
    prop_oneof![Just(HijriMethod::Arithmetic), Just(HijriMethod::UmmAlQura)]
}

proptest! {
    /// Invariant: resolving twice with the same inputs gives the same date.
    #[test]
    fn resolution_is_deterministic(
        days in 0i64..18000,
        month in 1u8..=12,
        day in 1u8..=29,
        method in method_strategy(),
    ) {
        // 1950-01-01 .. ~1999, inside the Umm al-Qura tables
        let reference = NaiveDate::from_ymd_opt(1950, 1, 1).unwrap() + Duration::days(days);
        let resolver = HijriResolver::default();

        let a = resolver.resolve(method, month, day, reference);
        let b = resolver.resolve(method, month, day, reference);
        prop_assert_eq!(a, b);
    }

    /// Invariant: the resolved date lies in the lunar year of the reference,
    /// so it is never more than one lunar year away from it.
    #[test]
    fn resolved_date_is_near_reference(
        days in 0i64..18000,
        month in 1u8..=12,
        day in 1u8..=29,
        method in method_strategy(),
    ) {
        let reference = NaiveDate::from_ymd_opt(1950, 1, 1).unwrap() + Duration::days(days);
        let resolver = HijriResolver::default();

        let resolved = resolver.resolve_date(LunarDate::new(month, day, method), reference).unwrap();
        let distance = (resolved - reference).num_days().abs();
        prop_assert!(distance <= 356, "{} is {} days from {}", resolved, distance, reference);
    }

    /// Invariant: every evaluated occurrence falls inside the requested year,
    /// and every catalog holiday occurs at least once a year.
    #[test]
    fn occurrences_stay_in_year(year in HIJRI_MIN_YEAR..=HIJRI_MAX_YEAR) {
        let resolver = HijriResolver::default();
        for holiday in declarations() {
            let dates = dates_in_year(&holiday, year, &resolver).unwrap();
            prop_assert!(!dates.is_empty(), "{} missing in {}", holiday.name(), year);
            prop_assert!(dates.len() <= 2);
            prop_assert!(dates.iter().all(|d| d.year() == year));
        }
    }

    /// Invariant: catalog construction never yields an unresolved lunar rule.
    #[test]
    fn catalog_is_fully_resolved(days in 0i64..18000) {
        let reference = NaiveDate::from_ymd_opt(1950, 1, 1).unwrap() + Duration::days(days);
        let cat = Catalog::build(&HijriResolver::default(), reference).unwrap();
        prop_assert_eq!(cat.len(), 12);
        for holiday in cat.iter() {
            prop_assert!(holiday.rule.month_day().is_some() || matches!(holiday.rule, DateRule::OffsetFromEaster(_)));
        }
    }
}
