//! Holiday definitions for the Republic of Indonesia.
//!
//! Two views of the same table:
//!
//! - [`Catalog`]: every holiday with a fixed Gregorian month and day. Lunar
//!   holidays are resolved once, for the Hijri year containing a reference
//!   date. [`catalog()`] is the process-wide instance built from today.
//! - [`calendar()`]: a [`HolidayCalendar`] that resolves lunar holidays for
//!   whichever Gregorian year is asked about.
//!
//! Indonesia does not move a holiday to another day when it overlaps a
//! weekend or another holiday, so no alternate-day rules exist here.

pub mod extension;

use chrono::{Local, NaiveDate};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use libur_calendar::templates;
pub use libur_calendar::{HolidayCalendar, Observed};
pub use libur_lunar::{HijriResolver, LunarResolver};
pub use libur_types::{Classification, DateRule, HijriMethod, Holiday, LiburError, LunarDate};

/// Localized holiday names.
pub mod names {
    pub const NEW_YEAR: &str = "Tahun Baru";
    pub const GOOD_FRIDAY: &str = "Wafat Yesus Kristus";
    pub const WORKERS_DAY: &str = "Hari Buruh Internasional";
    pub const ASCENSION_DAY: &str = "Kenaikan Yesus Kristus";
    pub const PANCASILA_DAY: &str = "Hari Lahir Pancasila";
    pub const INDEPENDENCE_DAY: &str = "Hari Kemerdekaan Republik Indonesia";
    pub const CHRISTMAS_DAY: &str = "Hari Raya Natal";
    pub const EID_AL_FITR: &str = "Hari Raya Idulfitri";
    pub const EID_AL_ADHA: &str = "Hari Raya Iduladha";
    pub const ISLAMIC_NEW_YEAR: &str = "Tahun Baru Hijriah";
    pub const ISRA_MIRAJ: &str = "Isra' Mi'raj";
    pub const MAWLID: &str = "Maulid Nabi";
}

/// Pancasila Day, 1 June.
pub const PANCASILA_DAY: Holiday = Holiday::fixed(names::PANCASILA_DAY, Classification::Public, 6, 1);

/// Independence Day, 17 August.
pub const INDEPENDENCE_DAY: Holiday = Holiday::fixed(names::INDEPENDENCE_DAY, Classification::Public, 8, 17);

/// Eid al-Fitr, 1 Syawal.
pub const EID_AL_FITR: Holiday = Holiday::lunar(
    names::EID_AL_FITR,
    Classification::Religious,
    LunarDate::new(10, 1, HijriMethod::UmmAlQura),
);

/// Eid al-Adha, 10 Zulhijah.
pub const EID_AL_ADHA: Holiday = Holiday::lunar(
    names::EID_AL_ADHA,
    Classification::Religious,
    LunarDate::new(12, 10, HijriMethod::UmmAlQura),
);

/// Islamic New Year, 1 Muharam.
pub const ISLAMIC_NEW_YEAR: Holiday = Holiday::lunar(
    names::ISLAMIC_NEW_YEAR,
    Classification::Religious,
    LunarDate::new(1, 1, HijriMethod::Arithmetic),
);

/// Isra Mi'raj, 27 Rajab.
pub const ISRA_MIRAJ: Holiday = Holiday::lunar(
    names::ISRA_MIRAJ,
    Classification::Religious,
    LunarDate::new(7, 27, HijriMethod::Arithmetic),
);

/// Mawlid, 12 Rabiulawal.
pub const MAWLID: Holiday = Holiday::lunar(
    names::MAWLID,
    Classification::Religious,
    LunarDate::new(3, 12, HijriMethod::Arithmetic),
);

/// The full holiday table, lunar rules unresolved.
pub fn declarations() -> Vec<Holiday> {
    vec![
        templates::NEW_YEAR.relabel(names::NEW_YEAR, Classification::Public),
        templates::GOOD_FRIDAY.relabel(names::GOOD_FRIDAY, Classification::Religious),
        templates::WORKERS_DAY.relabel(names::WORKERS_DAY, Classification::Public),
        templates::ASCENSION_DAY.relabel(names::ASCENSION_DAY, Classification::Religious),
        PANCASILA_DAY,
        INDEPENDENCE_DAY,
        templates::CHRISTMAS_DAY.relabel(names::CHRISTMAS_DAY, Classification::Religious),
        EID_AL_FITR,
        EID_AL_ADHA,
        ISLAMIC_NEW_YEAR,
        ISRA_MIRAJ,
        MAWLID,
    ]
}

/// Indonesian holidays with every lunar date pinned to one Gregorian day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    reference: NaiveDate,
    holidays: Vec<Holiday>,
}

impl Catalog {
    /// Builds the catalog, resolving lunar holidays in the Hijri year that
    /// contains `reference`.
    ///
    /// # Errors
    /// The first resolution failure aborts the whole build as
    /// `CatalogConstruction`; no partial catalog is returned.
    pub fn build<R: LunarResolver>(resolver: &R, reference: NaiveDate) -> Result<Self, LiburError> {
        let holidays = declarations()
            .into_iter()
            .map(|holiday| resolve_entry(holiday, resolver, reference))
            .collect::<Result<Vec<_>, _>>()?;

        info!("built Indonesian catalog of {} holidays as of {}", holidays.len(), reference);
        Ok(Self { reference, holidays })
    }

    /// The date lunar holidays were resolved against.
    pub fn reference(&self) -> NaiveDate {
        self.reference
    }

    pub fn holidays(&self) -> &[Holiday] {
        &self.holidays
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Holiday> {
        self.holidays.iter()
    }

    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }

    /// Looks a holiday up by its localized name.
    pub fn get(&self, name: &str) -> Option<&Holiday> {
        self.holidays.iter().find(|h| h.name() == name)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Holiday;
    type IntoIter = std::slice::Iter<'a, Holiday>;

    fn into_iter(self) -> Self::IntoIter {
        self.holidays.iter()
    }
}

fn resolve_entry<R: LunarResolver>(
    holiday: Holiday,
    resolver: &R,
    reference: NaiveDate,
) -> Result<Holiday, LiburError> {
    let DateRule::Lunar(lunar) = holiday.rule else {
        return Ok(holiday);
    };

    let (month, day) = resolver
        .resolve(lunar.method, lunar.month, lunar.day, reference)
        .map_err(|e| e.in_catalog_entry(holiday.name()))?;
    debug!("{}: {} -> {:02}-{:02}", holiday.name(), lunar, month, day);

    Ok(holiday.with_rule(DateRule::LunarResolved { lunar, month, day }))
}

static CATALOG: OnceLock<Result<Catalog, LiburError>> = OnceLock::new();

/// The process-wide catalog, built on first use from today's local date.
///
/// The outcome is kept for the life of the process, including a failure.
/// Long-running programs that cross a Hijri year should use [`calendar()`]
/// or [`Catalog::build`] instead.
pub fn catalog() -> Result<&'static Catalog, LiburError> {
    CATALOG
        .get_or_init(|| Catalog::build(&HijriResolver::default(), Local::now().date_naive()))
        .as_ref()
        .map_err(Clone::clone)
}

/// Indonesian holidays resolved for any requested year.
pub type IndonesiaCalendar<R = HijriResolver> = HolidayCalendar<R>;

/// An [`IndonesiaCalendar`] over the default resolver.
pub fn calendar() -> IndonesiaCalendar {
    calendar_with(HijriResolver::default())
}

/// An [`IndonesiaCalendar`] over a custom resolver.
pub fn calendar_with<R: LunarResolver>(resolver: R) -> IndonesiaCalendar<R> {
    HolidayCalendar::with_holidays(resolver, declarations())
}
