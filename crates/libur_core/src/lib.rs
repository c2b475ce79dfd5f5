//! Indonesian holiday catalog - core.
//!
//! Aggregates the libur crates behind one import path.

pub use libur_calendar::{
    dates_in_year, easter_sunday, templates, HolidayCalendar, Observed, SEARCH_WINDOW_DAYS,
};
pub use libur_id::extension::IndonesiaDateExt;
pub use libur_id::{
    calendar, calendar_with, catalog, declarations, names, Catalog, IndonesiaCalendar,
};
pub use libur_lunar::{
    umm_al_qura_bounds, HijriResolver, LunarResolver, ResolverConfig, ResolverConfigBuilder,
    HIJRI_MAX_YEAR, HIJRI_MIN_YEAR, UMM_AL_QURA_MAX_HIJRI_YEAR, UMM_AL_QURA_MIN_HIJRI_YEAR,
};
pub use libur_types::{
    hijri_month_name, Classification, DateRule, HijriMethod, Holiday, LiburError, LunarDate,
};

/// Holiday constants for Indonesia.
pub mod id {
    pub use libur_id::{
        EID_AL_ADHA, EID_AL_FITR, INDEPENDENCE_DAY, ISLAMIC_NEW_YEAR, ISRA_MIRAJ, MAWLID,
        PANCASILA_DAY,
    };
}

pub mod prelude {
    pub use crate::{
        calendar, catalog, Catalog, Classification, DateRule, HijriMethod, HijriResolver,
        Holiday, IndonesiaDateExt, LiburError, LunarDate, LunarResolver,
    };
}
