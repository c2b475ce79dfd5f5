use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

use crate::lunar::LunarDate;

/// Whether a holiday is a day off for everyone or a faith observance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    /// National non-working day.
    Public,
    /// Religious holiday.
    Religious,
    /// Cultural observance, not necessarily a day off.
    Observance,
}

impl Classification {
    pub fn is_public(&self) -> bool {
        matches!(self, Classification::Public)
    }

    pub fn is_religious(&self) -> bool {
        matches!(self, Classification::Religious)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Classification::Public => "Public",
            Classification::Religious => "Religious",
            Classification::Observance => "Observance",
        };
        write!(f, "{}", s)
    }
}

/// How a holiday lands on the Gregorian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DateRule {
    /// Same month and day every year.
    FixedMonthDay { month: u32, day: u32 },
    /// Signed number of days from Easter Sunday.
    OffsetFromEaster(i64),
    /// A Hijri date, resolved per year.
    Lunar(LunarDate),
    /// A Hijri date already resolved to a Gregorian month and day for one
    /// lunar cycle.
    LunarResolved { lunar: LunarDate, month: u32, day: u32 },
}

impl DateRule {
    /// Returns the originating lunar date, resolved or not.
    pub fn lunar(&self) -> Option<LunarDate> {
        match self {
            DateRule::Lunar(lunar) | DateRule::LunarResolved { lunar, .. } => Some(*lunar),
            _ => None,
        }
    }

    /// Returns the Gregorian month and day when the rule pins one.
    pub fn month_day(&self) -> Option<(u32, u32)> {
        match self {
            DateRule::FixedMonthDay { month, day }
            | DateRule::LunarResolved { month, day, .. } => Some((*month, *day)),
            _ => None,
        }
    }
}

/// One named, datable holiday.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Holiday {
    pub name: Cow<'static, str>,
    pub classification: Classification,
    pub rule: DateRule,
}

impl Holiday {
    pub const fn new(name: &'static str, classification: Classification, rule: DateRule) -> Self {
        Self {
            name: Cow::Borrowed(name),
            classification,
            rule,
        }
    }

    pub const fn fixed(name: &'static str, classification: Classification, month: u32, day: u32) -> Self {
        Self::new(name, classification, DateRule::FixedMonthDay { month, day })
    }

    pub const fn easter_offset(name: &'static str, classification: Classification, days: i64) -> Self {
        Self::new(name, classification, DateRule::OffsetFromEaster(days))
    }

    pub const fn lunar(name: &'static str, classification: Classification, lunar: LunarDate) -> Self {
        Self::new(name, classification, DateRule::Lunar(lunar))
    }

    /// Returns a copy with a new name and classification, keeping the rule.
    pub fn relabel(&self, name: impl Into<Cow<'static, str>>, classification: Classification) -> Self {
        Self {
            name: name.into(),
            classification,
            rule: self.rule,
        }
    }

    /// Returns a copy with `rule` in place of the current one.
    pub fn with_rule(&self, rule: DateRule) -> Self {
        Self {
            name: self.name.clone(),
            classification: self.classification,
            rule,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Holiday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.classification)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lunar::HijriMethod;

    #[test]
    fn test_relabel_leaves_template_untouched() {
        let template = Holiday::fixed("New Year's Day", Classification::Public, 1, 1);
        let local = template.relabel("Tahun Baru", Classification::Public);
        assert_eq!(local.name(), "Tahun Baru");
        assert_eq!(local.rule, template.rule);
        assert_eq!(template.name(), "New Year's Day");
    }

    #[test]
    fn test_rule_accessors() {
        let lunar = LunarDate::new(3, 12, HijriMethod::Arithmetic);
        let resolved = DateRule::LunarResolved { lunar, month: 9, day: 16 };
        assert_eq!(resolved.lunar(), Some(lunar));
        assert_eq!(resolved.month_day(), Some((9, 16)));
        assert_eq!(DateRule::Lunar(lunar).month_day(), None);
        assert_eq!(DateRule::OffsetFromEaster(-2).lunar(), None);
    }
}
