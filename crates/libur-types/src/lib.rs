//! Core types for libur - Indonesian holiday catalog.
//!
//! This crate contains pure type definitions with no conversion logic.

mod error;
mod holiday;
mod lunar;

pub use error::LiburError;
pub use holiday::{Classification, DateRule, Holiday};
pub use lunar::{hijri_month_name, HijriMethod, LunarDate};
