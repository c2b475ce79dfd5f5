//! # Libur
//!
//! Indonesian public and religious holidays ("hari libur"), with Islamic
//! holidays placed on the Gregorian calendar through Hijri conversion.
//!
//! This crate is a facade that re-exports functionality from the `libur` ecosystem.
//!
//! ## Modules
//!
//! - `libur-types`: Core types (Holiday, DateRule, LunarDate, LiburError)
//! - `libur-lunar`: Hijri ↔ Gregorian resolution (arithmetic and Umm al-Qura)
//! - `libur-calendar`: Easter, shared templates, yearly rule evaluation
//! - `libur-id`: The Indonesian catalog
//!
//! ## Usage
//!
//! ```rust
//! use libur::prelude::*;
//! use chrono::NaiveDate;
//!
//! let date = NaiveDate::from_ymd_opt(2025, 8, 17).unwrap();
//! let holiday = date.try_indonesian_holiday(); // Result<Option<&Holiday>, LiburError>
//! ```

pub use libur_core::*;
