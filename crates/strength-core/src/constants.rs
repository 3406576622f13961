// ABOUTME: Shared constants for strength analytics organized by domain
// ABOUTME: Units, saturating calendar arithmetic, and plate rounding values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module

/// Load and unit constants
pub mod units {
    /// Smallest plate increment used when rounding suggested loads (kg)
    pub const PLATE_INCREMENT_KG: f64 = 2.5;

    /// Lightest load the engine will ever suggest from a profile heuristic (kg)
    pub const MINIMUM_SUGGESTED_WEIGHT_KG: f64 = 5.0;
}

/// Calendar constants
pub mod time {
    use chrono::{Days, NaiveDate};

    /// Days in a training week
    pub const DAYS_PER_WEEK: i64 = 7;

    /// Days in a training week as a float, for ratio arithmetic
    pub const DAYS_PER_WEEK_F64: f64 = 7.0;

    /// `days` before `date`, saturating at the earliest representable date
    #[must_use]
    pub fn days_before(date: NaiveDate, days: u64) -> NaiveDate {
        date.checked_sub_days(Days::new(days))
            .unwrap_or(NaiveDate::MIN)
    }

    /// `days` after `date`, saturating at the latest representable date
    #[must_use]
    pub fn days_after(date: NaiveDate, days: u64) -> NaiveDate {
        date.checked_add_days(Days::new(days))
            .unwrap_or(NaiveDate::MAX)
    }
}

/// Round a load to the nearest multiple of `increment`
///
/// A non-positive increment leaves the value untouched.
#[must_use]
pub fn round_to_increment(value: f64, increment: f64) -> f64 {
    if increment <= 0.0 {
        return value;
    }
    (value / increment).round() * increment
}
