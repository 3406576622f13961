// ABOUTME: Weekly training aggregates over Monday-start ISO weeks
// ABOUTME: Shared by the deload recommender and exposed for weekly volume charts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};
use strength_core::constants::time::{days_after, days_before, DAYS_PER_WEEK};
use strength_core::models::WorkoutLog;

/// Aggregates for one Monday-start week
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeeklySummary {
    /// Monday the week starts on
    pub week_start: NaiveDate,
    /// Sum of countable set volume (kg)
    pub total_volume: f64,
    /// Sessions logged in the week
    pub workout_count: u32,
    /// Countable sets logged in the week
    pub total_sets: u32,
    /// Reps across countable sets
    pub total_reps: u32,
}

impl WeeklySummary {
    const fn empty(week_start: NaiveDate) -> Self {
        Self {
            week_start,
            total_volume: 0.0,
            workout_count: 0,
            total_sets: 0,
            total_reps: 0,
        }
    }

    /// Last day of the week (Sunday)
    #[must_use]
    pub fn week_end(&self) -> NaiveDate {
        days_after(self.week_start, DAYS_PER_WEEK.unsigned_abs() - 1)
    }

    fn contains(&self, date: NaiveDate) -> bool {
        date >= self.week_start && date <= self.week_end()
    }
}

/// Monday of the week containing `date`
#[must_use]
pub fn week_start(date: NaiveDate) -> NaiveDate {
    days_before(date, u64::from(date.weekday().num_days_from_monday()))
}

/// Summaries for the last `weeks` Monday-start weeks ending with the week containing `today`
///
/// Returned oldest first; weeks without sessions are present with zero totals.
/// Weeks that would start before the earliest representable date are dropped.
#[must_use]
pub fn weekly_summaries(history: &[WorkoutLog], weeks: usize, today: NaiveDate) -> Vec<WeeklySummary> {
    let current = week_start(today);
    let weeks = u64::try_from(weeks).unwrap_or(u64::MAX);
    let mut summaries: Vec<WeeklySummary> = (0..weeks)
        .map_while(|offset| {
            offset
                .checked_mul(DAYS_PER_WEEK.unsigned_abs())
                .and_then(|days| current.checked_sub_days(Days::new(days)))
        })
        .map(WeeklySummary::empty)
        .collect();
    summaries.reverse();

    for session in history {
        let Some(summary) = summaries.iter_mut().find(|week| week.contains(session.date)) else {
            continue;
        };
        summary.workout_count += 1;
        for set in session
            .exercises
            .iter()
            .flat_map(|exercise| exercise.countable_sets())
        {
            summary.total_volume += set.volume();
            summary.total_sets += 1;
            summary.total_reps += set.reps;
        }
    }
    summaries
}
