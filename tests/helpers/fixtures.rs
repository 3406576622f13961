// ABOUTME: Workout history fixture builders shared by the analyzer integration tests
// ABOUTME: Builds sessions, lifts, 1RM series, and weekly volume series with fixed dates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use pierre_strength::intelligence::WeeklySummary;
use pierre_strength::models::{WorkoutExercise, WorkoutLog, WorkoutSet};

/// Load used by weekly volume fixtures so reps carry the volume
pub const VOLUME_FIXTURE_LOAD_KG: f64 = 50.0;

/// Build a date, panicking on invalid input
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

/// A Sunday used as "today" by most tests, so the whole current week is in the past
pub fn reference_sunday() -> NaiveDate {
    let sunday = date(2025, 3, 9);
    assert_eq!(sunday.weekday(), Weekday::Sun);
    sunday
}

/// An exercise with completed sets given as `(weight_kg, reps)`
pub fn lift(name: &str, sets: &[(f64, u32)]) -> WorkoutExercise {
    WorkoutExercise::with_sets(
        name,
        sets.iter()
            .map(|&(weight, reps)| WorkoutSet::new(weight, reps))
            .collect(),
    )
}

/// A session on `date` containing the given exercises
pub fn session(name: &str, date: NaiveDate, exercises: Vec<WorkoutExercise>) -> WorkoutLog {
    exercises
        .into_iter()
        .fold(WorkoutLog::new(name, date), WorkoutLog::exercise)
}

/// A session with a single exercise of one set
pub fn single_set_session(exercise: &str, date: NaiveDate, weight_kg: f64, reps: u32) -> WorkoutLog {
    session(exercise, date, vec![lift(exercise, &[(weight_kg, reps)])])
}

/// Sessions whose best 1RMs are `values` (oldest first), `spacing_days` apart, ending on `last`
///
/// Every session holds a single one-rep set, so the estimate equals the load.
pub fn one_rep_max_series(
    exercise: &str,
    values: &[f64],
    last: NaiveDate,
    spacing_days: i64,
) -> Vec<WorkoutLog> {
    let count = values.len() as i64;
    values
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let offset = (count - 1 - i as i64) * spacing_days;
            single_set_session(exercise, last - Duration::days(offset), value, 1)
        })
        .collect()
}

/// History whose Monday-start weekly volumes are `volumes` (oldest first), ending the week of `today`
///
/// Each week holds `workouts_per_week` sessions on alternating days at a fixed
/// load, so per-set weight never changes. Every week uses its own exercise name
/// so the fixture never produces plateaus.
pub fn weekly_volume_history(
    volumes: &[f64],
    today: NaiveDate,
    workouts_per_week: u32,
) -> Vec<WorkoutLog> {
    let current_monday = today - Duration::days(i64::from(today.weekday().num_days_from_monday()));
    let weeks = volumes.len() as i64;
    let mut history = Vec::new();
    for (i, &volume) in volumes.iter().enumerate() {
        let monday = current_monday - Duration::weeks(weeks - 1 - i as i64);
        let per_session = volume / f64::from(workouts_per_week);
        let reps = (per_session / VOLUME_FIXTURE_LOAD_KG).round() as u32;
        for day in 0..workouts_per_week {
            history.push(single_set_session(
                &format!("Volume Lift {i}"),
                monday + Duration::days(i64::from(day) * 2),
                VOLUME_FIXTURE_LOAD_KG,
                reps,
            ));
        }
    }
    history
}

/// Weekly summaries with the given volumes and a fixed workout count, oldest first
pub fn summaries(volumes: &[f64], workouts: u32) -> Vec<WeeklySummary> {
    let first_monday = date(2025, 1, 27);
    volumes
        .iter()
        .enumerate()
        .map(|(i, &volume)| WeeklySummary {
            week_start: first_monday + Duration::weeks(i as i64),
            total_volume: volume,
            workout_count: workouts,
            total_sets: workouts,
            total_reps: 0,
        })
        .collect()
}

/// Assert two floats are within `tolerance`
pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} (+/- {tolerance}), got {actual}"
    );
}
