// ABOUTME: Tests for Monday-start weekly training aggregates
// ABOUTME: Covers week boundaries, zero-filled weeks, ordering, and countable-set filtering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

mod helpers;

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use helpers::fixtures::{date, lift, reference_sunday, session, weekly_volume_history};
use pierre_strength::intelligence::{week_start, weekly_summaries};
use pierre_strength::models::{WorkoutExercise, WorkoutSet};

#[test]
fn test_week_start_is_monday() {
    assert_eq!(week_start(date(2025, 3, 3)), date(2025, 3, 3));
    assert_eq!(week_start(date(2025, 3, 9)), date(2025, 3, 3));
    assert_eq!(week_start(date(2025, 3, 5)).weekday(), Weekday::Mon);
    // Across a year boundary
    assert_eq!(week_start(date(2025, 1, 1)), date(2024, 12, 30));
}

#[test]
fn test_summaries_are_oldest_first_and_zero_filled() {
    let today = reference_sunday();
    let history = vec![session(
        "Push",
        date(2025, 2, 18),
        vec![lift("Bench Press", &[(100.0, 5), (100.0, 5)])],
    )];

    let weeks = weekly_summaries(&history, 6, today);
    assert_eq!(weeks.len(), 6);
    assert_eq!(weeks[0].week_start, date(2025, 1, 27));
    assert_eq!(weeks[5].week_start, date(2025, 3, 3));
    assert_eq!(weeks[5].week_end(), today);
    assert!(weeks.windows(2).all(|w| w[0].week_start < w[1].week_start));

    let populated: Vec<_> = weeks.iter().filter(|w| w.workout_count > 0).collect();
    assert_eq!(populated.len(), 1);
    assert_eq!(populated[0].week_start, date(2025, 2, 17));
    assert_eq!(populated[0].total_volume, 1000.0);
    assert_eq!(populated[0].total_sets, 2);
    assert_eq!(populated[0].total_reps, 10);
}

#[test]
fn test_sessions_outside_range_are_ignored() {
    let today = reference_sunday();
    let history = vec![
        session("Old", date(2024, 12, 2), vec![lift("Squat", &[(100.0, 5)])]),
        session("Future", date(2025, 3, 10), vec![lift("Squat", &[(100.0, 5)])]),
    ];
    let weeks = weekly_summaries(&history, 6, today);
    assert!(weeks.iter().all(|w| w.workout_count == 0 && w.total_volume == 0.0));
}

#[test]
fn test_incomplete_sets_count_sessions_but_not_volume() {
    let today = reference_sunday();
    let history = vec![session(
        "Planned",
        date(2025, 3, 4),
        vec![WorkoutExercise::with_sets(
            "Squat",
            vec![WorkoutSet::pending(100.0, 5), WorkoutSet::new(60.0, 5)],
        )],
    )];
    let weeks = weekly_summaries(&history, 1, today);
    assert_eq!(weeks.len(), 1);
    assert_eq!(weeks[0].workout_count, 1);
    assert_eq!(weeks[0].total_sets, 1);
    assert_eq!(weeks[0].total_volume, 300.0);
}

#[test]
fn test_volume_fixture_round_trips_through_summaries() {
    let today = reference_sunday();
    let volumes = [1000.0, 1000.0, 1000.0, 1000.0, 700.0, 650.0];
    let history = weekly_volume_history(&volumes, today, 1);
    let weeks = weekly_summaries(&history, 6, today);
    let totals: Vec<f64> = weeks.iter().map(|w| w.total_volume).collect();
    assert_eq!(totals, volumes.to_vec());
}

#[test]
fn test_summaries_stop_at_earliest_representable_week() {
    let today = NaiveDate::MIN + Duration::days(20);
    let summaries = weekly_summaries(&[], 10, today);

    assert!((3..=4).contains(&summaries.len()));
    assert!(summaries
        .windows(2)
        .all(|pair| pair[0].week_start < pair[1].week_start));
    assert_eq!(summaries.last().unwrap().week_start, week_start(today));
}
