// ABOUTME: Benchmark fixtures generating realistic resistance-training histories
// ABOUTME: Index-derived loads and reps keep every run reproducible without a random source
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Deterministic workout history generation for benchmarks.

use chrono::{Duration, NaiveDate};
use pierre_strength::models::{WorkoutExercise, WorkoutLog, WorkoutSet};

/// Predefined history lengths for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum HistoryLength {
    /// Two months of training
    Short,
    /// Six months of training, a typical active user
    Medium,
    /// Two years of training
    Long,
}

impl HistoryLength {
    /// Weeks of history generated
    #[must_use]
    pub const fn weeks(self) -> u32 {
        match self {
            Self::Short => 8,
            Self::Medium => 26,
            Self::Long => 104,
        }
    }

    /// Label used in benchmark ids
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Short => "8_weeks",
            Self::Medium => "26_weeks",
            Self::Long => "104_weeks",
        }
    }
}

/// Upper/lower split with starting loads (kg)
const SPLIT: &[(&str, &[(&str, f64)])] = &[
    (
        "Upper A",
        &[
            ("Bench Press", 60.0),
            ("Barbell Row", 50.0),
            ("Overhead Press", 35.0),
            ("Barbell Curl", 25.0),
        ],
    ),
    (
        "Lower A",
        &[
            ("Squat", 80.0),
            ("Romanian Deadlift", 70.0),
            ("Leg Curl", 35.0),
            ("Standing Calf Raise", 40.0),
        ],
    ),
    (
        "Upper B",
        &[
            ("Incline Bench Press", 50.0),
            ("Lat Pulldown", 45.0),
            ("Lateral Raise", 8.0),
            ("Tricep Pushdown", 20.0),
        ],
    ),
    (
        "Lower B",
        &[
            ("Deadlift", 100.0),
            ("Leg Press", 120.0),
            ("Hip Thrust", 60.0),
            ("Cable Crunch", 30.0),
        ],
    ),
];

/// Reference date benchmarks analyze against (a Sunday)
#[must_use]
pub fn bench_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).unwrap_or_default()
}

/// Four sessions per week for `length`, ending the week of [`bench_today`]
#[allow(clippy::cast_possible_wrap)]
#[must_use]
pub fn generate_history(length: HistoryLength) -> Vec<WorkoutLog> {
    let weeks = length.weeks();
    let first_monday = bench_today() - Duration::weeks(i64::from(weeks)) + Duration::days(1);
    let mut history = Vec::with_capacity(weeks as usize * SPLIT.len());

    for week in 0..weeks {
        let monday = first_monday + Duration::weeks(i64::from(week));
        // Every fifth week is lighter
        let progression = if week % 5 == 4 {
            0.8
        } else {
            0.015f64.mul_add(f64::from(week % 20), 1.0)
        };
        for (day, (name, lifts)) in SPLIT.iter().enumerate() {
            let date = monday + Duration::days([0, 1, 3, 4][day]);
            let session = lifts
                .iter()
                .enumerate()
                .map(|(slot, (exercise, base))| {
                    generate_exercise(exercise, base * progression, week as usize + slot)
                })
                .fold(WorkoutLog::new(*name, date), WorkoutLog::exercise);
            history.push(session);
        }
    }
    history
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn generate_exercise(name: &str, load: f64, index: usize) -> WorkoutExercise {
    let set_count = 3 + index % 2;
    let sets = (0..set_count)
        .map(|set| {
            let wobble = ((index * 7 + set * 3) % 5) as f64 - 2.0;
            let weight = ((load + wobble) / 2.5).round() * 2.5;
            let reps = 5 + ((index + set * 2) % 6) as u32;
            WorkoutSet::new(weight.max(2.5), reps)
        })
        .collect();
    WorkoutExercise::with_sets(name, sets)
}
