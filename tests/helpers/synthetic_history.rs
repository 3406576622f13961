// ABOUTME: Synthetic workout history generator for sweep tests and benchmarks
// ABOUTME: Produces deterministic push/pull/legs programs with progressive overload and noise
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use chrono::{Duration, NaiveDate};
use pierre_strength::models::{WorkoutExercise, WorkoutLog, WorkoutSet};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Exercises per training day with their starting loads (kg)
const PROGRAM: &[(&str, &[(&str, f64)])] = &[
    (
        "Push",
        &[
            ("Bench Press", 60.0),
            ("Overhead Press", 35.0),
            ("Dumbbell Fly", 12.0),
            ("Tricep Pushdown", 20.0),
        ],
    ),
    (
        "Pull",
        &[
            ("Deadlift", 90.0),
            ("Barbell Row", 50.0),
            ("Lat Pulldown", 45.0),
            ("Barbell Curl", 25.0),
        ],
    ),
    (
        "Legs",
        &[
            ("Squat", 80.0),
            ("Leg Press", 120.0),
            ("Leg Curl", 35.0),
            ("Standing Calf Raise", 40.0),
        ],
    ),
];

/// Builder for deterministic synthetic training histories
#[derive(Debug, Clone)]
pub struct SyntheticHistoryBuilder {
    rng: ChaCha8Rng,
    weekly_progression: f64,
    skip_probability: f64,
}

impl SyntheticHistoryBuilder {
    /// Create a builder with a deterministic seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            weekly_progression: 0.02,
            skip_probability: 0.1,
        }
    }

    /// Fractional load increase per week
    pub fn weekly_progression(mut self, fraction: f64) -> Self {
        self.weekly_progression = fraction;
        self
    }

    /// Probability a planned session is skipped
    pub fn skip_probability(mut self, probability: f64) -> Self {
        self.skip_probability = probability;
        self
    }

    /// Generate `weeks` of three sessions per week ending on `last_day`
    pub fn generate(&mut self, weeks: u32, last_day: NaiveDate) -> Vec<WorkoutLog> {
        let first_day = last_day - Duration::weeks(i64::from(weeks)) + Duration::days(1);
        let mut history = Vec::new();
        for week in 0..weeks {
            let monday = first_day + Duration::weeks(i64::from(week));
            let progression = self.weekly_progression.mul_add(f64::from(week), 1.0);
            for (day, (session_name, lifts)) in PROGRAM.iter().enumerate() {
                if self.rng.gen_bool(self.skip_probability) {
                    continue;
                }
                let date = monday + Duration::days(day as i64 * 2);
                if date > last_day {
                    continue;
                }
                let exercises = lifts
                    .iter()
                    .map(|(name, base)| self.exercise(name, base * progression))
                    .collect::<Vec<_>>();
                history.push(
                    exercises
                        .into_iter()
                        .fold(WorkoutLog::new(*session_name, date), WorkoutLog::exercise),
                );
            }
        }
        history
    }

    fn exercise(&mut self, name: &str, load: f64) -> WorkoutExercise {
        let sets = (0..self.rng.gen_range(3..=4))
            .map(|_| {
                let noise = self.rng.gen_range(-2.5..=2.5);
                let weight = ((load + noise) / 2.5).round() * 2.5;
                let reps = self.rng.gen_range(5..=10);
                if self.rng.gen_bool(0.05) {
                    WorkoutSet::pending(weight, reps)
                } else {
                    WorkoutSet::new(weight.max(2.5), reps)
                }
            })
            .collect();
        WorkoutExercise::with_sets(name, sets)
    }
}
