// ABOUTME: Core strength metrics: one-rep-max estimation, set volume, personal records, and trends
// ABOUTME: Leaf module every other analyzer builds on; pure functions over history snapshots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Core strength metrics

use crate::algorithms::OneRepMaxAlgorithm;
use crate::config::intelligence::{IntelligenceConfig, MetricsConfig};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strength_core::models::{sorted_asc, sorted_desc, WorkoutExercise, WorkoutLog, WorkoutSet};
use tracing::debug;

/// Estimated one-rep max with the set it came from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OneRepMaxEstimate {
    /// Estimated one-rep max (kg)
    pub value: f64,
    /// Load of the source set (kg)
    pub weight_kg: f64,
    /// Reps of the source set
    pub reps: u32,
}

/// Best estimated one-rep max ever recorded for an exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalRecord {
    /// Estimated one-rep max (kg)
    pub value: f64,
    /// Date it was achieved
    pub date: NaiveDate,
    /// Load of the source set (kg)
    pub weight_kg: f64,
    /// Reps of the source set
    pub reps: u32,
    /// Name of the session it was achieved in
    pub session_name: String,
}

/// Direction of a strength trend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    /// Estimated strength is going up
    Increasing,
    /// No meaningful change
    Stable,
    /// Estimated strength is going down
    Decreasing,
}

/// Strength trend over the most recent sessions of an exercise
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrengthTrend {
    /// Classified direction
    pub direction: TrendDirection,
    /// Average change in best 1RM between consecutive sessions (kg, newer minus older)
    pub average_delta: f64,
    /// Sessions that contributed a qualifying set
    pub sample_count: usize,
}

impl StrengthTrend {
    /// Trend with no usable samples
    #[must_use]
    pub const fn insufficient(sample_count: usize) -> Self {
        Self {
            direction: TrendDirection::Stable,
            average_delta: 0.0,
            sample_count,
        }
    }
}

/// One session of an exercise's chronological history, for charting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseHistoryPoint {
    /// Session date
    pub date: NaiveDate,
    /// Session name
    pub session_name: String,
    /// Best estimated one-rep max in the session, if any set qualified
    pub best_one_rep_max: Option<f64>,
    /// Total countable volume for the exercise in the session
    pub volume: f64,
    /// Heaviest countable set (by load, then reps)
    pub top_set: Option<WorkoutSet>,
}

/// Estimate a one-rep max with the Brzycki formula (reps clamped to 12)
#[must_use]
pub fn estimate_one_rep_max(weight_kg: f64, reps: u32) -> f64 {
    OneRepMaxAlgorithm::default().estimate(weight_kg, reps)
}

/// Best Brzycki estimate across the countable sets of an exercise instance
#[must_use]
pub fn best_one_rep_max(exercise: &WorkoutExercise) -> Option<OneRepMaxEstimate> {
    StrengthMetrics::default().best_one_rep_max(exercise)
}

/// Sum of load x reps over countable sets
#[must_use]
pub fn total_volume(exercise: &WorkoutExercise) -> f64 {
    exercise.sets.iter().map(WorkoutSet::volume).sum()
}

/// Highest best-1RM seen for an exercise across the whole history
#[must_use]
pub fn personal_record(exercise_name: &str, history: &[WorkoutLog]) -> Option<PersonalRecord> {
    StrengthMetrics::default().personal_record(exercise_name, history)
}

/// Strength trend over the most recent `window_size` sessions containing an exercise
#[must_use]
pub fn trend(exercise_name: &str, history: &[WorkoutLog], window_size: usize) -> StrengthTrend {
    StrengthMetrics::default().trend(exercise_name, history, window_size)
}

/// Strength metrics calculator with a selectable estimation algorithm
#[derive(Debug, Clone)]
pub struct StrengthMetrics {
    algorithm: OneRepMaxAlgorithm,
    config: MetricsConfig,
}

impl Default for StrengthMetrics {
    fn default() -> Self {
        Self::with_config(MetricsConfig::default())
    }
}

impl StrengthMetrics {
    /// Create a calculator from the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(IntelligenceConfig::global().metrics.clone())
    }

    /// Create a Brzycki calculator with custom configuration
    #[must_use]
    pub const fn with_config(config: MetricsConfig) -> Self {
        Self {
            algorithm: OneRepMaxAlgorithm::Brzycki {
                max_reps: config.brzycki_max_reps,
            },
            config,
        }
    }

    /// Swap the estimation algorithm
    #[must_use]
    pub const fn with_algorithm(mut self, algorithm: OneRepMaxAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Algorithm in use
    #[must_use]
    pub const fn algorithm(&self) -> OneRepMaxAlgorithm {
        self.algorithm
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &MetricsConfig {
        &self.config
    }

    /// Estimate a one-rep max for a single weight/rep pair
    #[must_use]
    pub fn estimate(&self, weight_kg: f64, reps: u32) -> f64 {
        self.algorithm.estimate(weight_kg, reps)
    }

    /// Best estimate across the countable sets of an exercise instance
    #[must_use]
    pub fn best_one_rep_max(&self, exercise: &WorkoutExercise) -> Option<OneRepMaxEstimate> {
        exercise
            .countable_sets()
            .map(|set| OneRepMaxEstimate {
                value: self.estimate(set.weight_kg, set.reps),
                weight_kg: set.weight_kg,
                reps: set.reps,
            })
            .fold(None, |best: Option<OneRepMaxEstimate>, candidate| match best {
                Some(current) if current.value >= candidate.value => Some(current),
                _ => Some(candidate),
            })
    }

    /// Best estimate for an exercise across every matching instance in one session
    #[must_use]
    pub fn best_in_session(
        &self,
        session: &WorkoutLog,
        exercise_name: &str,
    ) -> Option<OneRepMaxEstimate> {
        session
            .exercises_named(exercise_name)
            .filter_map(|exercise| self.best_one_rep_max(exercise))
            .fold(None, |best: Option<OneRepMaxEstimate>, candidate| match best {
                Some(current) if current.value >= candidate.value => Some(current),
                _ => Some(candidate),
            })
    }

    /// Highest best-1RM across history, tagged with the earliest date it was reached
    #[must_use]
    pub fn personal_record(
        &self,
        exercise_name: &str,
        history: &[WorkoutLog],
    ) -> Option<PersonalRecord> {
        self.personal_record_where(exercise_name, history, |_| true)
    }

    /// Personal record restricted to sessions accepted by `include`
    pub(crate) fn personal_record_where<F>(
        &self,
        exercise_name: &str,
        history: &[WorkoutLog],
        include: F,
    ) -> Option<PersonalRecord>
    where
        F: Fn(&WorkoutLog) -> bool,
    {
        let mut record: Option<PersonalRecord> = None;
        for session in sorted_asc(history).into_iter().filter(|s| include(s)) {
            let Some(best) = self.best_in_session(session, exercise_name) else {
                continue;
            };
            let improves = match &record {
                Some(current) => best.value > current.value,
                None => true,
            };
            if improves {
                record = Some(PersonalRecord {
                    value: best.value,
                    date: session.date,
                    weight_kg: best.weight_kg,
                    reps: best.reps,
                    session_name: session.name.clone(),
                });
            }
        }
        record
    }

    /// Strength trend over the most recent `window_size` sessions containing an exercise
    ///
    /// Sessions without a qualifying set are skipped rather than treated as zero.
    #[must_use]
    pub fn trend(
        &self,
        exercise_name: &str,
        history: &[WorkoutLog],
        window_size: usize,
    ) -> StrengthTrend {
        let values: Vec<f64> = sorted_desc(history)
            .into_iter()
            .filter(|session| session.contains_exercise(exercise_name))
            .take(window_size)
            .filter_map(|session| self.best_in_session(session, exercise_name))
            .map(|estimate| estimate.value)
            .collect();

        let trend = self.trend_from_values(&values);
        debug!(
            exercise = exercise_name,
            samples = trend.sample_count,
            average_delta = trend.average_delta,
            direction = ?trend.direction,
            "Computed strength trend"
        );
        trend
    }

    /// Classify a most-recent-first series of best 1RMs
    #[must_use]
    pub fn trend_from_values(&self, values_desc: &[f64]) -> StrengthTrend {
        if values_desc.len() < 2 {
            return StrengthTrend::insufficient(values_desc.len());
        }
        let deltas: Vec<f64> = values_desc
            .windows(2)
            .map(|pair| pair[0] - pair[1])
            .collect();
        let average_delta = deltas.iter().sum::<f64>() / deltas.len() as f64;
        let band = self.config.trend_stable_band_kg;
        let direction = if average_delta > band {
            TrendDirection::Increasing
        } else if average_delta < -band {
            TrendDirection::Decreasing
        } else {
            TrendDirection::Stable
        };
        StrengthTrend {
            direction,
            average_delta,
            sample_count: values_desc.len(),
        }
    }

    /// Chronological per-session history of one exercise
    #[must_use]
    pub fn exercise_history(
        &self,
        exercise_name: &str,
        history: &[WorkoutLog],
    ) -> Vec<ExerciseHistoryPoint> {
        sorted_asc(history)
            .into_iter()
            .filter(|session| session.contains_exercise(exercise_name))
            .map(|session| {
                let instances: Vec<&WorkoutExercise> =
                    session.exercises_named(exercise_name).collect();
                let top_set = instances
                    .iter()
                    .copied()
                    .flat_map(WorkoutExercise::countable_sets)
                    .copied()
                    .max_by(|a, b| {
                        a.weight_kg
                            .total_cmp(&b.weight_kg)
                            .then_with(|| a.reps.cmp(&b.reps))
                    });
                ExerciseHistoryPoint {
                    date: session.date,
                    session_name: session.name.clone(),
                    best_one_rep_max: self
                        .best_in_session(session, exercise_name)
                        .map(|estimate| estimate.value),
                    volume: instances.iter().copied().map(total_volume).sum(),
                    top_set,
                }
            })
            .collect()
    }
}

/// Mean of a slice, zero when empty
#[must_use]
pub(crate) fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// Percentage change from `previous` to `current`, zero when `previous` is not positive
#[must_use]
pub(crate) fn percent_change(previous: f64, current: f64) -> f64 {
    if previous > 0.0 {
        (current - previous) / previous * 100.0
    } else {
        0.0
    }
}
