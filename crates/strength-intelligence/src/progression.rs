// ABOUTME: Period-over-period strength progression and qualitative status classification
// ABOUTME: Compares personal records inside and before a look-back window and classifies changes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Progression analysis
//!
//! `period_progress` splits history at `today - period_days` and compares the
//! best estimate inside the window against the best estimate strictly before
//! it. `classify_progression` turns a pair of estimates into a status with a
//! small band that absorbs rounding noise from the one-rep-max formula.

use crate::config::intelligence::{IntelligenceConfig, MetricsConfig, ProgressionConfig};
use crate::metrics::{percent_change, StrengthMetrics, StrengthTrend};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strength_core::constants::time::days_before;
use strength_core::models::{sorted_desc, WorkoutExercise, WorkoutLog};
use tracing::debug;

/// Qualitative progression status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressionStatus {
    /// Better than before by more than the noise band
    Improved,
    /// Within the noise band
    Same,
    /// Worse than before by more than the noise band
    Declined,
    /// Nothing to compare against
    FirstTime,
}

/// Period-over-period progress for one exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodProgress {
    /// Exercise analyzed
    pub exercise_name: String,
    /// Look-back window length in days
    pub period_days: u32,
    /// Best estimate inside the window
    pub current_one_rep_max: Option<f64>,
    /// Best estimate strictly before the window
    pub previous_one_rep_max: Option<f64>,
    /// Absolute change (kg), zero when either side is missing
    pub change: f64,
    /// Percentage change, zero when either side is missing
    pub percent_change: f64,
    /// Sessions inside the window containing the exercise
    pub session_count: usize,
    /// Trend across the sessions inside the window
    pub trend: StrengthTrend,
}

/// Comparison of one exercise instance against its previous occurrence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseComparison {
    /// Exercise compared
    pub exercise_name: String,
    /// Classified status
    pub status: ProgressionStatus,
    /// Best estimate of the instance being compared
    pub current_one_rep_max: f64,
    /// Best estimate of the previous occurrence
    pub previous_one_rep_max: Option<f64>,
    /// Current minus previous (kg)
    pub difference: Option<f64>,
    /// Date of the previous occurrence
    pub previous_date: Option<NaiveDate>,
}

/// Classify a current estimate against an optional previous one (0.5 kg band)
#[must_use]
pub fn classify_progression(current: f64, previous: Option<f64>) -> ProgressionStatus {
    ProgressionAnalyzer::default().classify(current, previous)
}

/// Progression analyzer
#[derive(Debug, Clone)]
pub struct ProgressionAnalyzer {
    metrics: StrengthMetrics,
    config: ProgressionConfig,
}

impl Default for ProgressionAnalyzer {
    fn default() -> Self {
        Self::with_config(MetricsConfig::default(), ProgressionConfig::default())
    }
}

impl ProgressionAnalyzer {
    /// Create an analyzer from the global configuration
    #[must_use]
    pub fn new() -> Self {
        let global = IntelligenceConfig::global();
        Self::with_config(global.metrics.clone(), global.progression.clone())
    }

    /// Create an analyzer with custom configuration
    #[must_use]
    pub const fn with_config(metrics: MetricsConfig, config: ProgressionConfig) -> Self {
        Self {
            metrics: StrengthMetrics::with_config(metrics),
            config,
        }
    }

    /// Classify a current estimate against an optional previous one
    #[must_use]
    pub fn classify(&self, current: f64, previous: Option<f64>) -> ProgressionStatus {
        let Some(previous) = previous else {
            return ProgressionStatus::FirstTime;
        };
        let difference = current - previous;
        if difference > self.config.same_band_kg {
            ProgressionStatus::Improved
        } else if difference < -self.config.same_band_kg {
            ProgressionStatus::Declined
        } else {
            ProgressionStatus::Same
        }
    }

    /// Progress over the default period ending `today`
    #[must_use]
    pub fn default_period_progress(
        &self,
        exercise_name: &str,
        history: &[WorkoutLog],
        today: NaiveDate,
    ) -> PeriodProgress {
        self.period_progress(
            exercise_name,
            history,
            self.config.default_period_days,
            today,
        )
    }

    /// Progress over the `period_days` ending `today`
    #[must_use]
    pub fn period_progress(
        &self,
        exercise_name: &str,
        history: &[WorkoutLog],
        period_days: u32,
        today: NaiveDate,
    ) -> PeriodProgress {
        let cutoff = days_before(today, u64::from(period_days));
        let in_window = |session: &WorkoutLog| session.date >= cutoff && session.date <= today;

        let current = self
            .metrics
            .personal_record_where(exercise_name, history, in_window)
            .map(|record| record.value);
        let previous = self
            .metrics
            .personal_record_where(exercise_name, history, |session| session.date < cutoff)
            .map(|record| record.value);

        let window_sessions: Vec<&WorkoutLog> = sorted_desc(history)
            .into_iter()
            .filter(|session| in_window(session) && session.contains_exercise(exercise_name))
            .collect();
        let window_values: Vec<f64> = window_sessions
            .iter()
            .take(self.metrics.config().trend_window)
            .filter_map(|session| self.metrics.best_in_session(session, exercise_name))
            .map(|estimate| estimate.value)
            .collect();

        let (change, percent) = match (current, previous) {
            (Some(current), Some(previous)) => {
                (current - previous, percent_change(previous, current))
            }
            _ => (0.0, 0.0),
        };

        debug!(
            exercise = exercise_name,
            period_days,
            current = ?current,
            previous = ?previous,
            "Computed period progress"
        );

        PeriodProgress {
            exercise_name: exercise_name.to_owned(),
            period_days,
            current_one_rep_max: current,
            previous_one_rep_max: previous,
            change,
            percent_change: percent,
            session_count: window_sessions.len(),
            trend: self.metrics.trend_from_values(&window_values),
        }
    }

    /// Compare an exercise instance performed on `session_date` with its most recent earlier occurrence
    ///
    /// Returns `None` when the instance has no qualifying set to compare.
    #[must_use]
    pub fn compare_to_previous(
        &self,
        exercise: &WorkoutExercise,
        session_date: NaiveDate,
        history: &[WorkoutLog],
    ) -> Option<ExerciseComparison> {
        let current = self.metrics.best_one_rep_max(exercise)?.value;
        let previous = sorted_desc(history)
            .into_iter()
            .filter(|session| session.date < session_date)
            .find_map(|session| {
                self.metrics
                    .best_in_session(session, &exercise.name)
                    .map(|estimate| (session.date, estimate.value))
            });

        let previous_value = previous.map(|(_, value)| value);
        Some(ExerciseComparison {
            exercise_name: exercise.name.clone(),
            status: self.classify(current, previous_value),
            current_one_rep_max: current,
            previous_one_rep_max: previous_value,
            difference: previous_value.map(|value| current - value),
            previous_date: previous.map(|(date, _)| date),
        })
    }
}
