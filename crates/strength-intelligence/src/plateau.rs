// ABOUTME: Per-exercise plateau detection with severity bucketing and rule-based remedies
// ABOUTME: Compares recent best 1RMs against a baseline session and sweeps the whole history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Plateau detection
//!
//! For one exercise, the most recent `threshold + 2` sessions containing it are
//! collected and reduced to their best estimated 1RM (sessions without a
//! qualifying set are skipped). The oldest value is the baseline; each of the
//! `threshold - 1` most recent values that fails to beat it by more than the
//! tolerance counts as stagnant. Reaching `threshold - 1` stagnant comparisons
//! flags the exercise.

use crate::config::intelligence::{IntelligenceConfig, MetricsConfig, PlateauConfig};
use crate::metrics::StrengthMetrics;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use strength_core::constants::time::DAYS_PER_WEEK_F64;
use strength_core::models::{normalize_exercise_name, sorted_desc, WorkoutLog};
use tracing::debug;

/// Plateau severity bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlateauSeverity {
    /// Under two weeks
    Mild,
    /// Two weeks or more
    Moderate,
    /// Four weeks or more
    Severe,
}

/// Plateau analysis for one exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlateauDetection {
    /// Exercise analyzed
    pub exercise_name: String,
    /// Whether the exercise is plateaued
    pub is_plateaued: bool,
    /// Best 1RM per analyzed session, most recent first
    pub recent_one_rep_maxes: Vec<f64>,
    /// Oldest value in the window, the reference recent sessions are compared against
    pub baseline_one_rep_max: Option<f64>,
    /// Comparisons that showed no meaningful gain
    pub stagnant_sessions: usize,
    /// Weeks since the first stagnant session, rounded up (zero when not plateaued)
    pub weeks_stagnant: u32,
    /// Severity bucket when plateaued
    pub severity: Option<PlateauSeverity>,
    /// Remedies, most specific first
    pub suggestions: Vec<String>,
}

impl PlateauDetection {
    fn not_plateaued(exercise_name: &str, values: Vec<f64>, baseline: Option<f64>) -> Self {
        Self {
            exercise_name: exercise_name.to_owned(),
            is_plateaued: false,
            recent_one_rep_maxes: values,
            baseline_one_rep_max: baseline,
            stagnant_sessions: 0,
            weeks_stagnant: 0,
            severity: None,
            suggestions: Vec::new(),
        }
    }
}

/// Movement-specific cues keyed by name fragments
const MOVEMENT_CUES: &[(&[&str], &str)] = &[
    (
        &["bench", "press"],
        "Add paused reps (2-second pause) to build strength out of the bottom position",
    ),
    (
        &["squat"],
        "Check squat depth on video and add pause squats to own the hole",
    ),
    (
        &["deadlift"],
        "Try deficit deadlifts to build speed off the floor",
    ),
    (
        &["pull"],
        "Add slow weighted negatives to overload the lowering phase",
    ),
];

const SLEEP_REMINDER: &str =
    "Prioritize 7-9 hours of sleep and enough protein to support recovery";
const OVERLOAD_REMINDER: &str =
    "Keep applying progressive overload: add 1-2.5 kg or one rep when all sets are completed";

/// Plateau detector
#[derive(Debug, Clone)]
pub struct PlateauDetector {
    metrics: StrengthMetrics,
    config: PlateauConfig,
}

impl Default for PlateauDetector {
    fn default() -> Self {
        Self::with_config(MetricsConfig::default(), PlateauConfig::default())
    }
}

impl PlateauDetector {
    /// Create a detector from the global configuration
    #[must_use]
    pub fn new() -> Self {
        let global = IntelligenceConfig::global();
        Self::with_config(global.metrics.clone(), global.plateau.clone())
    }

    /// Create a detector with custom configuration
    #[must_use]
    pub const fn with_config(metrics: MetricsConfig, config: PlateauConfig) -> Self {
        Self {
            metrics: StrengthMetrics::with_config(metrics),
            config,
        }
    }

    /// Configured session threshold
    #[must_use]
    pub const fn threshold(&self) -> usize {
        self.config.threshold
    }

    /// Detect a plateau with the configured threshold
    #[must_use]
    pub fn detect(
        &self,
        exercise_name: &str,
        history: &[WorkoutLog],
        today: NaiveDate,
    ) -> PlateauDetection {
        self.detect_with_threshold(exercise_name, history, self.config.threshold, today)
    }

    /// Detect a plateau with an explicit session threshold
    #[must_use]
    pub fn detect_with_threshold(
        &self,
        exercise_name: &str,
        history: &[WorkoutLog],
        threshold: usize,
        today: NaiveDate,
    ) -> PlateauDetection {
        let threshold = threshold.max(2);
        let points: Vec<(NaiveDate, f64)> = sorted_desc(history)
            .into_iter()
            .filter(|session| session.contains_exercise(exercise_name))
            .take(threshold + 2)
            .filter_map(|session| {
                self.metrics
                    .best_in_session(session, exercise_name)
                    .map(|estimate| (session.date, estimate.value))
            })
            .collect();
        let values: Vec<f64> = points.iter().map(|(_, value)| *value).collect();

        let Some(&(_, baseline)) = points.last() else {
            return PlateauDetection::not_plateaued(exercise_name, values, None);
        };
        if points.len() < threshold {
            return PlateauDetection::not_plateaued(exercise_name, values, Some(baseline));
        }

        let required = threshold - 1;
        let ceiling = baseline + self.config.variance_tolerance_kg;
        let stagnant_sessions = values
            .iter()
            .take(required)
            .filter(|value| **value <= ceiling)
            .count();

        if stagnant_sessions < required {
            let mut detection = PlateauDetection::not_plateaued(exercise_name, values, Some(baseline));
            detection.stagnant_sessions = stagnant_sessions;
            return detection;
        }

        // Oldest of the compared sessions marks the start of the stagnation
        let first_stagnant_date = points[required - 1].0;
        let weeks_stagnant = weeks_since(first_stagnant_date, today);
        let severity = self.severity_for(weeks_stagnant);
        let suggestions = self.suggestions_for(exercise_name, weeks_stagnant);

        debug!(
            exercise = exercise_name,
            baseline,
            weeks_stagnant,
            severity = ?severity,
            "Plateau detected"
        );

        PlateauDetection {
            exercise_name: exercise_name.to_owned(),
            is_plateaued: true,
            recent_one_rep_maxes: values,
            baseline_one_rep_max: Some(baseline),
            stagnant_sessions,
            weeks_stagnant,
            severity: Some(severity),
            suggestions,
        }
    }

    /// Detect plateaus for every distinct exercise in history
    ///
    /// Only plateaued exercises are returned, longest stagnation first.
    #[must_use]
    pub fn detect_all(&self, history: &[WorkoutLog], today: NaiveDate) -> Vec<PlateauDetection> {
        let mut seen = HashSet::new();
        let mut names = Vec::new();
        for session in sorted_desc(history) {
            for exercise in &session.exercises {
                if seen.insert(normalize_exercise_name(&exercise.name)) {
                    names.push(exercise.name.as_str());
                }
            }
        }

        let mut plateaus: Vec<PlateauDetection> = names
            .into_iter()
            .map(|name| self.detect(name, history, today))
            .filter(|detection| detection.is_plateaued)
            .collect();
        plateaus.sort_by(|a, b| {
            b.weeks_stagnant
                .cmp(&a.weeks_stagnant)
                .then_with(|| a.exercise_name.cmp(&b.exercise_name))
        });
        plateaus
    }

    /// Severity bucket for a stagnation length
    #[must_use]
    pub const fn severity_for(&self, weeks_stagnant: u32) -> PlateauSeverity {
        if weeks_stagnant >= self.config.severe_weeks {
            PlateauSeverity::Severe
        } else if weeks_stagnant >= self.config.moderate_weeks {
            PlateauSeverity::Moderate
        } else {
            PlateauSeverity::Mild
        }
    }

    /// Rule-based remedies for a plateaued exercise, most specific first
    #[must_use]
    pub fn suggestions_for(&self, exercise_name: &str, weeks_stagnant: u32) -> Vec<String> {
        let name = normalize_exercise_name(exercise_name);
        let mut suggestions: Vec<String> = MOVEMENT_CUES
            .iter()
            .filter(|(keywords, _)| keywords.iter().any(|keyword| name.contains(keyword)))
            .map(|(_, cue)| (*cue).to_owned())
            .collect();

        let stagnation_remedy = if weeks_stagnant >= self.config.severe_weeks {
            "Take a deload week at 50-60% of your working weight, then build back up".to_owned()
        } else if weeks_stagnant >= self.config.moderate_weeks {
            format!("Swap {exercise_name} for a close variation for 3-4 weeks")
        } else {
            "Change the rep scheme for a few sessions (e.g. 5x5 to 4x8)".to_owned()
        };
        suggestions.push(stagnation_remedy);
        suggestions.push(SLEEP_REMINDER.to_owned());
        suggestions.push(OVERLOAD_REMINDER.to_owned());
        suggestions.truncate(self.config.max_suggestions);
        suggestions
    }
}

/// Detect a plateau with default settings
#[must_use]
pub fn detect_plateau(
    exercise_name: &str,
    history: &[WorkoutLog],
    threshold: usize,
    today: NaiveDate,
) -> PlateauDetection {
    PlateauDetector::default().detect_with_threshold(exercise_name, history, threshold, today)
}

/// Detect plateaus across every exercise with default settings
#[must_use]
pub fn detect_all_plateaus(history: &[WorkoutLog], today: NaiveDate) -> Vec<PlateauDetection> {
    PlateauDetector::default().detect_all(history, today)
}

/// Whole weeks (rounded up, at least one) from `start` to `today`
fn weeks_since(start: NaiveDate, today: NaiveDate) -> u32 {
    let days = (today - start).num_days().max(0);
    let weeks = (days as f64 / DAYS_PER_WEEK_F64).ceil() as u32;
    weeks.max(1)
}
