// ABOUTME: Training analytics facade wiring configuration and an injected exercise catalog
// ABOUTME: Produces per-exercise overviews, whole-history reports, and starting-weight suggestions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Training analytics facade
//!
//! Every method is a pure function of its inputs. The `*_at` variants take the
//! reference date explicitly; the short forms use the local current date.

use crate::logging::AnalyticsLogger;
use chrono::{Local, NaiveDate};
use serde::Serialize;
use std::time::Instant;
use strength_core::errors::AppResult;
use strength_core::models::{BodyStats, UserProfile, WorkoutExercise, WorkoutLog};
use strength_intelligence::algorithms::RepMaxEntry;
use strength_intelligence::config::intelligence::IntelligenceConfig;
use strength_intelligence::{
    DeloadRecommendation, DeloadRecommender, ExerciseCatalog, ExerciseComparison,
    ExerciseHistoryPoint, MuscleGroupChange, MuscleVolumeAnalyzer, MuscleVolumeReport,
    PeriodProgress, PersonalRecord, PlateauDetection, PlateauDetector, ProgressionAnalyzer,
    StartingWeightSuggester, StartingWeightSuggestion, StrengthMetrics, StrengthTrend,
    WeeklySummary,
};
use tracing::debug;

/// Everything known about one exercise
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExerciseOverview {
    /// Exercise analyzed
    pub exercise_name: String,
    /// All-time best estimate
    pub personal_record: Option<PersonalRecord>,
    /// Trend over the configured window
    pub trend: StrengthTrend,
    /// Progress over the default period
    pub progress: PeriodProgress,
    /// Plateau analysis
    pub plateau: PlateauDetection,
    /// Chronological per-session history
    pub history: Vec<ExerciseHistoryPoint>,
    /// Estimated rep maxes derived from the personal record
    pub rep_max_table: Vec<RepMaxEntry>,
}

/// Whole-history analysis snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainingReport {
    /// Reference date the report was computed for
    pub generated_for: NaiveDate,
    /// Sessions in the analyzed history
    pub session_count: usize,
    /// Plateaued exercises, longest stagnation first
    pub plateaus: Vec<PlateauDetection>,
    /// Deload recommendation
    pub deload: DeloadRecommendation,
    /// Muscle-group volume for the trailing window
    pub muscle_volume: MuscleVolumeReport,
    /// Week-over-week change per muscle group
    pub muscle_volume_changes: Vec<MuscleGroupChange>,
    /// Weekly aggregates, oldest first
    pub weekly_summaries: Vec<WeeklySummary>,
}

impl TrainingReport {
    /// Serialize the report as pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails
    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Training analytics engine facade
#[derive(Debug, Clone)]
pub struct TrainingAnalytics {
    catalog: ExerciseCatalog,
    metrics: StrengthMetrics,
    progression: ProgressionAnalyzer,
    plateaus: PlateauDetector,
    deload: DeloadRecommender,
    muscle_volume: MuscleVolumeAnalyzer,
    starting_weight: StartingWeightSuggester,
    rep_max_table_reps: u32,
}

impl Default for TrainingAnalytics {
    fn default() -> Self {
        Self::with_config(&IntelligenceConfig::default(), ExerciseCatalog::bundled())
    }
}

impl TrainingAnalytics {
    /// Create the facade from the global configuration and the bundled catalog
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(IntelligenceConfig::global(), ExerciseCatalog::bundled())
    }

    /// Create the facade with explicit configuration and catalog
    #[must_use]
    pub fn with_config(config: &IntelligenceConfig, catalog: ExerciseCatalog) -> Self {
        Self {
            catalog,
            metrics: StrengthMetrics::with_config(config.metrics.clone()),
            progression: ProgressionAnalyzer::with_config(
                config.metrics.clone(),
                config.progression.clone(),
            ),
            plateaus: PlateauDetector::with_config(config.metrics.clone(), config.plateau.clone()),
            deload: DeloadRecommender::with_config(
                config.deload.clone(),
                config.metrics.clone(),
                config.plateau.clone(),
            ),
            muscle_volume: MuscleVolumeAnalyzer::with_config(config.muscle_volume.clone()),
            starting_weight: StartingWeightSuggester::with_config(
                config.metrics.clone(),
                config.starting_weight.clone(),
            ),
            rep_max_table_reps: config.metrics.brzycki_max_reps,
        }
    }

    /// Replace the exercise catalog
    #[must_use]
    pub fn with_catalog(mut self, catalog: ExerciseCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Catalog used for muscle-group classification
    #[must_use]
    pub const fn catalog(&self) -> &ExerciseCatalog {
        &self.catalog
    }

    /// Overview of one exercise as of today
    #[must_use]
    pub fn exercise_overview(&self, exercise_name: &str, history: &[WorkoutLog]) -> ExerciseOverview {
        self.exercise_overview_at(exercise_name, history, today())
    }

    /// Overview of one exercise as of `today`
    #[must_use]
    pub fn exercise_overview_at(
        &self,
        exercise_name: &str,
        history: &[WorkoutLog],
        today: NaiveDate,
    ) -> ExerciseOverview {
        let started = Instant::now();
        let personal_record = self.metrics.personal_record(exercise_name, history);
        let rep_max_table = personal_record
            .as_ref()
            .map(|record| {
                self.metrics
                    .algorithm()
                    .rep_max_table(record.value, self.rep_max_table_reps)
            })
            .unwrap_or_default();

        let overview = ExerciseOverview {
            exercise_name: exercise_name.to_owned(),
            trend: self
                .metrics
                .trend(exercise_name, history, self.metrics.config().trend_window),
            progress: self
                .progression
                .default_period_progress(exercise_name, history, today),
            plateau: self.plateaus.detect(exercise_name, history, today),
            history: self.metrics.exercise_history(exercise_name, history),
            personal_record,
            rep_max_table,
        };
        AnalyticsLogger::log_analysis("exercise_overview", history.len(), started.elapsed());
        overview
    }

    /// Whole-history report as of today
    #[must_use]
    pub fn report(&self, history: &[WorkoutLog]) -> TrainingReport {
        self.report_at(history, today())
    }

    /// Whole-history report as of `today`
    #[must_use]
    pub fn report_at(&self, history: &[WorkoutLog], today: NaiveDate) -> TrainingReport {
        let started = Instant::now();
        let plateaus = self.plateaus.detect_all(history, today);
        let deload = self
            .deload
            .recommend_with_plateaus(history, &plateaus, today);
        let report = TrainingReport {
            generated_for: today,
            session_count: history.len(),
            plateaus,
            muscle_volume: self.muscle_volume.analyze(history, &self.catalog, today),
            muscle_volume_changes: self
                .muscle_volume
                .compare_weeks(history, &self.catalog, today),
            weekly_summaries: deload.weekly_summaries.clone(),
            deload,
        };
        debug!(
            plateaus = report.plateaus.len(),
            urgency = ?report.deload.urgency,
            imbalances = report.muscle_volume.imbalances.len(),
            "Built training report"
        );
        AnalyticsLogger::log_analysis("report", history.len(), started.elapsed());
        report
    }

    /// Compare an exercise instance against its previous occurrence
    #[must_use]
    pub fn compare_to_previous(
        &self,
        exercise: &WorkoutExercise,
        session_date: NaiveDate,
        history: &[WorkoutLog],
    ) -> Option<ExerciseComparison> {
        self.progression
            .compare_to_previous(exercise, session_date, history)
    }

    /// Whether the latest week already looks like a deload, as of today
    #[must_use]
    pub fn is_currently_deloading(&self, history: &[WorkoutLog]) -> bool {
        self.deload.is_currently_deloading(history, today())
    }

    /// Suggest a starting load for an exercise
    #[must_use]
    pub fn suggest_starting_weight(
        &self,
        exercise_name: &str,
        history: &[WorkoutLog],
        body_stats: &[BodyStats],
        profile: Option<&UserProfile>,
    ) -> Option<StartingWeightSuggestion> {
        self.starting_weight
            .suggest(exercise_name, history, &self.catalog, body_stats, profile)
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
