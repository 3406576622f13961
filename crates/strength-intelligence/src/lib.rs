// ABOUTME: Training analytics engine over logged resistance-training history
// ABOUTME: Strength metrics, progression, plateaus, deloads, muscle volume, and load suggestions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Strength Intelligence
//!
//! Pure, synchronous analytics over an immutable snapshot of workout history.
//! Nothing here performs I/O (apart from optionally loading a catalog file) or
//! keeps state between calls; missing data degrades to `None` or empty results.
//!
//! ## Modules
//!
//! - **algorithms**: One-rep-max formulas (`Brzycki`, `Epley`, `Lombardi`)
//! - **metrics**: 1RM estimates, volume, personal records, trends
//! - **progression**: Period-over-period progress and status classification
//! - **plateau**: Per-exercise plateau detection and remedies
//! - **weekly_summary**: Monday-start weekly aggregates
//! - **deload**: Multi-signal deload recommendation
//! - **catalog** / **classification**: Exercise reference data and keyword classifiers
//! - **muscle_volume**: Per-muscle-group volume and antagonist balance
//! - **starting_weight**: Three-tier starting-load suggestion
//! - **config**: Tunable thresholds with environment overrides

/// One-rep-max estimation algorithms
pub mod algorithms;

/// Intelligence configuration and validation
pub mod config;

/// Core strength metrics
pub mod metrics;

/// Progression analysis
pub mod progression;

/// Plateau detection
pub mod plateau;

/// Weekly training aggregates
pub mod weekly_summary;

/// Deload recommendation
pub mod deload;

/// Exercise reference catalog
pub mod catalog;

/// Compound/isolation and experience-tier classifiers
pub mod classification;

/// Muscle-group volume analysis
pub mod muscle_volume;

/// Starting-weight suggestion
pub mod starting_weight;

pub use algorithms::{OneRepMaxAlgorithm, RepMaxEntry};
pub use catalog::{CatalogEntry, ExerciseCatalog};
pub use classification::{classify_exercise_type, ExerciseType, ExperienceLevel};
pub use config::IntelligenceConfig;
pub use deload::{
    is_currently_deloading, recommend_deload, DeloadProtocol, DeloadRecommendation,
    DeloadRecommender, DeloadUrgency, FatigueSignal, FatigueSignalKind, SignalSeverity,
};
pub use metrics::{
    best_one_rep_max, estimate_one_rep_max, personal_record, total_volume, trend,
    ExerciseHistoryPoint, OneRepMaxEstimate, PersonalRecord, StrengthMetrics, StrengthTrend,
    TrendDirection,
};
pub use muscle_volume::{
    muscle_group_volume, MuscleGroupChange, MuscleGroupVolume, MuscleImbalance,
    MuscleVolumeAnalyzer, MuscleVolumeReport,
};
pub use plateau::{
    detect_all_plateaus, detect_plateau, PlateauDetection, PlateauDetector, PlateauSeverity,
};
pub use progression::{
    classify_progression, ExerciseComparison, PeriodProgress, ProgressionAnalyzer,
    ProgressionStatus,
};
pub use starting_weight::{
    suggest_starting_weight, StartingWeightSuggester, StartingWeightSuggestion,
    SuggestionConfidence, SuggestionSource,
};
pub use weekly_summary::{week_start, weekly_summaries, WeeklySummary};
