// ABOUTME: Main library entry point for the Pierre Strength training analytics engine
// ABOUTME: Re-exports the engine crates and provides logging setup plus the analytics facade
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Strength
//!
//! Training analytics over logged resistance-training history: one-rep-max
//! estimation, progression, plateau detection, deload recommendation,
//! muscle-group volume balance, and starting-weight suggestions.
//!
//! The engine is pure and synchronous. Callers pass whole history snapshots in
//! and get plain, serializable values back.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use pierre_strength::analytics::TrainingAnalytics;
//! use pierre_strength::models::{WorkoutExercise, WorkoutLog, WorkoutSet};
//! use chrono::NaiveDate;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! pierre_strength::logging::init_from_env()?;
//!
//! let date = NaiveDate::from_ymd_opt(2025, 3, 3).ok_or("invalid date")?;
//! let session = WorkoutLog::new("Push", date).exercise(WorkoutExercise::with_sets(
//!     "Bench Press",
//!     vec![WorkoutSet::new(80.0, 5)],
//! ));
//!
//! let analytics = TrainingAnalytics::new();
//! let report = analytics.report_at(&[session], date);
//! println!("{}", report.to_json()?);
//! # Ok(())
//! # }
//! ```

/// Training analytics facade
pub mod analytics;

/// Structured logging configuration
pub mod logging;

pub use strength_core::{constants, errors, models};
pub use strength_intelligence as intelligence;

pub use analytics::{ExerciseOverview, TrainingAnalytics, TrainingReport};
pub use errors::{AppError, AppResult, ErrorCode};
