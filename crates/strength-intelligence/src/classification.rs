// ABOUTME: Keyword-based exercise type and experience tier classifiers
// ABOUTME: Pure tagged-variant classification used to calibrate starting-weight suggestions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strength_core::errors::AppError;
use strength_core::models::normalize_exercise_name;
use tracing::debug;

/// Name fragments marking a multi-joint movement
pub const COMPOUND_KEYWORDS: &[&str] = &[
    "squat", "deadlift", "bench", "press", "row", "pull-up", "pullup", "pull up", "chin-up",
    "chinup", "dip", "lunge", "clean", "snatch", "thruster",
];

/// Name fragments marking a single-joint movement
pub const ISOLATION_KEYWORDS: &[&str] = &[
    "curl", "extension", "raise", "fly", "flye", "crunch", "shrug", "calf", "lateral",
];

/// Multi-joint versus single-joint movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseType {
    /// Multi-joint, multi-muscle movement
    Compound,
    /// Single-joint, targeted movement
    Isolation,
}

impl ExerciseType {
    /// Classify an exercise name by keyword
    ///
    /// Unknown names default to isolation, the lighter estimate.
    #[must_use]
    pub fn classify(exercise_name: &str) -> Self {
        Self::from_keywords(exercise_name).unwrap_or_else(|| {
            debug!(exercise = exercise_name, "No type keyword matched; assuming isolation");
            Self::Isolation
        })
    }

    /// Type named by an explicit keyword, if any
    ///
    /// Compound keywords are checked first ("lateral lunge" is a lunge).
    #[must_use]
    pub fn from_keywords(exercise_name: &str) -> Option<Self> {
        let name = normalize_exercise_name(exercise_name);
        let has_any = |keywords: &[&str]| keywords.iter().any(|keyword| name.contains(keyword));
        if has_any(COMPOUND_KEYWORDS) {
            Some(Self::Compound)
        } else if has_any(ISOLATION_KEYWORDS) {
            Some(Self::Isolation)
        } else {
            None
        }
    }

    /// Stable lowercase identifier
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Compound => "compound",
            Self::Isolation => "isolation",
        }
    }
}

impl fmt::Display for ExerciseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExerciseType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "compound" => Ok(Self::Compound),
            "isolation" => Ok(Self::Isolation),
            other => Err(AppError::invalid_input(format!(
                "Unknown exercise type: {other}. Valid options: compound, isolation"
            ))),
        }
    }
}

/// Coarse training-experience tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    /// Activity level below the intermediate threshold, or unknown
    Beginner,
    /// Activity level of at least the intermediate threshold
    Intermediate,
    /// Activity level of at least the advanced threshold
    Advanced,
}

impl ExperienceLevel {
    /// Activity level at or above which a lifter counts as intermediate
    pub const INTERMEDIATE_ACTIVITY_LEVEL: f64 = 1.5;
    /// Activity level at or above which a lifter counts as advanced
    pub const ADVANCED_ACTIVITY_LEVEL: f64 = 1.7;

    /// Tier for an activity-level figure with the default thresholds
    #[must_use]
    pub fn from_activity_level(activity_level: Option<f64>) -> Self {
        Self::from_activity_level_with(
            activity_level,
            Self::INTERMEDIATE_ACTIVITY_LEVEL,
            Self::ADVANCED_ACTIVITY_LEVEL,
        )
    }

    /// Tier for an activity-level figure with explicit thresholds
    #[must_use]
    pub fn from_activity_level_with(
        activity_level: Option<f64>,
        intermediate_threshold: f64,
        advanced_threshold: f64,
    ) -> Self {
        match activity_level {
            Some(level) if level >= advanced_threshold => Self::Advanced,
            Some(level) if level >= intermediate_threshold => Self::Intermediate,
            _ => Self::Beginner,
        }
    }

    /// Stable lowercase identifier
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExperienceLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" | "novice" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" | "expert" => Ok(Self::Advanced),
            other => Err(AppError::invalid_input(format!(
                "Unknown experience level: {other}. Valid options: beginner, intermediate, advanced"
            ))),
        }
    }
}

/// Classify an exercise name as compound or isolation
#[must_use]
pub fn classify_exercise_type(exercise_name: &str) -> ExerciseType {
    ExerciseType::classify(exercise_name)
}
