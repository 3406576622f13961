// ABOUTME: Muscle group enumeration used to classify exercises for volume analysis
// ABOUTME: Defines the eight tracked groups with parsing and display implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Muscle groups tracked by the volume analyzer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MuscleGroup {
    /// Pectorals
    Chest,
    /// Lats, traps, rhomboids, spinal erectors
    Back,
    /// Deltoids
    Shoulders,
    /// Quadriceps and hamstrings
    Legs,
    /// Biceps, triceps, forearms
    Arms,
    /// Abdominals and obliques
    Abs,
    /// Gluteal muscles
    Glutes,
    /// Gastrocnemius and soleus
    Calves,
}

impl MuscleGroup {
    /// Every tracked group, in display order
    pub const ALL: [Self; 8] = [
        Self::Chest,
        Self::Back,
        Self::Shoulders,
        Self::Legs,
        Self::Arms,
        Self::Abs,
        Self::Glutes,
        Self::Calves,
    ];

    /// Stable lowercase identifier
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Chest => "chest",
            Self::Back => "back",
            Self::Shoulders => "shoulders",
            Self::Legs => "legs",
            Self::Arms => "arms",
            Self::Abs => "abs",
            Self::Glutes => "glutes",
            Self::Calves => "calves",
        }
    }
}

impl fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MuscleGroup {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "chest" | "pecs" => Ok(Self::Chest),
            "back" | "lats" => Ok(Self::Back),
            "shoulders" | "shoulder" | "delts" => Ok(Self::Shoulders),
            "legs" | "leg" | "quads" | "hamstrings" => Ok(Self::Legs),
            "arms" | "arm" | "biceps" | "triceps" => Ok(Self::Arms),
            "abs" | "core" | "abdominals" => Ok(Self::Abs),
            "glutes" | "glute" => Ok(Self::Glutes),
            "calves" | "calf" => Ok(Self::Calves),
            other => Err(AppError::invalid_input(format!(
                "unknown muscle group: {other}"
            ))),
        }
    }
}
