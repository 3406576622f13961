// ABOUTME: Starting-weight suggester configuration for the three inference tiers
// ABOUTME: History, similar-exercise, and profile heuristic factors plus rounding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use strength_core::constants::units::{MINIMUM_SUGGESTED_WEIGHT_KG, PLATE_INCREMENT_KG};

/// Starting-weight suggester configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartingWeightConfig {
    /// Most recent sessions averaged for the exact-history tier
    pub history_sessions: usize,
    /// Fraction of the historical average suggested
    pub history_factor: f64,
    /// Same-type similar exercises averaged
    pub similar_top_n: usize,
    /// Fraction of the similar-exercise average suggested
    pub similar_factor: f64,
    /// Cross-type adjustment when the new exercise is compound
    pub compound_adjustment: f64,
    /// Cross-type adjustment when the new exercise is isolation
    pub isolation_adjustment: f64,
    /// Body-weight multiplier for beginners
    pub beginner_multiplier: f64,
    /// Body-weight multiplier for intermediate lifters
    pub intermediate_multiplier: f64,
    /// Body-weight multiplier for advanced lifters
    pub advanced_multiplier: f64,
    /// Activity level at or above which a lifter is intermediate
    pub intermediate_activity_level: f64,
    /// Activity level at or above which a lifter is advanced
    pub advanced_activity_level: f64,
    /// Type multiplier for compound movements
    pub compound_multiplier: f64,
    /// Type multiplier for isolation movements
    pub isolation_multiplier: f64,
    /// Floor applied to profile-based suggestions (kg)
    pub minimum_weight_kg: f64,
    /// Plate increment suggestions are rounded to (kg)
    pub rounding_increment_kg: f64,
}

impl Default for StartingWeightConfig {
    fn default() -> Self {
        Self {
            history_sessions: 3,
            history_factor: 0.95,
            similar_top_n: 2,
            similar_factor: 0.85,
            compound_adjustment: 1.0,
            isolation_adjustment: 0.6,
            beginner_multiplier: 0.3,
            intermediate_multiplier: 0.5,
            advanced_multiplier: 0.7,
            intermediate_activity_level: 1.5,
            advanced_activity_level: 1.7,
            compound_multiplier: 1.0,
            isolation_multiplier: 0.4,
            minimum_weight_kg: MINIMUM_SUGGESTED_WEIGHT_KG,
            rounding_increment_kg: PLATE_INCREMENT_KG,
        }
    }
}
