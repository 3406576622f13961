// ABOUTME: Plateau detector configuration for per-exercise stagnation analysis
// ABOUTME: Configures session threshold, noise tolerance, severity buckets, and suggestion cap
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Plateau detection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlateauConfig {
    /// Sessions without progress required to flag a plateau
    pub threshold: usize,
    /// Upward 1RM variance (kg) that still counts as stagnant
    pub variance_tolerance_kg: f64,
    /// Weeks stagnant at which a plateau becomes `moderate`
    pub moderate_weeks: u32,
    /// Weeks stagnant at which a plateau becomes `severe`
    pub severe_weeks: u32,
    /// Maximum number of remedies returned
    pub max_suggestions: usize,
}

impl Default for PlateauConfig {
    fn default() -> Self {
        Self {
            threshold: 3,
            variance_tolerance_kg: 1.0,
            moderate_weeks: 2,
            severe_weeks: 4,
            max_suggestions: 4,
        }
    }
}
