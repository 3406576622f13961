// ABOUTME: Muscle-group volume analyzer configuration
// ABOUTME: Configures the trailing window and antagonist imbalance ratio
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Muscle-group volume configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MuscleVolumeConfig {
    /// Trailing window in days
    pub window_days: u32,
    /// Volume ratio between antagonists above which an imbalance is reported
    pub imbalance_ratio: f64,
}

impl Default for MuscleVolumeConfig {
    fn default() -> Self {
        Self {
            window_days: 7,
            imbalance_ratio: 2.0,
        }
    }
}
