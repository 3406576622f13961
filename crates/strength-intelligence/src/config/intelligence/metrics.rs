// ABOUTME: Core strength metrics configuration for one-rep-max estimation and trend detection
// ABOUTME: Configures the Brzycki rep clamp, trend window, and stable band
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Core metrics configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsConfig {
    /// Reps above this are clamped before entering the Brzycki formula
    pub brzycki_max_reps: u32,
    /// Number of sessions considered when computing a strength trend
    pub trend_window: usize,
    /// Average per-session 1RM delta (kg) inside which a trend is `stable`
    pub trend_stable_band_kg: f64,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            brzycki_max_reps: 12,
            trend_window: 5,
            trend_stable_band_kg: 1.0,
        }
    }
}

/// Progression analyzer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressionConfig {
    /// Default look-back period for period-over-period comparisons
    pub default_period_days: u32,
    /// Band (kg) inside which two 1RMs are considered the same
    pub same_band_kg: f64,
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        Self {
            default_period_days: 30,
            same_band_kg: 0.5,
        }
    }
}
