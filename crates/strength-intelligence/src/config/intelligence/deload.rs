// ABOUTME: Deload recommender configuration for multi-signal fatigue detection
// ABOUTME: Thresholds for volume decline, performance decline, fatigue, plateaus, and overreaching
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Deload recommender configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeloadConfig {
    /// Number of Monday-start weeks summarized
    pub summary_weeks: usize,

    /// Week-over-week drop (%) that counts as a declining week
    pub weekly_drop_percent: f64,
    /// Declining weeks (out of the last three) needed to fire the signal
    pub declining_weeks_required: usize,
    /// Total three-week decline (%) above which severity is high
    pub volume_decline_high_percent: f64,
    /// Total three-week decline (%) above which severity is medium
    pub volume_decline_medium_percent: f64,

    /// Sessions per comparison window for average set weight
    pub performance_window: usize,
    /// Minimum sessions in the preceding window
    pub performance_min_previous: usize,
    /// Drop (%) in average set weight that fires the signal
    pub performance_drop_percent: f64,
    /// Drop (%) at which the performance signal becomes medium
    pub performance_medium_percent: f64,
    /// Drop (%) at which the performance signal becomes high
    pub performance_high_percent: f64,

    /// Weeks inspected for accumulated fatigue
    pub fatigue_weeks: usize,
    /// Excess (%) over the multi-week average each week must exceed
    pub fatigue_excess_percent: f64,
    /// Workouts each week must contain to count toward fatigue
    pub fatigue_min_workouts: u32,
    /// Excess (%) of the fatigue block average at which severity is high
    pub fatigue_high_excess_percent: f64,

    /// Concurrently plateaued exercises needed to fire the signal
    pub plateau_count: usize,
    /// Weeks stagnant that make a plateau count as long-standing
    pub plateau_long_weeks: u32,
    /// Long-standing plateaus needed for high severity
    pub plateau_long_count: usize,

    /// Spike ratio over the multi-week average that starts an overreach
    pub overreach_spike_ratio: f64,
    /// Ratio under the average that completes an overreach within the follow-up window
    pub overreach_drop_ratio: f64,
    /// Weeks after the spike in which the drop must occur
    pub overreach_followup_weeks: usize,
    /// Ratio under the average at which the overreach becomes high severity
    pub overreach_crash_ratio: f64,

    /// Drop (%) versus the prior week that means a deload is already underway
    pub deloading_drop_percent: f64,
    /// Workouts logged in the current week for the deloading check
    pub deloading_min_workouts: u32,
}

impl Default for DeloadConfig {
    fn default() -> Self {
        Self {
            summary_weeks: 6,
            weekly_drop_percent: 5.0,
            declining_weeks_required: 2,
            volume_decline_high_percent: 20.0,
            volume_decline_medium_percent: 10.0,
            performance_window: 6,
            performance_min_previous: 3,
            performance_drop_percent: 5.0,
            performance_medium_percent: 10.0,
            performance_high_percent: 15.0,
            fatigue_weeks: 4,
            fatigue_excess_percent: 10.0,
            fatigue_min_workouts: 3,
            fatigue_high_excess_percent: 25.0,
            plateau_count: 3,
            plateau_long_weeks: 3,
            plateau_long_count: 2,
            overreach_spike_ratio: 1.5,
            overreach_drop_ratio: 0.8,
            overreach_followup_weeks: 2,
            overreach_crash_ratio: 0.5,
            deloading_drop_percent: 30.0,
            deloading_min_workouts: 2,
        }
    }
}
