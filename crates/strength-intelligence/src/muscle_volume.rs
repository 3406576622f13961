// ABOUTME: Per-muscle-group training volume over a trailing window with antagonist balance checks
// ABOUTME: Classifies exercises through an injected catalog and reports week-over-week changes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Muscle-group volume analysis
//!
//! A window of `window_days` ending on `today` covers dates in
//! `(today - window_days, today]`. Exercises the catalog cannot classify are
//! left out of every aggregate and listed separately.

use crate::catalog::ExerciseCatalog;
use crate::config::intelligence::{IntelligenceConfig, MuscleVolumeConfig};
use crate::metrics::percent_change;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use strength_core::constants::time::{days_after, days_before};
use strength_core::models::{MuscleGroup, WorkoutLog};
use tracing::debug;

/// Antagonist pairs checked for imbalance
pub const ANTAGONIST_PAIRS: [(MuscleGroup, MuscleGroup); 3] = [
    (MuscleGroup::Chest, MuscleGroup::Back),
    (MuscleGroup::Arms, MuscleGroup::Back),
    (MuscleGroup::Abs, MuscleGroup::Back),
];

/// Aggregated work for one muscle group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MuscleGroupVolume {
    /// Muscle group
    pub muscle_group: MuscleGroup,
    /// Completed sets with at least one rep
    pub set_count: u32,
    /// Reps across those sets
    pub total_reps: u32,
    /// Load x reps across countable sets (kg)
    pub total_volume: f64,
    /// Distinct exercise names that contributed, sorted
    pub exercises: Vec<String>,
}

impl MuscleGroupVolume {
    fn empty(muscle_group: MuscleGroup) -> Self {
        Self {
            muscle_group,
            set_count: 0,
            total_reps: 0,
            total_volume: 0.0,
            exercises: Vec::new(),
        }
    }
}

/// Volume imbalance between an antagonist pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MuscleImbalance {
    /// Group with more volume
    pub dominant: MuscleGroup,
    /// Group with less volume
    pub under_trained: MuscleGroup,
    /// Dominant volume divided by under-trained volume
    pub ratio: f64,
    /// Suggested correction
    pub suggestion: String,
}

/// Muscle-group volume for one window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MuscleVolumeReport {
    /// First day included
    pub window_start: NaiveDate,
    /// Last day included
    pub window_end: NaiveDate,
    /// Groups with any recorded work, in display order
    pub groups: Vec<MuscleGroupVolume>,
    /// Antagonist imbalances found
    pub imbalances: Vec<MuscleImbalance>,
    /// Exercise names no catalog entry or keyword matched
    pub unclassified_exercises: Vec<String>,
}

impl MuscleVolumeReport {
    /// Aggregate for one group, if it was trained in the window
    #[must_use]
    pub fn group(&self, muscle_group: MuscleGroup) -> Option<&MuscleGroupVolume> {
        self.groups
            .iter()
            .find(|volume| volume.muscle_group == muscle_group)
    }

    /// Total volume for one group (zero when untrained)
    #[must_use]
    pub fn volume_of(&self, muscle_group: MuscleGroup) -> f64 {
        self.group(muscle_group)
            .map_or(0.0, |volume| volume.total_volume)
    }
}

/// Week-over-week change for one group
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MuscleGroupChange {
    /// Muscle group
    pub muscle_group: MuscleGroup,
    /// Volume in the current window (kg)
    pub current_volume: f64,
    /// Volume in the window before it (kg)
    pub previous_volume: f64,
    /// Percentage change (100 when the group was untrained before)
    pub percent_change: f64,
}

/// Muscle-group volume analyzer
#[derive(Debug, Clone, Default)]
pub struct MuscleVolumeAnalyzer {
    config: MuscleVolumeConfig,
}

impl MuscleVolumeAnalyzer {
    /// Create an analyzer from the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(IntelligenceConfig::global().muscle_volume.clone())
    }

    /// Create an analyzer with custom configuration
    #[must_use]
    pub const fn with_config(config: MuscleVolumeConfig) -> Self {
        Self { config }
    }

    /// Aggregate the configured window ending on `today`
    #[must_use]
    pub fn analyze(
        &self,
        history: &[WorkoutLog],
        catalog: &ExerciseCatalog,
        today: NaiveDate,
    ) -> MuscleVolumeReport {
        self.analyze_window(history, catalog, today, self.config.window_days)
    }

    /// Aggregate an explicit window of `window_days` ending on `window_end`
    #[must_use]
    pub fn analyze_window(
        &self,
        history: &[WorkoutLog],
        catalog: &ExerciseCatalog,
        window_end: NaiveDate,
        window_days: u32,
    ) -> MuscleVolumeReport {
        let window_start = match window_days {
            0 => days_after(window_end, 1),
            days => days_before(window_end, u64::from(days - 1)),
        };
        let mut by_group: BTreeMap<MuscleGroup, (MuscleGroupVolume, BTreeSet<String>)> =
            BTreeMap::new();
        let mut unclassified = BTreeSet::new();

        for session in history
            .iter()
            .filter(|session| session.date >= window_start && session.date <= window_end)
        {
            for exercise in &session.exercises {
                let Some(group) = catalog.classify(&exercise.name) else {
                    unclassified.insert(exercise.name.clone());
                    continue;
                };
                let (volume, names) = by_group
                    .entry(group)
                    .or_insert_with(|| (MuscleGroupVolume::empty(group), BTreeSet::new()));
                let mut contributed = false;
                for set in exercise
                    .sets
                    .iter()
                    .filter(|set| set.completed && set.reps > 0)
                {
                    volume.set_count += 1;
                    volume.total_reps += set.reps;
                    volume.total_volume += set.volume();
                    contributed = true;
                }
                if contributed {
                    names.insert(exercise.name.clone());
                }
            }
        }

        let groups: Vec<MuscleGroupVolume> = by_group
            .into_values()
            .filter(|(volume, _)| volume.set_count > 0)
            .map(|(mut volume, names)| {
                volume.exercises = names.into_iter().collect();
                volume
            })
            .collect();
        let imbalances = self.detect_imbalances(&groups);

        debug!(
            %window_start,
            %window_end,
            groups = groups.len(),
            imbalances = imbalances.len(),
            unclassified = unclassified.len(),
            "Computed muscle group volume"
        );

        MuscleVolumeReport {
            window_start,
            window_end,
            groups,
            imbalances,
            unclassified_exercises: unclassified.into_iter().collect(),
        }
    }

    /// Antagonist pairs where one side has more than `imbalance_ratio` times the other's volume
    ///
    /// Pairs with an untrained side are skipped.
    #[must_use]
    pub fn detect_imbalances(&self, groups: &[MuscleGroupVolume]) -> Vec<MuscleImbalance> {
        let volume_of = |group: MuscleGroup| {
            groups
                .iter()
                .find(|volume| volume.muscle_group == group)
                .map_or(0.0, |volume| volume.total_volume)
        };
        let limit = self.config.imbalance_ratio;

        ANTAGONIST_PAIRS
            .iter()
            .filter_map(|&(first, second)| {
                let (a, b) = (volume_of(first), volume_of(second));
                if a <= 0.0 || b <= 0.0 {
                    return None;
                }
                let (dominant, under_trained, ratio) = if a > b * limit {
                    (first, second, a / b)
                } else if b > a * limit {
                    (second, first, b / a)
                } else {
                    return None;
                };
                Some(MuscleImbalance {
                    dominant,
                    under_trained,
                    ratio,
                    suggestion: format!(
                        "{dominant} volume is {ratio:.1}x {under_trained} volume; add {under_trained} work to restore balance"
                    ),
                })
            })
            .collect()
    }

    /// Per-group change between the window ending `today` and the window before it
    ///
    /// Sorted by magnitude of change, largest first. Groups untrained in both windows are omitted.
    #[must_use]
    pub fn compare_weeks(
        &self,
        history: &[WorkoutLog],
        catalog: &ExerciseCatalog,
        today: NaiveDate,
    ) -> Vec<MuscleGroupChange> {
        let days = self.config.window_days;
        let current = self.analyze_window(history, catalog, today, days);
        let previous =
            self.analyze_window(history, catalog, days_before(today, u64::from(days)), days);

        let mut changes: Vec<MuscleGroupChange> = MuscleGroup::ALL
            .iter()
            .filter_map(|&group| {
                let current_volume = current.volume_of(group);
                let previous_volume = previous.volume_of(group);
                if current_volume <= 0.0 && previous_volume <= 0.0 {
                    return None;
                }
                let change = if previous_volume > 0.0 {
                    percent_change(previous_volume, current_volume)
                } else {
                    100.0
                };
                Some(MuscleGroupChange {
                    muscle_group: group,
                    current_volume,
                    previous_volume,
                    percent_change: change,
                })
            })
            .collect();
        changes.sort_by(|a, b| b.percent_change.abs().total_cmp(&a.percent_change.abs()));
        changes
    }
}

/// Muscle-group volume for the default window with default settings
#[must_use]
pub fn muscle_group_volume(
    history: &[WorkoutLog],
    catalog: &ExerciseCatalog,
    today: NaiveDate,
) -> MuscleVolumeReport {
    MuscleVolumeAnalyzer::default().analyze(history, catalog, today)
}
