// ABOUTME: Deload recommendation from multiple fatigue signals across weekly training summaries
// ABOUTME: Aggregates volume, performance, fatigue, plateau, and overreaching signals into an urgency
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Deload recommendation
//!
//! Five independent signals are evaluated over the last few Monday-start weeks
//! and the most recent sessions. Each fired signal carries a severity; the
//! urgency is derived from how many high and medium signals fired, and the
//! protocol is a fixed lookup per urgency level.

use crate::config::intelligence::{DeloadConfig, IntelligenceConfig, MetricsConfig, PlateauConfig};
use crate::metrics::mean;
use crate::plateau::{PlateauDetection, PlateauDetector};
use crate::weekly_summary::{weekly_summaries, WeeklySummary};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strength_core::models::{sorted_desc, WorkoutLog};
use tracing::{debug, info};

/// Severity of a single fatigue signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalSeverity {
    /// Worth watching
    Low,
    /// Contributes to a deload recommendation
    Medium,
    /// Strong evidence of accumulated fatigue
    High,
}

/// Kind of fatigue signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FatigueSignalKind {
    /// Weekly volume dropping week over week
    VolumeDecline,
    /// Average working weight dropping across recent sessions
    PerformanceDecline,
    /// Sustained above-average weekly volume
    AccumulatedFatigue,
    /// Several exercises plateaued at once
    MultiplePlateaus,
    /// A volume spike followed by a crash
    Overreaching,
}

/// A fired fatigue signal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FatigueSignal {
    /// Signal kind
    pub kind: FatigueSignalKind,
    /// Signal severity
    pub severity: SignalSeverity,
    /// Magnitude behind the signal (percent, ratio, or count depending on kind)
    pub value: f64,
    /// Human-readable explanation
    pub description: String,
}

/// Overall deload urgency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeloadUrgency {
    /// No signal fired
    None,
    /// Signals fired but not enough to deload
    Low,
    /// Deload recommended
    Medium,
    /// Deload strongly recommended
    High,
    /// Deload immediately
    Critical,
}

/// Fixed deload prescription for an urgency level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeloadProtocol {
    /// Reduction in total sets (%)
    pub volume_reduction_percent: u32,
    /// Reduction in working weights (%)
    pub intensity_reduction_percent: u32,
    /// Length of the deload (weeks)
    pub duration_weeks: u32,
    /// Textual guidance
    pub guidance: Vec<String>,
}

impl DeloadProtocol {
    /// Protocol table lookup
    #[must_use]
    pub fn for_urgency(urgency: DeloadUrgency) -> Self {
        let (volume, intensity, weeks, guidance): (u32, u32, u32, &[&str]) = match urgency {
            DeloadUrgency::None => (
                0,
                0,
                0,
                &["No deload needed; keep progressing as planned"],
            ),
            DeloadUrgency::Low => (
                0,
                0,
                0,
                &[
                    "Monitor sleep, soreness, and bar speed over the next week",
                    "Take one lighter session if fatigue persists",
                ],
            ),
            DeloadUrgency::Medium => (
                30,
                10,
                1,
                &[
                    "Keep the same exercises but drop 1-2 sets per exercise",
                    "Reduce working weights by about 10%",
                    "Stop every set 3-4 reps short of failure",
                ],
            ),
            DeloadUrgency::High => (
                40,
                15,
                1,
                &[
                    "Cut total sets by roughly 40%",
                    "Reduce working weights by about 15%",
                    "Replace one heavy day with mobility or light technique work",
                ],
            ),
            DeloadUrgency::Critical => (
                50,
                20,
                2,
                &[
                    "Halve training volume for two weeks",
                    "Keep loads at or below 80% of recent working weights",
                    "Prioritize sleep, nutrition, and recovery before resuming progression",
                ],
            ),
        };
        Self {
            volume_reduction_percent: volume,
            intensity_reduction_percent: intensity,
            duration_weeks: weeks,
            guidance: guidance.iter().map(|line| (*line).to_owned()).collect(),
        }
    }
}

/// Deload recommendation for a history snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeloadRecommendation {
    /// Whether the urgency calls for a deload; check `currently_deloading` before scheduling one
    pub should_deload: bool,
    /// Aggregated urgency
    pub urgency: DeloadUrgency,
    /// Signals that fired
    pub signals: Vec<FatigueSignal>,
    /// Prescription for the urgency level
    pub protocol: DeloadProtocol,
    /// Whether the most recent week already looks like a deload
    pub currently_deloading: bool,
    /// Weekly aggregates the analysis ran on, oldest first
    pub weekly_summaries: Vec<WeeklySummary>,
    /// Exercises currently plateaued
    pub plateaued_exercises: Vec<String>,
}

/// Deload recommender
#[derive(Debug, Clone)]
pub struct DeloadRecommender {
    config: DeloadConfig,
    plateaus: PlateauDetector,
}

impl Default for DeloadRecommender {
    fn default() -> Self {
        Self::with_config(
            DeloadConfig::default(),
            MetricsConfig::default(),
            PlateauConfig::default(),
        )
    }
}

impl DeloadRecommender {
    /// Create a recommender from the global configuration
    #[must_use]
    pub fn new() -> Self {
        let global = IntelligenceConfig::global();
        Self::with_config(
            global.deload.clone(),
            global.metrics.clone(),
            global.plateau.clone(),
        )
    }

    /// Create a recommender with custom configuration
    #[must_use]
    pub const fn with_config(
        config: DeloadConfig,
        metrics: MetricsConfig,
        plateau: PlateauConfig,
    ) -> Self {
        Self {
            config,
            plateaus: PlateauDetector::with_config(metrics, plateau),
        }
    }

    /// Evaluate every signal and build a recommendation
    #[must_use]
    pub fn recommend(&self, history: &[WorkoutLog], today: NaiveDate) -> DeloadRecommendation {
        let plateaus = self.plateaus.detect_all(history, today);
        self.recommend_with_plateaus(history, &plateaus, today)
    }

    /// Build a recommendation from plateau detections the caller already computed
    #[must_use]
    pub fn recommend_with_plateaus(
        &self,
        history: &[WorkoutLog],
        plateaus: &[PlateauDetection],
        today: NaiveDate,
    ) -> DeloadRecommendation {
        let weeks = weekly_summaries(history, self.config.summary_weeks, today);

        let signals: Vec<FatigueSignal> = [
            self.volume_decline(&weeks),
            self.performance_decline(history),
            self.accumulated_fatigue(&weeks),
            self.multiple_plateaus(plateaus),
            self.overreaching(&weeks),
        ]
        .into_iter()
        .flatten()
        .collect();

        let urgency = aggregate_urgency(&signals);
        let currently_deloading = self.currently_deloading(&weeks);
        let should_deload = urgency >= DeloadUrgency::Medium;

        for signal in &signals {
            debug!(kind = ?signal.kind, severity = ?signal.severity, value = signal.value, "Fatigue signal fired");
        }
        info!(
            urgency = ?urgency,
            signals = signals.len(),
            currently_deloading,
            should_deload,
            "Deload recommendation computed"
        );

        DeloadRecommendation {
            should_deload,
            urgency,
            signals,
            protocol: DeloadProtocol::for_urgency(urgency),
            currently_deloading,
            weekly_summaries: weeks,
            plateaued_exercises: plateaus
                .iter()
                .filter(|plateau| plateau.is_plateaued)
                .map(|plateau| plateau.exercise_name.clone())
                .collect(),
        }
    }

    /// Whether the most recent week is already a deload relative to the week before
    #[must_use]
    pub fn is_currently_deloading(&self, history: &[WorkoutLog], today: NaiveDate) -> bool {
        self.currently_deloading(&weekly_summaries(history, 2, today))
    }

    /// Week-over-week volume decline across the last three weeks
    #[must_use]
    pub fn volume_decline(&self, weeks: &[WeeklySummary]) -> Option<FatigueSignal> {
        let n = weeks.len();
        if n < 4 {
            return None;
        }
        let declining_weeks = (n - 3..n)
            .filter(|&i| drop_percent(weeks[i - 1].total_volume, weeks[i].total_volume)
                >= self.config.weekly_drop_percent)
            .count();
        if declining_weeks < self.config.declining_weeks_required {
            return None;
        }

        let total_decline = drop_percent(weeks[n - 4].total_volume, weeks[n - 1].total_volume);
        let severity = if total_decline > self.config.volume_decline_high_percent {
            SignalSeverity::High
        } else if total_decline > self.config.volume_decline_medium_percent {
            SignalSeverity::Medium
        } else {
            SignalSeverity::Low
        };
        Some(FatigueSignal {
            kind: FatigueSignalKind::VolumeDecline,
            severity,
            value: total_decline,
            description: format!(
                "Weekly volume dropped in {declining_weeks} of the last 3 weeks ({total_decline:.0}% overall)"
            ),
        })
    }

    /// Average working weight of the most recent sessions versus the sessions before them
    #[must_use]
    pub fn performance_decline(&self, history: &[WorkoutLog]) -> Option<FatigueSignal> {
        let window = self.config.performance_window;
        let sessions: Vec<&WorkoutLog> = sorted_desc(history)
            .into_iter()
            .filter(|session| {
                session
                    .exercises
                    .iter()
                    .any(|exercise| exercise.has_countable_sets())
            })
            .collect();
        let recent: Vec<&WorkoutLog> = sessions.iter().take(window).copied().collect();
        let previous: Vec<&WorkoutLog> = sessions.iter().skip(window).take(window).copied().collect();
        if recent.is_empty() || previous.len() < self.config.performance_min_previous {
            return None;
        }

        let previous_average = average_set_weight(&previous);
        let recent_average = average_set_weight(&recent);
        let decline = drop_percent(previous_average, recent_average);
        if decline < self.config.performance_drop_percent {
            return None;
        }

        let severity = if decline >= self.config.performance_high_percent {
            SignalSeverity::High
        } else if decline >= self.config.performance_medium_percent {
            SignalSeverity::Medium
        } else {
            SignalSeverity::Low
        };
        Some(FatigueSignal {
            kind: FatigueSignalKind::PerformanceDecline,
            severity,
            value: decline,
            description: format!(
                "Average working weight is {decline:.0}% lower than in the previous {} sessions",
                previous.len()
            ),
        })
    }

    /// Every week of the recent block well above the multi-week average with frequent training
    #[must_use]
    pub fn accumulated_fatigue(&self, weeks: &[WeeklySummary]) -> Option<FatigueSignal> {
        let block_len = self.config.fatigue_weeks;
        if block_len == 0 || weeks.len() < block_len {
            return None;
        }
        let volumes: Vec<f64> = weeks.iter().map(|week| week.total_volume).collect();
        let baseline = mean(&volumes);
        if baseline <= 0.0 {
            return None;
        }

        let block = &weeks[weeks.len() - block_len..];
        let limit = baseline * (1.0 + self.config.fatigue_excess_percent / 100.0);
        let heavy_weeks = block
            .iter()
            .filter(|week| {
                week.total_volume > limit && week.workout_count >= self.config.fatigue_min_workouts
            })
            .count();
        if heavy_weeks < block_len {
            return None;
        }

        let block_volumes: Vec<f64> = block.iter().map(|week| week.total_volume).collect();
        let excess = (mean(&block_volumes) / baseline - 1.0) * 100.0;
        let severity = if excess >= self.config.fatigue_high_excess_percent {
            SignalSeverity::High
        } else {
            SignalSeverity::Medium
        };
        Some(FatigueSignal {
            kind: FatigueSignalKind::AccumulatedFatigue,
            severity,
            value: excess,
            description: format!(
                "{block_len} consecutive high-volume weeks averaging {excess:.0}% above your norm"
            ),
        })
    }

    /// Several exercises plateaued at the same time
    #[must_use]
    pub fn multiple_plateaus(&self, plateaus: &[PlateauDetection]) -> Option<FatigueSignal> {
        let plateaued: Vec<&PlateauDetection> =
            plateaus.iter().filter(|plateau| plateau.is_plateaued).collect();
        if plateaued.len() < self.config.plateau_count {
            return None;
        }
        let long_standing = plateaued
            .iter()
            .filter(|plateau| plateau.weeks_stagnant >= self.config.plateau_long_weeks)
            .count();
        let severity = if long_standing >= self.config.plateau_long_count {
            SignalSeverity::High
        } else {
            SignalSeverity::Medium
        };
        Some(FatigueSignal {
            kind: FatigueSignalKind::MultiplePlateaus,
            severity,
            value: plateaued.len() as f64,
            description: format!(
                "{} exercises are plateaued ({long_standing} for {}+ weeks)",
                plateaued.len(),
                self.config.plateau_long_weeks
            ),
        })
    }

    /// A spike above the multi-week average followed shortly by a week well below it
    #[must_use]
    pub fn overreaching(&self, weeks: &[WeeklySummary]) -> Option<FatigueSignal> {
        let volumes: Vec<f64> = weeks.iter().map(|week| week.total_volume).collect();
        let average = mean(&volumes);
        if average <= 0.0 {
            return None;
        }

        let spike = average * self.config.overreach_spike_ratio;
        let drop = average * self.config.overreach_drop_ratio;
        let mut lowest_ratio: Option<f64> = None;
        for (i, &volume) in volumes.iter().enumerate() {
            if volume <= spike {
                continue;
            }
            let followup_end = (i + self.config.overreach_followup_weeks).min(volumes.len() - 1);
            for &after in &volumes[i + 1..=followup_end.max(i)] {
                if after < drop {
                    let ratio = after / average;
                    lowest_ratio = Some(lowest_ratio.map_or(ratio, |current| current.min(ratio)));
                }
            }
        }

        let ratio = lowest_ratio?;
        let severity = if ratio < self.config.overreach_crash_ratio {
            SignalSeverity::High
        } else {
            SignalSeverity::Medium
        };
        Some(FatigueSignal {
            kind: FatigueSignalKind::Overreaching,
            severity,
            value: ratio,
            description: format!(
                "A volume spike was followed by a week at {:.0}% of your average",
                ratio * 100.0
            ),
        })
    }

    fn currently_deloading(&self, weeks: &[WeeklySummary]) -> bool {
        let [.., previous, latest] = weeks else {
            return false;
        };
        previous.total_volume > 0.0
            && latest.workout_count >= self.config.deloading_min_workouts
            && drop_percent(previous.total_volume, latest.total_volume)
                >= self.config.deloading_drop_percent
    }
}

/// Combine fired signals into an urgency level
#[must_use]
pub fn aggregate_urgency(signals: &[FatigueSignal]) -> DeloadUrgency {
    let high = signals
        .iter()
        .filter(|signal| signal.severity == SignalSeverity::High)
        .count();
    let medium = signals
        .iter()
        .filter(|signal| signal.severity == SignalSeverity::Medium)
        .count();

    if high >= 2 {
        DeloadUrgency::Critical
    } else if (high == 1 && medium >= 1) || medium >= 3 {
        DeloadUrgency::High
    } else if high == 1 || medium >= 2 {
        DeloadUrgency::Medium
    } else if signals.is_empty() {
        DeloadUrgency::None
    } else {
        DeloadUrgency::Low
    }
}

/// Recommend a deload with default settings
#[must_use]
pub fn recommend_deload(history: &[WorkoutLog], today: NaiveDate) -> DeloadRecommendation {
    DeloadRecommender::default().recommend(history, today)
}

/// Check for an in-progress deload with default settings
#[must_use]
pub fn is_currently_deloading(history: &[WorkoutLog], today: NaiveDate) -> bool {
    DeloadRecommender::default().is_currently_deloading(history, today)
}

/// Percentage drop from `previous` to `current`; zero when `previous` is not positive
fn drop_percent(previous: f64, current: f64) -> f64 {
    if previous > 0.0 {
        (previous - current) / previous * 100.0
    } else {
        0.0
    }
}

/// Mean load across every countable set in the given sessions
fn average_set_weight(sessions: &[&WorkoutLog]) -> f64 {
    let weights: Vec<f64> = sessions
        .iter()
        .flat_map(|session| session.exercises.iter())
        .flat_map(|exercise| exercise.countable_sets())
        .map(|set| set.weight_kg)
        .collect();
    mean(&weights)
}
