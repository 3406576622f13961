// ABOUTME: Starting-weight suggestions from exact history, similar exercises, or a profile heuristic
// ABOUTME: Three ordered tiers where the first tier that produces a value wins
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Starting-weight suggestion
//!
//! Tiers, in order:
//! 1. exact history: recent working weights for the same exercise
//! 2. similar exercises: working weights of other exercises for the same muscle group
//! 3. profile heuristic: body weight scaled by experience and movement type
//!
//! Every suggestion is rounded to the plate increment.

use crate::catalog::ExerciseCatalog;
use crate::classification::{ExerciseType, ExperienceLevel};
use crate::config::intelligence::{IntelligenceConfig, MetricsConfig, StartingWeightConfig};
use crate::metrics::{mean, StrengthMetrics};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use strength_core::constants::round_to_increment;
use strength_core::models::{
    latest_body_weight, normalize_exercise_name, sorted_desc, BodyStats, UserProfile, WorkoutLog,
};
use tracing::debug;

/// Confidence attached to a suggestion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionConfidence {
    /// Profile heuristic or cross-type similar exercise
    Low,
    /// Same-type similar exercises
    Medium,
    /// The exercise's own history
    High,
}

/// Tier that produced a suggestion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "tier", rename_all = "snake_case")]
pub enum SuggestionSource {
    /// Recent sessions of the same exercise
    ExactHistory {
        /// Sessions averaged
        sessions: usize,
    },
    /// Other exercises training the same muscle group
    SimilarExercises {
        /// Exercises averaged
        exercises: Vec<String>,
        /// Whether they share the new exercise's movement type
        same_type: bool,
    },
    /// Body weight and experience tier
    ProfileHeuristic {
        /// Tier derived from the activity level
        experience: ExperienceLevel,
    },
}

/// Suggested starting load for an exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StartingWeightSuggestion {
    /// Exercise the suggestion is for
    pub exercise_name: String,
    /// Suggested load, rounded to the plate increment (kg)
    pub weight_kg: f64,
    /// Confidence level
    pub confidence: SuggestionConfidence,
    /// Tier that produced the value
    pub source: SuggestionSource,
    /// Human-readable explanation
    pub reasoning: String,
}

/// Per-exercise aggregate used by the similar-exercise tier
#[derive(Debug, Clone)]
struct SimilarExercise {
    name: String,
    exercise_type: ExerciseType,
    average_one_rep_max: f64,
    average_weight: f64,
}

/// Starting-weight suggester
#[derive(Debug, Clone)]
pub struct StartingWeightSuggester {
    metrics: StrengthMetrics,
    config: StartingWeightConfig,
}

impl Default for StartingWeightSuggester {
    fn default() -> Self {
        Self::with_config(MetricsConfig::default(), StartingWeightConfig::default())
    }
}

impl StartingWeightSuggester {
    /// Create a suggester from the global configuration
    #[must_use]
    pub fn new() -> Self {
        let global = IntelligenceConfig::global();
        Self::with_config(global.metrics.clone(), global.starting_weight.clone())
    }

    /// Create a suggester with custom configuration
    #[must_use]
    pub const fn with_config(metrics: MetricsConfig, config: StartingWeightConfig) -> Self {
        Self {
            metrics: StrengthMetrics::with_config(metrics),
            config,
        }
    }

    /// Suggest a starting load, or `None` when no tier has enough data
    #[must_use]
    pub fn suggest(
        &self,
        exercise_name: &str,
        history: &[WorkoutLog],
        catalog: &ExerciseCatalog,
        body_stats: &[BodyStats],
        profile: Option<&UserProfile>,
    ) -> Option<StartingWeightSuggestion> {
        let suggestion = self
            .from_history(exercise_name, history)
            .or_else(|| self.from_similar(exercise_name, history, catalog))
            .or_else(|| self.from_profile(exercise_name, catalog, body_stats, profile));

        match &suggestion {
            Some(found) => debug!(
                exercise = exercise_name,
                weight_kg = found.weight_kg,
                confidence = ?found.confidence,
                "Suggested starting weight"
            ),
            None => debug!(exercise = exercise_name, "No starting weight suggestion available"),
        }
        suggestion
    }

    /// Tier 1: average working weight of the most recent sessions of this exercise
    #[must_use]
    pub fn from_history(
        &self,
        exercise_name: &str,
        history: &[WorkoutLog],
    ) -> Option<StartingWeightSuggestion> {
        let session_averages: Vec<f64> = sorted_desc(history)
            .into_iter()
            .filter_map(|session| session_average_weight(session, exercise_name))
            .take(self.config.history_sessions)
            .collect();
        if session_averages.is_empty() {
            return None;
        }

        let average = mean(&session_averages);
        let weight = self.round_up_to_one_plate(average * self.config.history_factor);
        Some(StartingWeightSuggestion {
            exercise_name: exercise_name.to_owned(),
            weight_kg: weight,
            confidence: SuggestionConfidence::High,
            source: SuggestionSource::ExactHistory {
                sessions: session_averages.len(),
            },
            reasoning: format!(
                "Based on your last {} sessions averaging {average:.1} kg, start at {:.0}% of that",
                session_averages.len(),
                self.config.history_factor * 100.0
            ),
        })
    }

    /// Tier 2: working weights of other exercises for the same muscle group
    #[must_use]
    pub fn from_similar(
        &self,
        exercise_name: &str,
        history: &[WorkoutLog],
        catalog: &ExerciseCatalog,
    ) -> Option<StartingWeightSuggestion> {
        let group = catalog.classify(exercise_name)?;
        let target_type = catalog.exercise_type(exercise_name);
        let target_key = normalize_exercise_name(exercise_name);

        let mut names: HashMap<String, &str> = HashMap::new();
        for session in history {
            for exercise in &session.exercises {
                let key = normalize_exercise_name(&exercise.name);
                if key != target_key && catalog.classify(&exercise.name) == Some(group) {
                    names.entry(key).or_insert(exercise.name.as_str());
                }
            }
        }

        let mut similar: Vec<SimilarExercise> = names
            .into_values()
            .filter_map(|name| self.summarize(name, history, catalog))
            .collect();
        similar.sort_by(|a, b| {
            b.average_one_rep_max
                .total_cmp(&a.average_one_rep_max)
                .then_with(|| a.name.cmp(&b.name))
        });

        let same_type: Vec<&SimilarExercise> = similar
            .iter()
            .filter(|candidate| candidate.exercise_type == target_type)
            .take(self.config.similar_top_n)
            .collect();

        if !same_type.is_empty() {
            let weights: Vec<f64> = same_type.iter().map(|c| c.average_weight).collect();
            let weight = self.round_up_to_one_plate(mean(&weights) * self.config.similar_factor);
            let exercises: Vec<String> = same_type.iter().map(|c| c.name.clone()).collect();
            return Some(StartingWeightSuggestion {
                exercise_name: exercise_name.to_owned(),
                weight_kg: weight,
                confidence: SuggestionConfidence::Medium,
                reasoning: format!(
                    "Based on similar {target_type} {group} exercises ({})",
                    exercises.join(", ")
                ),
                source: SuggestionSource::SimilarExercises {
                    exercises,
                    same_type: true,
                },
            });
        }

        let best = similar.first()?;
        let adjustment = match target_type {
            ExerciseType::Compound => self.config.compound_adjustment,
            ExerciseType::Isolation => self.config.isolation_adjustment,
        };
        let weight =
            self.round_up_to_one_plate(best.average_weight * self.config.similar_factor * adjustment);
        Some(StartingWeightSuggestion {
            exercise_name: exercise_name.to_owned(),
            weight_kg: weight,
            confidence: SuggestionConfidence::Low,
            reasoning: format!(
                "Based on {} ({}), adjusted for a {target_type} movement",
                best.name, best.exercise_type
            ),
            source: SuggestionSource::SimilarExercises {
                exercises: vec![best.name.clone()],
                same_type: false,
            },
        })
    }

    /// Tier 3: body weight scaled by experience tier and movement type
    #[must_use]
    pub fn from_profile(
        &self,
        exercise_name: &str,
        catalog: &ExerciseCatalog,
        body_stats: &[BodyStats],
        profile: Option<&UserProfile>,
    ) -> Option<StartingWeightSuggestion> {
        let body_weight = latest_body_weight(body_stats, profile)?;
        let experience = ExperienceLevel::from_activity_level_with(
            profile.and_then(|p| p.activity_level),
            self.config.intermediate_activity_level,
            self.config.advanced_activity_level,
        );
        let experience_multiplier = match experience {
            ExperienceLevel::Beginner => self.config.beginner_multiplier,
            ExperienceLevel::Intermediate => self.config.intermediate_multiplier,
            ExperienceLevel::Advanced => self.config.advanced_multiplier,
        };
        let exercise_type = catalog.exercise_type(exercise_name);
        let type_multiplier = match exercise_type {
            ExerciseType::Compound => self.config.compound_multiplier,
            ExerciseType::Isolation => self.config.isolation_multiplier,
        };

        let raw = (body_weight * experience_multiplier * type_multiplier)
            .max(self.config.minimum_weight_kg);
        let weight = round_to_increment(raw, self.config.rounding_increment_kg);
        Some(StartingWeightSuggestion {
            exercise_name: exercise_name.to_owned(),
            weight_kg: weight,
            confidence: SuggestionConfidence::Low,
            source: SuggestionSource::ProfileHeuristic { experience },
            reasoning: format!(
                "Estimated from {body_weight:.1} kg body weight for a {experience} lifter on a {exercise_type} movement"
            ),
        })
    }

    fn summarize(
        &self,
        name: &str,
        history: &[WorkoutLog],
        catalog: &ExerciseCatalog,
    ) -> Option<SimilarExercise> {
        let mut maxes = Vec::new();
        let mut weights = Vec::new();
        for session in history {
            if let Some(estimate) = self.metrics.best_in_session(session, name) {
                maxes.push(estimate.value);
            }
            if let Some(average) = session_average_weight(session, name) {
                weights.push(average);
            }
        }
        if maxes.is_empty() {
            return None;
        }
        Some(SimilarExercise {
            name: name.to_owned(),
            exercise_type: catalog.exercise_type(name),
            average_one_rep_max: mean(&maxes),
            average_weight: mean(&weights),
        })
    }

    /// Round to the plate increment, never below one increment
    fn round_up_to_one_plate(&self, weight: f64) -> f64 {
        let increment = self.config.rounding_increment_kg;
        round_to_increment(weight, increment).max(increment)
    }
}

/// Suggest a starting load with default settings
#[must_use]
pub fn suggest_starting_weight(
    exercise_name: &str,
    history: &[WorkoutLog],
    catalog: &ExerciseCatalog,
    body_stats: &[BodyStats],
    profile: Option<&UserProfile>,
) -> Option<StartingWeightSuggestion> {
    StartingWeightSuggester::default().suggest(exercise_name, history, catalog, body_stats, profile)
}

/// Mean load of the countable sets of an exercise within one session
fn session_average_weight(session: &WorkoutLog, exercise_name: &str) -> Option<f64> {
    let weights: Vec<f64> = session
        .exercises_named(exercise_name)
        .flat_map(|exercise| exercise.countable_sets())
        .map(|set| set.weight_kg)
        .collect();
    if weights.is_empty() {
        None
    } else {
        Some(mean(&weights))
    }
}
