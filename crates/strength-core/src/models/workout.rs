// ABOUTME: Workout history data model with sessions, exercise instances, and sets
// ABOUTME: Provides the validity filters and name matching shared by every analyzer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Normalize a free-text exercise name for comparison
///
/// Exercise identity is the display name, so every join in the engine goes
/// through this: trimmed, lowercased, internal whitespace collapsed.
#[must_use]
pub fn normalize_exercise_name(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// A single logged set
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSet {
    /// Load in kilograms
    pub weight_kg: f64,
    /// Repetitions performed
    pub reps: u32,
    /// Whether the set was actually completed
    pub completed: bool,
}

impl WorkoutSet {
    /// Create a completed set
    #[must_use]
    pub const fn new(weight_kg: f64, reps: u32) -> Self {
        Self {
            weight_kg,
            reps,
            completed: true,
        }
    }

    /// Create a planned set that has not been completed yet
    #[must_use]
    pub const fn pending(weight_kg: f64, reps: u32) -> Self {
        Self {
            weight_kg,
            reps,
            completed: false,
        }
    }

    /// Whether this set participates in strength and volume calculations
    ///
    /// Only completed sets with positive weight and reps count; anything else
    /// is an inert placeholder.
    #[must_use]
    pub fn is_countable(&self) -> bool {
        self.completed && self.weight_kg > 0.0 && self.reps > 0
    }

    /// Load x reps for a countable set, zero otherwise
    #[must_use]
    pub fn volume(&self) -> f64 {
        if self.is_countable() {
            self.weight_kg * f64::from(self.reps)
        } else {
            0.0
        }
    }
}

/// An exercise performed within a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutExercise {
    /// Display name, also the join key to exercise metadata
    pub name: String,
    /// Sets in the order they were logged
    pub sets: Vec<WorkoutSet>,
    /// Free-text notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Logged duration in minutes (cardio-style entries)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
    /// Estimated calories burned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_calories: Option<u32>,
}

impl WorkoutExercise {
    /// Create an exercise with no sets
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sets: Vec::new(),
            notes: None,
            duration_minutes: None,
            estimated_calories: None,
        }
    }

    /// Create an exercise with the given sets
    pub fn with_sets(name: impl Into<String>, sets: Vec<WorkoutSet>) -> Self {
        Self {
            sets,
            ..Self::new(name)
        }
    }

    /// Append a set
    #[must_use]
    pub fn set(mut self, set: WorkoutSet) -> Self {
        self.sets.push(set);
        self
    }

    /// Attach notes
    #[must_use]
    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Case-insensitive name comparison
    #[must_use]
    pub fn matches_name(&self, name: &str) -> bool {
        normalize_exercise_name(&self.name) == normalize_exercise_name(name)
    }

    /// Sets that participate in calculations
    pub fn countable_sets(&self) -> impl Iterator<Item = &WorkoutSet> {
        self.sets.iter().filter(|set| set.is_countable())
    }

    /// Whether any set participates in calculations
    #[must_use]
    pub fn has_countable_sets(&self) -> bool {
        self.sets.iter().any(WorkoutSet::is_countable)
    }
}

/// One training session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutLog {
    /// Session identity
    pub id: Uuid,
    /// Session name ("Push Day", "Legs", ...)
    pub name: String,
    /// Calendar date the session belongs to
    pub date: NaiveDate,
    /// Session start
    pub started_at: DateTime<Utc>,
    /// Session end, `None` while the session is still active
    #[serde(default)]
    pub ended_at: Option<DateTime<Utc>>,
    /// Exercises in the order they were performed
    pub exercises: Vec<WorkoutExercise>,
}

impl WorkoutLog {
    /// Create a finished session starting at midnight UTC of `date`
    pub fn new(name: impl Into<String>, date: NaiveDate) -> Self {
        let started_at = date.and_time(NaiveTime::MIN).and_utc();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            date,
            started_at,
            ended_at: Some(started_at + Duration::hours(1)),
            exercises: Vec::new(),
        }
    }

    /// Append an exercise
    #[must_use]
    pub fn exercise(mut self, exercise: WorkoutExercise) -> Self {
        self.exercises.push(exercise);
        self
    }

    /// Override session start and end timestamps
    #[must_use]
    pub const fn with_times(
        mut self,
        started_at: DateTime<Utc>,
        ended_at: Option<DateTime<Utc>>,
    ) -> Self {
        self.started_at = started_at;
        self.ended_at = ended_at;
        self
    }

    /// Whether the session is still in progress
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.ended_at.is_none()
    }

    /// Session duration, if finished
    #[must_use]
    pub fn duration(&self) -> Option<Duration> {
        self.ended_at.map(|end| end - self.started_at)
    }

    /// Exercise instances in this session matching `name` (case-insensitive)
    pub fn exercises_named<'a>(
        &'a self,
        name: &'a str,
    ) -> impl Iterator<Item = &'a WorkoutExercise> + 'a {
        let key = normalize_exercise_name(name);
        self.exercises
            .iter()
            .filter(move |exercise| normalize_exercise_name(&exercise.name) == key)
    }

    /// Whether this session contains `name`
    #[must_use]
    pub fn contains_exercise(&self, name: &str) -> bool {
        self.exercises_named(name).next().is_some()
    }

    /// Sum of countable set volume across all exercises
    #[must_use]
    pub fn total_volume(&self) -> f64 {
        self.exercises
            .iter()
            .flat_map(|exercise| exercise.sets.iter())
            .map(WorkoutSet::volume)
            .sum()
    }
}

/// Sort a history snapshot most-recent-first without mutating the caller's data
///
/// Ties on date are broken by start timestamp so same-day sessions keep a
/// stable, meaningful order.
#[must_use]
pub fn sorted_desc(history: &[WorkoutLog]) -> Vec<&WorkoutLog> {
    let mut sorted: Vec<&WorkoutLog> = history.iter().collect();
    sorted.sort_by(|a, b| {
        b.date
            .cmp(&a.date)
            .then_with(|| b.started_at.cmp(&a.started_at))
    });
    sorted
}

/// Sort a history snapshot oldest-first without mutating the caller's data
#[must_use]
pub fn sorted_asc(history: &[WorkoutLog]) -> Vec<&WorkoutLog> {
    let mut sorted = sorted_desc(history);
    sorted.reverse();
    sorted
}
