// ABOUTME: Injectable exercise reference catalog mapping exercise names to muscle groups
// ABOUTME: Bundled table plus JSON loading and a replaceable keyword fallback for unknown names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Exercise catalog
//!
//! Names are matched case-insensitively after whitespace normalization. A name
//! missing from the catalog falls back to the first keyword it contains, so the
//! keyword table is ordered from most to least specific.

use crate::classification::ExerciseType;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use strength_core::errors::{AppError, AppResult};
use strength_core::models::{normalize_exercise_name, MuscleGroup};
use tracing::debug;

use ExerciseType::{Compound, Isolation};
use MuscleGroup::{Abs, Arms, Back, Calves, Chest, Glutes, Legs, Shoulders};

/// One catalog row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Display name
    pub name: String,
    /// Primary muscle group
    pub muscle_group: MuscleGroup,
    /// Movement type, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exercise_type: Option<ExerciseType>,
}

impl CatalogEntry {
    /// Create an entry
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        muscle_group: MuscleGroup,
        exercise_type: Option<ExerciseType>,
    ) -> Self {
        Self {
            name: name.into(),
            muscle_group,
            exercise_type,
        }
    }
}

const BUNDLED_EXERCISES: &[(&str, MuscleGroup, ExerciseType)] = &[
    // Chest
    ("Bench Press", Chest, Compound),
    ("Barbell Bench Press", Chest, Compound),
    ("Incline Bench Press", Chest, Compound),
    ("Decline Bench Press", Chest, Compound),
    ("Dumbbell Bench Press", Chest, Compound),
    ("Incline Dumbbell Press", Chest, Compound),
    ("Chest Press", Chest, Compound),
    ("Push-Up", Chest, Compound),
    ("Chest Dip", Chest, Compound),
    ("Dumbbell Fly", Chest, Isolation),
    ("Cable Crossover", Chest, Isolation),
    ("Pec Deck", Chest, Isolation),
    // Back
    ("Deadlift", Back, Compound),
    ("Barbell Row", Back, Compound),
    ("Bent Over Row", Back, Compound),
    ("Dumbbell Row", Back, Compound),
    ("Seated Cable Row", Back, Compound),
    ("T-Bar Row", Back, Compound),
    ("Pull-Up", Back, Compound),
    ("Chin-Up", Back, Compound),
    ("Lat Pulldown", Back, Compound),
    ("Rack Pull", Back, Compound),
    ("Straight Arm Pulldown", Back, Isolation),
    ("Back Extension", Back, Isolation),
    ("Barbell Shrug", Back, Isolation),
    // Shoulders
    ("Overhead Press", Shoulders, Compound),
    ("Military Press", Shoulders, Compound),
    ("Dumbbell Shoulder Press", Shoulders, Compound),
    ("Arnold Press", Shoulders, Compound),
    ("Push Press", Shoulders, Compound),
    ("Upright Row", Shoulders, Compound),
    ("Lateral Raise", Shoulders, Isolation),
    ("Front Raise", Shoulders, Isolation),
    ("Rear Delt Fly", Shoulders, Isolation),
    ("Face Pull", Shoulders, Isolation),
    // Legs
    ("Squat", Legs, Compound),
    ("Back Squat", Legs, Compound),
    ("Front Squat", Legs, Compound),
    ("Goblet Squat", Legs, Compound),
    ("Bulgarian Split Squat", Legs, Compound),
    ("Leg Press", Legs, Compound),
    ("Hack Squat", Legs, Compound),
    ("Lunge", Legs, Compound),
    ("Walking Lunge", Legs, Compound),
    ("Romanian Deadlift", Legs, Compound),
    ("Leg Extension", Legs, Isolation),
    ("Leg Curl", Legs, Isolation),
    ("Lying Leg Curl", Legs, Isolation),
    // Arms
    ("Barbell Curl", Arms, Isolation),
    ("Dumbbell Curl", Arms, Isolation),
    ("Hammer Curl", Arms, Isolation),
    ("Preacher Curl", Arms, Isolation),
    ("Tricep Pushdown", Arms, Isolation),
    ("Skull Crusher", Arms, Isolation),
    ("Overhead Tricep Extension", Arms, Isolation),
    ("Close Grip Bench Press", Arms, Compound),
    ("Tricep Dip", Arms, Compound),
    // Abs
    ("Crunch", Abs, Isolation),
    ("Cable Crunch", Abs, Isolation),
    ("Hanging Leg Raise", Abs, Isolation),
    ("Plank", Abs, Isolation),
    ("Russian Twist", Abs, Isolation),
    ("Ab Wheel Rollout", Abs, Isolation),
    // Glutes
    ("Hip Thrust", Glutes, Compound),
    ("Glute Bridge", Glutes, Isolation),
    ("Cable Kickback", Glutes, Isolation),
    // Calves
    ("Standing Calf Raise", Calves, Isolation),
    ("Seated Calf Raise", Calves, Isolation),
];

/// Keyword fallback, most specific first
const DEFAULT_KEYWORDS: &[(&str, MuscleGroup)] = &[
    ("calf", Calves),
    ("calves", Calves),
    ("hip thrust", Glutes),
    ("glute", Glutes),
    ("kickback", Glutes),
    ("leg raise", Abs),
    ("crunch", Abs),
    ("plank", Abs),
    ("sit-up", Abs),
    ("situp", Abs),
    ("russian twist", Abs),
    ("ab wheel", Abs),
    ("oblique", Abs),
    ("tricep", Arms),
    ("bicep", Arms),
    ("skull crusher", Arms),
    ("pushdown", Arms),
    ("pressdown", Arms),
    ("leg curl", Legs),
    ("leg extension", Legs),
    ("leg press", Legs),
    ("curl", Arms),
    ("rear delt", Shoulders),
    ("face pull", Shoulders),
    ("lateral raise", Shoulders),
    ("front raise", Shoulders),
    ("upright row", Shoulders),
    ("overhead press", Shoulders),
    ("shoulder", Shoulders),
    ("military", Shoulders),
    ("arnold", Shoulders),
    ("delt", Shoulders),
    ("bench", Chest),
    ("chest", Chest),
    ("pec", Chest),
    ("fly", Chest),
    ("push-up", Chest),
    ("pushup", Chest),
    ("dip", Chest),
    ("pull-up", Back),
    ("pullup", Back),
    ("chin-up", Back),
    ("chinup", Back),
    ("pulldown", Back),
    ("row", Back),
    ("deadlift", Back),
    ("shrug", Back),
    ("back", Back),
    ("squat", Legs),
    ("lunge", Legs),
    ("step-up", Legs),
    ("hamstring", Legs),
    ("quad", Legs),
    ("leg", Legs),
];

/// Read-only exercise reference data
///
/// Construct once and pass by reference into the analyzers that classify
/// exercises. Test code can build a minimal catalog with [`Self::from_entries`].
#[derive(Debug, Clone)]
pub struct ExerciseCatalog {
    entries: HashMap<String, CatalogEntry>,
    keywords: Vec<(String, MuscleGroup)>,
}

impl Default for ExerciseCatalog {
    fn default() -> Self {
        Self::bundled()
    }
}

impl ExerciseCatalog {
    /// The bundled catalog with the default keyword fallback
    #[must_use]
    pub fn bundled() -> Self {
        Self::from_entries(
            BUNDLED_EXERCISES
                .iter()
                .map(|(name, group, kind)| CatalogEntry::new(*name, *group, Some(*kind))),
        )
    }

    /// A catalog of the given entries with the default keyword fallback
    ///
    /// Later entries replace earlier ones with the same normalized name.
    #[must_use]
    pub fn from_entries(entries: impl IntoIterator<Item = CatalogEntry>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|entry| (normalize_exercise_name(&entry.name), entry))
                .collect(),
            keywords: DEFAULT_KEYWORDS
                .iter()
                .map(|(keyword, group)| ((*keyword).to_owned(), *group))
                .collect(),
        }
    }

    /// Parse a JSON array of `{name, muscle_group, exercise_type?}` objects
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not a valid catalog or an entry has an empty name
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        let entries: Vec<CatalogEntry> = serde_json::from_str(json)
            .map_err(|e| AppError::serialization(format!("Invalid exercise catalog: {e}")))?;
        if let Some(position) = entries
            .iter()
            .position(|entry| entry.name.trim().is_empty())
        {
            return Err(AppError::invalid_input(format!(
                "Exercise catalog entry {position} has an empty name"
            )));
        }
        debug!(entries = entries.len(), "Loaded exercise catalog");
        Ok(Self::from_entries(entries))
    }

    /// Load a JSON catalog file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid catalog
    pub fn from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AppError::not_found(format!("Exercise catalog {}", path.display()))
            } else {
                AppError::from(e)
            }
        })?;
        Self::from_json_str(&json)
    }

    /// Replace the keyword fallback table (first match wins)
    #[must_use]
    pub fn with_keywords<K: Into<String>>(
        mut self,
        keywords: impl IntoIterator<Item = (K, MuscleGroup)>,
    ) -> Self {
        self.keywords = keywords
            .into_iter()
            .map(|(keyword, group)| (normalize_exercise_name(&keyword.into()), group))
            .collect();
        self
    }

    /// Disable the keyword fallback so only exact catalog names classify
    #[must_use]
    pub fn without_keywords(mut self) -> Self {
        self.keywords.clear();
        self
    }

    /// Exact catalog entry for a name
    #[must_use]
    pub fn get(&self, exercise_name: &str) -> Option<&CatalogEntry> {
        self.entries.get(&normalize_exercise_name(exercise_name))
    }

    /// Muscle group for a name: exact entry first, then the first contained keyword
    #[must_use]
    pub fn classify(&self, exercise_name: &str) -> Option<MuscleGroup> {
        let name = normalize_exercise_name(exercise_name);
        if let Some(entry) = self.entries.get(&name) {
            return Some(entry.muscle_group);
        }
        self.keywords
            .iter()
            .find(|(keyword, _)| name.contains(keyword.as_str()))
            .map(|(_, group)| *group)
    }

    /// Movement type for a name: catalog value when present, keyword classifier otherwise
    #[must_use]
    pub fn exercise_type(&self, exercise_name: &str) -> ExerciseType {
        self.get(exercise_name)
            .and_then(|entry| entry.exercise_type)
            .unwrap_or_else(|| ExerciseType::classify(exercise_name))
    }

    /// Iterate the catalog entries in no particular order
    pub fn entries(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.values()
    }

    /// Number of catalog entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
