// ABOUTME: Data model module for workout history, body stats, and muscle groups
// ABOUTME: Re-exports the plain value types consumed by the analytics engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

mod muscle_group;
mod profile;
mod workout;

pub use muscle_group::MuscleGroup;
pub use profile::{latest_body_weight, BodyStats, UserProfile};
pub use workout::{
    normalize_exercise_name, sorted_asc, sorted_desc, WorkoutExercise, WorkoutLog, WorkoutSet,
};
