// ABOUTME: Core types and constants for Pierre Strength training analytics
// ABOUTME: Foundation crate with workout history model, error handling, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Strength Core
//!
//! Foundation crate providing the plain data model consumed by the training
//! analytics engine. The types here carry no behaviour beyond simple accessors
//! and the validity filters every analyzer relies on.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Unit, time, and rounding constants
//! - **models**: Workout history, body stats, user profile, muscle groups

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`WorkoutLog`, `WorkoutExercise`, `WorkoutSet`, profiles)
pub mod models;

pub use errors::{AppError, AppResult, ErrorCode};
