// ABOUTME: One-rep-max estimation algorithms for submaximal weight and rep pairs
// ABOUTME: Implements Brzycki (default, rep-clamped), Epley, and Lombardi plus inverse rep-max tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strength_core::{AppError, AppResult};

/// Reps above which Brzycki is clamped by default
pub const BRZYCKI_DEFAULT_MAX_REPS: u32 = 12;

/// Brzycki intercept
const BRZYCKI_INTERCEPT: f64 = 1.0278;

/// Brzycki per-rep slope
const BRZYCKI_SLOPE: f64 = 0.0278;

/// Epley divisor
const EPLEY_DIVISOR: f64 = 30.0;

/// Lombardi exponent
const LOMBARDI_EXPONENT: f64 = 0.10;

/// One-rep-max estimation algorithm selection
///
/// - `Brzycki`: `1RM = w / (1.0278 - 0.0278 x reps)`, accurate for 1-10 reps
/// - `Epley`: `1RM = w x (1 + reps / 30)`, slightly more generous at higher reps
/// - `Lombardi`: `1RM = w x reps^0.10`
///
/// # Scientific References
///
/// - Brzycki, M. (1993). "Strength testing: predicting a one-rep max from reps-to-fatigue."
///   *Journal of Physical Education, Recreation & Dance*, 64(1), 88-90.
/// - Epley, B. (1985). "Poundage chart." *Boyd Epley Workout*.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OneRepMaxAlgorithm {
    /// Brzycki formula with the rep term clamped to `max_reps`
    ///
    /// The denominator reaches zero near 37 reps, so anything above `max_reps`
    /// is estimated as if it were `max_reps`. The result is conservative beyond
    /// that range, not exact.
    Brzycki {
        /// Upper bound applied to the rep term
        max_reps: u32,
    },
    /// Epley formula
    Epley,
    /// Lombardi formula
    Lombardi,
}

impl Default for OneRepMaxAlgorithm {
    fn default() -> Self {
        Self::Brzycki {
            max_reps: BRZYCKI_DEFAULT_MAX_REPS,
        }
    }
}

impl OneRepMaxAlgorithm {
    /// Estimate a one-rep max from a weight and rep count
    ///
    /// Non-positive weight or zero reps yield `0.0`; a single rep returns the
    /// weight unchanged for every algorithm.
    #[must_use]
    pub fn estimate(&self, weight_kg: f64, reps: u32) -> f64 {
        if weight_kg <= 0.0 || reps == 0 {
            return 0.0;
        }
        if reps == 1 {
            return weight_kg;
        }
        match self {
            Self::Brzycki { max_reps } => {
                weight_kg / Self::brzycki_denominator(reps.min((*max_reps).max(1)))
            }
            Self::Epley => weight_kg * (1.0 + f64::from(reps) / EPLEY_DIVISOR),
            Self::Lombardi => weight_kg * f64::from(reps).powf(LOMBARDI_EXPONENT),
        }
    }

    /// Load expected to be liftable for `reps` given a one-rep max
    ///
    /// Inverse of [`Self::estimate`]; `reps <= 1` returns the one-rep max.
    #[must_use]
    pub fn weight_for_reps(&self, one_rep_max: f64, reps: u32) -> f64 {
        if one_rep_max <= 0.0 {
            return 0.0;
        }
        if reps <= 1 {
            return one_rep_max;
        }
        match self {
            Self::Brzycki { max_reps } => {
                one_rep_max * Self::brzycki_denominator(reps.min((*max_reps).max(1)))
            }
            Self::Epley => one_rep_max / (1.0 + f64::from(reps) / EPLEY_DIVISOR),
            Self::Lombardi => one_rep_max / f64::from(reps).powf(LOMBARDI_EXPONENT),
        }
    }

    /// Rep-max table from 1 to `max_reps` for a given one-rep max
    #[must_use]
    pub fn rep_max_table(&self, one_rep_max: f64, max_reps: u32) -> Vec<RepMaxEntry> {
        if one_rep_max <= 0.0 {
            return Vec::new();
        }
        (1..=max_reps)
            .map(|reps| {
                let weight_kg = self.weight_for_reps(one_rep_max, reps);
                RepMaxEntry {
                    reps,
                    weight_kg,
                    percent_of_max: weight_kg / one_rep_max * 100.0,
                }
            })
            .collect()
    }

    fn brzycki_denominator(reps: u32) -> f64 {
        BRZYCKI_SLOPE.mul_add(-f64::from(reps), BRZYCKI_INTERCEPT)
    }
}

impl fmt::Display for OneRepMaxAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Brzycki { .. } => f.write_str("brzycki"),
            Self::Epley => f.write_str("epley"),
            Self::Lombardi => f.write_str("lombardi"),
        }
    }
}

impl FromStr for OneRepMaxAlgorithm {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "brzycki" => Ok(Self::default()),
            "epley" => Ok(Self::Epley),
            "lombardi" => Ok(Self::Lombardi),
            other => Err(AppError::invalid_input(format!(
                "unknown one-rep-max algorithm: {other}"
            ))),
        }
    }
}

/// One row of a rep-max table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RepMaxEntry {
    /// Target repetitions
    pub reps: u32,
    /// Expected load for that many reps (kg)
    pub weight_kg: f64,
    /// Load as a percentage of the one-rep max
    pub percent_of_max: f64,
}
