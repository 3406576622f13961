// ABOUTME: Body measurements and user profile snapshots supplied by the host application
// ABOUTME: Used by the starting-weight heuristic when no training history is available
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A dated body measurement entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyStats {
    /// Measurement date
    pub date: NaiveDate,
    /// Body weight in kilograms
    #[serde(default)]
    pub weight_kg: Option<f64>,
    /// Body fat percentage
    #[serde(default)]
    pub body_fat_percent: Option<f64>,
}

impl BodyStats {
    /// Create an entry carrying only body weight
    #[must_use]
    pub const fn weight(date: NaiveDate, weight_kg: f64) -> Self {
        Self {
            date,
            weight_kg: Some(weight_kg),
            body_fat_percent: None,
        }
    }
}

/// User profile fields relevant to training analytics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Body weight in kilograms as entered on the profile
    #[serde(default)]
    pub body_weight_kg: Option<f64>,
    /// Height in centimetres
    #[serde(default)]
    pub height_cm: Option<f64>,
    /// Age in years
    #[serde(default)]
    pub age: Option<u32>,
    /// Activity multiplier (1.2 sedentary .. 1.9 very active)
    #[serde(default)]
    pub activity_level: Option<f64>,
}

/// Most recent positive body weight, preferring logged body stats over the profile
#[must_use]
pub fn latest_body_weight(body_stats: &[BodyStats], profile: Option<&UserProfile>) -> Option<f64> {
    body_stats
        .iter()
        .filter_map(|entry| {
            entry
                .weight_kg
                .filter(|weight| *weight > 0.0)
                .map(|weight| (entry.date, weight))
        })
        .max_by_key(|(date, _)| *date)
        .map(|(_, weight)| weight)
        .or_else(|| {
            profile
                .and_then(|p| p.body_weight_kg)
                .filter(|weight| *weight > 0.0)
        })
}
