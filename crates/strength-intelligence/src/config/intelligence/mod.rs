// ABOUTME: Intelligence configuration for strength training analytics
// ABOUTME: Orchestrates domain-specific configs and provides unified validation and loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Intelligence Configuration Module
//!
//! Provides type-safe configuration for every analyzer in the engine. Defaults
//! reproduce the documented thresholds; a handful of them can be overridden
//! from the environment.
//!
//! # Module Structure
//!
//! - `metrics` - One-rep-max clamp, trend window, progression bands
//! - `plateau` - Plateau threshold, tolerance, severity buckets
//! - `deload` - Fatigue signal thresholds
//! - `volume` - Muscle-group window and imbalance ratio
//! - `starting_weight` - Starting-weight tier factors and rounding

pub mod deload;
pub mod error;
pub mod metrics;
pub mod plateau;
pub mod starting_weight;
pub mod volume;

pub use deload::DeloadConfig;
pub use error::ConfigError;
pub use metrics::{MetricsConfig, ProgressionConfig};
pub use plateau::PlateauConfig;
pub use starting_weight::StartingWeightConfig;
pub use volume::MuscleVolumeConfig;

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static INTELLIGENCE_CONFIG: OnceLock<IntelligenceConfig> = OnceLock::new();

/// Environment variable overriding the plateau session threshold
pub const ENV_PLATEAU_THRESHOLD: &str = "STRENGTH_PLATEAU_THRESHOLD";
/// Environment variable overriding the trend window
pub const ENV_TREND_WINDOW: &str = "STRENGTH_TREND_WINDOW";
/// Environment variable overriding the number of summarized weeks
pub const ENV_DELOAD_SUMMARY_WEEKS: &str = "STRENGTH_DELOAD_SUMMARY_WEEKS";
/// Environment variable overriding the muscle-volume window
pub const ENV_MUSCLE_WINDOW_DAYS: &str = "STRENGTH_MUSCLE_WINDOW_DAYS";
/// Environment variable overriding the antagonist imbalance ratio
pub const ENV_IMBALANCE_RATIO: &str = "STRENGTH_IMBALANCE_RATIO";
/// Environment variable overriding the plate rounding increment
pub const ENV_ROUNDING_INCREMENT_KG: &str = "STRENGTH_ROUNDING_INCREMENT_KG";

/// Main intelligence configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// One-rep-max and trend settings
    pub metrics: MetricsConfig,
    /// Period-over-period comparison settings
    pub progression: ProgressionConfig,
    /// Plateau detection settings
    pub plateau: PlateauConfig,
    /// Deload recommendation settings
    pub deload: DeloadConfig,
    /// Muscle-group volume settings
    pub muscle_volume: MuscleVolumeConfig,
    /// Starting-weight suggestion settings
    pub starting_weight: StartingWeightConfig,
}

impl IntelligenceConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        INTELLIGENCE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load intelligence config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Apply environment variable overrides on top of the current values
    ///
    /// # Errors
    ///
    /// Returns an error if a set variable cannot be parsed
    pub fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Some(threshold) = parse_env(ENV_PLATEAU_THRESHOLD)? {
            self.plateau.threshold = threshold;
        }
        if let Some(window) = parse_env(ENV_TREND_WINDOW)? {
            self.metrics.trend_window = window;
        }
        if let Some(weeks) = parse_env(ENV_DELOAD_SUMMARY_WEEKS)? {
            self.deload.summary_weeks = weeks;
        }
        if let Some(days) = parse_env(ENV_MUSCLE_WINDOW_DAYS)? {
            self.muscle_volume.window_days = days;
        }
        if let Some(ratio) = parse_env(ENV_IMBALANCE_RATIO)? {
            self.muscle_volume.imbalance_ratio = ratio;
        }
        if let Some(increment) = parse_env(ENV_ROUNDING_INCREMENT_KG)? {
            self.starting_weight.rounding_increment_kg = increment;
        }
        Ok(self)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error describing the first inconsistent threshold found
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.metrics.brzycki_max_reps == 0 || self.metrics.brzycki_max_reps > 36 {
            return Err(ConfigError::ValueOutOfRange(
                "brzycki_max_reps must be between 1 and 36",
            ));
        }
        if self.metrics.trend_window < 2 {
            return Err(ConfigError::ValueOutOfRange(
                "trend_window must be at least 2 sessions",
            ));
        }
        if self.plateau.threshold < 2 {
            return Err(ConfigError::ValueOutOfRange(
                "plateau threshold must be at least 2 sessions",
            ));
        }
        if self.plateau.moderate_weeks >= self.plateau.severe_weeks {
            return Err(ConfigError::InvalidRange(
                "plateau moderate_weeks must be < severe_weeks",
            ));
        }
        self.validate_deload()?;
        if self.muscle_volume.window_days == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "muscle volume window must be at least one day",
            ));
        }
        if self.muscle_volume.imbalance_ratio <= 1.0 {
            return Err(ConfigError::ValueOutOfRange(
                "imbalance_ratio must be greater than 1.0",
            ));
        }
        self.validate_starting_weight()
    }

    fn validate_deload(&self) -> Result<(), ConfigError> {
        let deload = &self.deload;
        if deload.summary_weeks < deload.fatigue_weeks || deload.summary_weeks < 4 {
            return Err(ConfigError::ValueOutOfRange(
                "summary_weeks must cover at least four weeks and the fatigue block",
            ));
        }
        if deload.volume_decline_medium_percent >= deload.volume_decline_high_percent {
            return Err(ConfigError::InvalidRange(
                "volume_decline_medium_percent must be < volume_decline_high_percent",
            ));
        }
        if deload.performance_drop_percent > deload.performance_medium_percent
            || deload.performance_medium_percent >= deload.performance_high_percent
        {
            return Err(ConfigError::InvalidRange(
                "performance drop thresholds must be ascending",
            ));
        }
        if deload.overreach_drop_ratio >= 1.0 || deload.overreach_spike_ratio <= 1.0 {
            return Err(ConfigError::InvalidRange(
                "overreach ratios must straddle the weekly average",
            ));
        }
        Ok(())
    }

    fn validate_starting_weight(&self) -> Result<(), ConfigError> {
        let sw = &self.starting_weight;
        if sw.rounding_increment_kg <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "rounding_increment_kg must be positive",
            ));
        }
        if sw.intermediate_activity_level >= sw.advanced_activity_level {
            return Err(ConfigError::InvalidRange(
                "intermediate_activity_level must be < advanced_activity_level",
            ));
        }
        if sw.beginner_multiplier >= sw.intermediate_multiplier
            || sw.intermediate_multiplier >= sw.advanced_multiplier
        {
            return Err(ConfigError::InvalidRange(
                "experience multipliers must be ascending",
            ));
        }
        if sw.history_sessions == 0 || sw.similar_top_n == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "history_sessions and similar_top_n must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Read and parse an optional environment variable
fn parse_env<T>(name: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| ConfigError::Parse(format!("{name}={raw}: {e}"))),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(ConfigError::EnvVar(e)),
    }
}
