// ABOUTME: Tests for intelligence configuration defaults, environment overrides, and validation
// ABOUTME: Environment-mutating tests run serially to avoid cross-test interference
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use pierre_strength::errors::{AppError, ErrorCode};
use pierre_strength::intelligence::config::intelligence::{
    ConfigError, ENV_DELOAD_SUMMARY_WEEKS, ENV_IMBALANCE_RATIO, ENV_MUSCLE_WINDOW_DAYS,
    ENV_PLATEAU_THRESHOLD, ENV_ROUNDING_INCREMENT_KG, ENV_TREND_WINDOW,
};
use pierre_strength::intelligence::IntelligenceConfig;
use serial_test::serial;
use std::env;

const ALL_VARS: [&str; 6] = [
    ENV_PLATEAU_THRESHOLD,
    ENV_TREND_WINDOW,
    ENV_DELOAD_SUMMARY_WEEKS,
    ENV_MUSCLE_WINDOW_DAYS,
    ENV_IMBALANCE_RATIO,
    ENV_ROUNDING_INCREMENT_KG,
];

fn clear_env() {
    for name in ALL_VARS {
        env::remove_var(name);
    }
}

#[test]
fn test_defaults_are_valid() {
    let config = IntelligenceConfig::default();
    config.validate().unwrap();

    assert_eq!(config.metrics.brzycki_max_reps, 12);
    assert_eq!(config.plateau.threshold, 3);
    assert_eq!(config.plateau.variance_tolerance_kg, 1.0);
    assert_eq!(config.progression.same_band_kg, 0.5);
    assert_eq!(config.deload.summary_weeks, 6);
    assert_eq!(config.muscle_volume.window_days, 7);
    assert_eq!(config.muscle_volume.imbalance_ratio, 2.0);
    assert_eq!(config.starting_weight.rounding_increment_kg, 2.5);
}

#[test]
#[serial]
fn test_load_without_overrides_matches_defaults() {
    clear_env();
    let config = IntelligenceConfig::load().unwrap();
    assert_eq!(config.plateau.threshold, IntelligenceConfig::default().plateau.threshold);
}

#[test]
#[serial]
fn test_env_overrides_are_applied() {
    clear_env();
    env::set_var(ENV_PLATEAU_THRESHOLD, "4");
    env::set_var(ENV_TREND_WINDOW, " 8 ");
    env::set_var(ENV_DELOAD_SUMMARY_WEEKS, "8");
    env::set_var(ENV_MUSCLE_WINDOW_DAYS, "14");
    env::set_var(ENV_IMBALANCE_RATIO, "1.5");
    env::set_var(ENV_ROUNDING_INCREMENT_KG, "1.25");

    let config = IntelligenceConfig::load();
    clear_env();
    let config = config.unwrap();

    assert_eq!(config.plateau.threshold, 4);
    assert_eq!(config.metrics.trend_window, 8);
    assert_eq!(config.deload.summary_weeks, 8);
    assert_eq!(config.muscle_volume.window_days, 14);
    assert_eq!(config.muscle_volume.imbalance_ratio, 1.5);
    assert_eq!(config.starting_weight.rounding_increment_kg, 1.25);
}

#[test]
#[serial]
fn test_unparsable_override_is_a_parse_error() {
    clear_env();
    env::set_var(ENV_PLATEAU_THRESHOLD, "three");
    let result = IntelligenceConfig::load();
    clear_env();

    let error = result.unwrap_err();
    assert!(matches!(error, ConfigError::Parse(_)));
    assert!(error.to_string().contains(ENV_PLATEAU_THRESHOLD));
}

#[test]
#[serial]
fn test_override_failing_validation_is_rejected() {
    clear_env();
    env::set_var(ENV_IMBALANCE_RATIO, "0.9");
    let result = IntelligenceConfig::load();
    clear_env();
    assert!(matches!(result.unwrap_err(), ConfigError::ValueOutOfRange(_)));
}

#[test]
fn test_validation_rules() {
    let mut config = IntelligenceConfig::default();
    config.metrics.brzycki_max_reps = 37;
    assert!(matches!(config.validate(), Err(ConfigError::ValueOutOfRange(_))));

    let mut config = IntelligenceConfig::default();
    config.plateau.threshold = 1;
    assert!(matches!(config.validate(), Err(ConfigError::ValueOutOfRange(_))));

    let mut config = IntelligenceConfig::default();
    config.plateau.moderate_weeks = config.plateau.severe_weeks;
    assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));

    let mut config = IntelligenceConfig::default();
    config.deload.summary_weeks = 3;
    assert!(matches!(config.validate(), Err(ConfigError::ValueOutOfRange(_))));

    let mut config = IntelligenceConfig::default();
    config.deload.overreach_drop_ratio = 1.1;
    assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));

    let mut config = IntelligenceConfig::default();
    config.starting_weight.rounding_increment_kg = 0.0;
    assert!(matches!(config.validate(), Err(ConfigError::ValueOutOfRange(_))));

    let mut config = IntelligenceConfig::default();
    config.starting_weight.advanced_multiplier = 0.4;
    assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));
}

#[test]
fn test_config_round_trips_through_json() {
    let mut config = IntelligenceConfig::default();
    config.plateau.threshold = 5;
    let json = serde_json::to_string(&config).unwrap();
    let parsed: IntelligenceConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.plateau.threshold, 5);
    parsed.validate().unwrap();
}

#[test]
fn test_config_error_converts_to_app_error() {
    let error: AppError =
        ConfigError::InvalidRange("plateau moderate_weeks must be < severe_weeks").into();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
    assert!(error.message.contains("moderate_weeks"));
}
