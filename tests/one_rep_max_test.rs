// ABOUTME: Tests for one-rep-max estimation algorithms and rep-max tables
// ABOUTME: Covers the Brzycki clamp, monotonicity, algorithm parsing, and inverse estimates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

mod helpers;

use helpers::fixtures::assert_close;
use pierre_strength::errors::ErrorCode;
use pierre_strength::intelligence::algorithms::{OneRepMaxAlgorithm, BRZYCKI_DEFAULT_MAX_REPS};
use pierre_strength::intelligence::estimate_one_rep_max;

#[test]
fn test_single_rep_returns_weight_unchanged() {
    for weight in [2.5, 20.0, 60.0, 137.5, 300.0] {
        assert_eq!(estimate_one_rep_max(weight, 1), weight);
        assert_eq!(OneRepMaxAlgorithm::Epley.estimate(weight, 1), weight);
        assert_eq!(OneRepMaxAlgorithm::Lombardi.estimate(weight, 1), weight);
    }
}

#[test]
fn test_brzycki_known_values() {
    // 100 kg x 5 -> 100 / (1.0278 - 0.139) = 112.51
    assert_close(estimate_one_rep_max(100.0, 5), 112.51, 0.01);
    // 60 kg x 10 -> 60 / 0.7498 = 80.02
    assert_close(estimate_one_rep_max(60.0, 10), 80.02, 0.01);
}

#[test]
fn test_brzycki_clamps_reps_above_twelve() {
    let at_twelve = estimate_one_rep_max(50.0, 12);
    assert_eq!(estimate_one_rep_max(50.0, 13), at_twelve);
    assert_eq!(estimate_one_rep_max(50.0, 40), at_twelve);
    assert!(estimate_one_rep_max(50.0, 40).is_finite());
    assert!(estimate_one_rep_max(50.0, 40) > 0.0);
}

#[test]
fn test_estimate_is_monotonic_in_weight_and_reps() {
    for reps in 1..=10 {
        let mut previous = 0.0;
        for step in 1..=40 {
            let estimate = estimate_one_rep_max(f64::from(step) * 2.5, reps);
            assert!(estimate > previous, "not increasing in weight at {reps} reps");
            previous = estimate;
        }
    }
    for weight in [20.0, 80.0, 150.0] {
        let mut previous = 0.0;
        for reps in 1..12 {
            let estimate = estimate_one_rep_max(weight, reps);
            assert!(estimate > previous, "not increasing in reps at {weight} kg");
            previous = estimate;
        }
    }
}

#[test]
fn test_invalid_inputs_estimate_zero() {
    assert_eq!(estimate_one_rep_max(0.0, 5), 0.0);
    assert_eq!(estimate_one_rep_max(-10.0, 5), 0.0);
    assert_eq!(estimate_one_rep_max(100.0, 0), 0.0);
}

#[test]
fn test_epley_and_lombardi_formulas() {
    assert_close(OneRepMaxAlgorithm::Epley.estimate(100.0, 10), 133.33, 0.01);
    assert_close(OneRepMaxAlgorithm::Lombardi.estimate(100.0, 10), 125.89, 0.01);
}

#[test]
fn test_weight_for_reps_inverts_estimate() {
    for algorithm in [
        OneRepMaxAlgorithm::default(),
        OneRepMaxAlgorithm::Epley,
        OneRepMaxAlgorithm::Lombardi,
    ] {
        let one_rep_max = algorithm.estimate(90.0, 6);
        assert_close(algorithm.weight_for_reps(one_rep_max, 6), 90.0, 1e-9);
    }
}

#[test]
fn test_rep_max_table_descends_from_one_rep_max() {
    let table = OneRepMaxAlgorithm::default().rep_max_table(120.0, BRZYCKI_DEFAULT_MAX_REPS);
    assert_eq!(table.len(), 12);
    assert_eq!(table[0].reps, 1);
    assert_eq!(table[0].weight_kg, 120.0);
    assert_close(table[0].percent_of_max, 100.0, 1e-9);
    assert!(table.windows(2).all(|pair| pair[1].weight_kg < pair[0].weight_kg));

    assert!(OneRepMaxAlgorithm::default().rep_max_table(0.0, 10).is_empty());
}

#[test]
fn test_algorithm_parsing_and_display() {
    assert_eq!(
        "Brzycki".parse::<OneRepMaxAlgorithm>().unwrap(),
        OneRepMaxAlgorithm::default()
    );
    assert_eq!(
        " epley ".parse::<OneRepMaxAlgorithm>().unwrap(),
        OneRepMaxAlgorithm::Epley
    );
    assert_eq!(OneRepMaxAlgorithm::Lombardi.to_string(), "lombardi");

    let err = "wathan".parse::<OneRepMaxAlgorithm>().unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}
