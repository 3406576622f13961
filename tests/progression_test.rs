// ABOUTME: Tests for period-over-period progression and status classification
// ABOUTME: Covers window splitting, missing sides, the 0.5 kg band, and previous-session comparison
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

mod helpers;

use chrono::Duration;
use helpers::fixtures::{assert_close, date, lift, single_set_session};
use pierre_strength::intelligence::config::intelligence::{MetricsConfig, ProgressionConfig};
use pierre_strength::intelligence::{
    classify_progression, ProgressionAnalyzer, ProgressionStatus, TrendDirection,
};

#[test]
fn test_classify_progression_band() {
    assert_eq!(classify_progression(100.6, Some(100.0)), ProgressionStatus::Improved);
    assert_eq!(classify_progression(100.5, Some(100.0)), ProgressionStatus::Same);
    assert_eq!(classify_progression(99.5, Some(100.0)), ProgressionStatus::Same);
    assert_eq!(classify_progression(99.4, Some(100.0)), ProgressionStatus::Declined);
    assert_eq!(classify_progression(80.0, None), ProgressionStatus::FirstTime);
}

#[test]
fn test_period_progress_splits_at_cutoff() {
    let today = date(2025, 3, 31);
    let history = vec![
        single_set_session("Squat", today - Duration::days(60), 100.0, 1),
        single_set_session("Squat", today - Duration::days(40), 110.0, 1),
        single_set_session("Squat", today - Duration::days(20), 115.0, 1),
        single_set_session("Squat", today - Duration::days(5), 120.0, 1),
    ];

    let progress = ProgressionAnalyzer::default().period_progress("squat", &history, 30, today);
    assert_eq!(progress.current_one_rep_max, Some(120.0));
    assert_eq!(progress.previous_one_rep_max, Some(110.0));
    assert_eq!(progress.change, 10.0);
    assert_close(progress.percent_change, 9.0909, 1e-3);
    assert_eq!(progress.session_count, 2);
    assert_eq!(progress.trend.direction, TrendDirection::Increasing);
}

#[test]
fn test_period_progress_cutoff_day_belongs_to_window() {
    let today = date(2025, 3, 31);
    let history = vec![
        single_set_session("Squat", today - Duration::days(31), 100.0, 1),
        single_set_session("Squat", today - Duration::days(30), 105.0, 1),
    ];
    let progress = ProgressionAnalyzer::default().period_progress("Squat", &history, 30, today);
    assert_eq!(progress.current_one_rep_max, Some(105.0));
    assert_eq!(progress.previous_one_rep_max, Some(100.0));
}

#[test]
fn test_period_progress_missing_side_defaults_to_zero_change() {
    let today = date(2025, 3, 31);
    let recent_only = vec![single_set_session("Squat", today - Duration::days(3), 120.0, 1)];
    let progress = ProgressionAnalyzer::default().period_progress("Squat", &recent_only, 30, today);
    assert_eq!(progress.current_one_rep_max, Some(120.0));
    assert_eq!(progress.previous_one_rep_max, None);
    assert_eq!(progress.change, 0.0);
    assert_eq!(progress.percent_change, 0.0);

    let old_only = vec![single_set_session("Squat", today - Duration::days(90), 120.0, 1)];
    let progress = ProgressionAnalyzer::default().period_progress("Squat", &old_only, 30, today);
    assert_eq!(progress.current_one_rep_max, None);
    assert_eq!(progress.previous_one_rep_max, Some(120.0));
    assert_eq!(progress.session_count, 0);
    assert_eq!(progress.change, 0.0);
}

#[test]
fn test_default_period_uses_config() {
    let today = date(2025, 3, 31);
    let history = vec![
        single_set_session("Squat", today - Duration::days(10), 100.0, 1),
        single_set_session("Squat", today - Duration::days(2), 104.0, 1),
    ];
    let analyzer = ProgressionAnalyzer::with_config(
        MetricsConfig::default(),
        ProgressionConfig {
            default_period_days: 7,
            ..ProgressionConfig::default()
        },
    );
    let progress = analyzer.default_period_progress("Squat", &history, today);
    assert_eq!(progress.period_days, 7);
    assert_eq!(progress.previous_one_rep_max, Some(100.0));
    assert_eq!(progress.change, 4.0);
}

#[test]
fn test_compare_to_previous_occurrence() {
    let history = vec![
        single_set_session("Bench Press", date(2025, 3, 1), 95.0, 1),
        single_set_session("Bench Press", date(2025, 3, 5), 100.0, 1),
        single_set_session("Bench Press", date(2025, 3, 12), 130.0, 1),
    ];
    let analyzer = ProgressionAnalyzer::default();

    let improved = analyzer
        .compare_to_previous(&lift("bench press", &[(102.5, 1)]), date(2025, 3, 10), &history)
        .unwrap();
    assert_eq!(improved.status, ProgressionStatus::Improved);
    assert_eq!(improved.previous_one_rep_max, Some(100.0));
    assert_eq!(improved.previous_date, Some(date(2025, 3, 5)));
    assert_eq!(improved.difference, Some(2.5));

    let same = analyzer
        .compare_to_previous(&lift("Bench Press", &[(100.0, 1)]), date(2025, 3, 10), &history)
        .unwrap();
    assert_eq!(same.status, ProgressionStatus::Same);

    let first = analyzer
        .compare_to_previous(&lift("Bench Press", &[(60.0, 5)]), date(2025, 2, 1), &history)
        .unwrap();
    assert_eq!(first.status, ProgressionStatus::FirstTime);
    assert_eq!(first.difference, None);

    let empty = lift("Bench Press", &[]);
    assert!(analyzer
        .compare_to_previous(&empty, date(2025, 3, 10), &history)
        .is_none());
}

#[test]
fn test_unbounded_period_covers_all_history() {
    let today = date(2025, 3, 31);
    let history = vec![
        single_set_session("Squat", today - Duration::days(400), 100.0, 1),
        single_set_session("Squat", today - Duration::days(5), 120.0, 1),
    ];

    // A period reaching past the earliest representable date saturates instead of overflowing
    let progress =
        ProgressionAnalyzer::default().period_progress("Squat", &history, u32::MAX, today);
    assert_eq!(progress.period_days, u32::MAX);
    assert_eq!(progress.current_one_rep_max, Some(120.0));
    assert_eq!(progress.previous_one_rep_max, None);
    assert_eq!(progress.change, 0.0);
    assert_eq!(progress.session_count, 2);
}
