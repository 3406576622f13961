// ABOUTME: Criterion benchmarks for the training analytics engine
// ABOUTME: Measures 1RM estimation, per-exercise analysis, deload, muscle volume, and full reports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the training analytics engine.
//!
//! Histories range from two months to two years of four sessions per week.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

mod common;

use common::fixtures::{bench_today, generate_history, HistoryLength};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pierre_strength::intelligence::{
    detect_all_plateaus, estimate_one_rep_max, recommend_deload, suggest_starting_weight,
    ExerciseCatalog, MuscleVolumeAnalyzer, OneRepMaxAlgorithm, StrengthMetrics,
};
use pierre_strength::TrainingAnalytics;

const LENGTHS: [HistoryLength; 3] = [
    HistoryLength::Short,
    HistoryLength::Medium,
    HistoryLength::Long,
];

/// Benchmark the one-rep-max formulas
fn bench_one_rep_max(c: &mut Criterion) {
    let mut group = c.benchmark_group("one_rep_max");

    group.bench_function("brzycki_default", |b| {
        b.iter(|| estimate_one_rep_max(black_box(100.0), black_box(8)));
    });

    for algorithm in [
        OneRepMaxAlgorithm::default(),
        OneRepMaxAlgorithm::Epley,
        OneRepMaxAlgorithm::Lombardi,
    ] {
        group.bench_with_input(
            BenchmarkId::new("rep_max_table", format!("{algorithm:?}")),
            &algorithm,
            |b, algorithm| b.iter(|| algorithm.rep_max_table(black_box(140.0), 12)),
        );
    }

    group.finish();
}

/// Benchmark per-exercise metrics across history lengths
fn bench_exercise_metrics(c: &mut Criterion) {
    let mut group = c.benchmark_group("exercise_metrics");
    let metrics = StrengthMetrics::default();

    for length in LENGTHS {
        let history = generate_history(length);
        group.throughput(Throughput::Elements(history.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("personal_record", length.label()),
            &history,
            |b, history| b.iter(|| metrics.personal_record("Bench Press", black_box(history))),
        );
        group.bench_with_input(
            BenchmarkId::new("exercise_history", length.label()),
            &history,
            |b, history| b.iter(|| metrics.exercise_history("Squat", black_box(history))),
        );
    }

    group.finish();
}

/// Benchmark the history-wide analyzers
fn bench_history_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("history_analysis");
    let today = bench_today();
    let catalog = ExerciseCatalog::bundled();
    let volume = MuscleVolumeAnalyzer::default();

    for length in LENGTHS {
        let history = generate_history(length);
        group.throughput(Throughput::Elements(history.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("plateaus", length.label()),
            &history,
            |b, history| b.iter(|| detect_all_plateaus(black_box(history), today)),
        );
        group.bench_with_input(
            BenchmarkId::new("deload", length.label()),
            &history,
            |b, history| b.iter(|| recommend_deload(black_box(history), today)),
        );
        group.bench_with_input(
            BenchmarkId::new("muscle_volume", length.label()),
            &history,
            |b, history| b.iter(|| volume.compare_weeks(black_box(history), &catalog, today)),
        );
        group.bench_with_input(
            BenchmarkId::new("starting_weight_similar", length.label()),
            &history,
            |b, history| {
                b.iter(|| {
                    suggest_starting_weight(
                        "Dumbbell Bench Press",
                        black_box(history),
                        &catalog,
                        &[],
                        None,
                    )
                });
            },
        );
    }

    group.finish();
}

/// Benchmark the full facade report
fn bench_full_report(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_report");
    group.sample_size(30);
    let analytics = TrainingAnalytics::default();
    let today = bench_today();

    for length in LENGTHS {
        let history = generate_history(length);
        group.throughput(Throughput::Elements(history.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("report", length.label()),
            &history,
            |b, history| b.iter(|| analytics.report_at(black_box(history), today)),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_one_rep_max,
    bench_exercise_metrics,
    bench_history_analysis,
    bench_full_report,
);
criterion_main!(benches);
