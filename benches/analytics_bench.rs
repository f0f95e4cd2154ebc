// ABOUTME: Criterion benchmarks for nutrition analytics and exports
// ABOUTME: Measures daily aggregation, trends, streaks, digests, and export rendering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for nutrition analytics.
//!
//! Measures the per-mutation summary rebuild, trend and streak computation
//! over long histories, and export rendering for each format.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

mod common;

use chrono::Duration;
use common::fixtures::{
    bench_profile, generate_entries, generate_summaries, generated_at, start_date, HistoryLength,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use nutrisnap::config::AnalyticsConfig;
use nutrisnap::digest::compose_weekly_digest;
use nutrisnap::intelligence::{
    aggregate_daily, calorie_trend, longest_streak, rolling_average, streak, summarize_days,
};
use nutrisnap::reports::{export, ExportFormat, ExportRequest};
use uuid::Uuid;

/// Benchmark rebuilding one day's summary, the work done after every mutation
fn bench_daily_aggregation(c: &mut Criterion) {
    let user = Uuid::new_v4();
    let entries = generate_entries(user, 1);
    let day = start_date();

    c.bench_function("aggregate_daily_single_day", |b| {
        b.iter(|| aggregate_daily(black_box(user), black_box(day), 2000.0, black_box(&entries)));
    });

    let mut group = c.benchmark_group("summarize_days");
    for length in [HistoryLength::Month, HistoryLength::Year] {
        let history = generate_entries(user, length.days());
        group.throughput(Throughput::Elements(history.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(length.days()),
            &history,
            |b, history| b.iter(|| summarize_days(user, 2000.0, black_box(history))),
        );
    }
    group.finish();
}

/// Benchmark rolling averages, trend lines, and streaks
fn bench_trends(c: &mut Criterion) {
    let user = Uuid::new_v4();
    let summaries = generate_summaries(user, HistoryLength::Year.days());
    let calories: Vec<f64> = summaries.iter().map(|s| s.total_calories).collect();
    let dates: Vec<_> = summaries.iter().map(|s| s.summary_date).collect();
    let today = start_date() + Duration::days(364);

    let mut group = c.benchmark_group("trends");
    for window in [7_usize, 30] {
        group.bench_with_input(
            BenchmarkId::new("rolling_average", window),
            &window,
            |b, &window| b.iter(|| rolling_average(black_box(&calories), window)),
        );
    }
    group.bench_function("calorie_trend_year", |b| {
        b.iter(|| calorie_trend(black_box(&summaries), 7));
    });
    group.bench_function("streak_year", |b| {
        b.iter(|| streak(black_box(&dates), today));
    });
    group.bench_function("longest_streak_year", |b| {
        b.iter(|| longest_streak(black_box(&dates)));
    });
    group.finish();
}

/// Benchmark weekly digest composition over a year of summaries
fn bench_digest(c: &mut Criterion) {
    let user = Uuid::new_v4();
    let summaries = generate_summaries(user, HistoryLength::Year.days());
    let week = start_date() + Duration::days(140);

    c.bench_function("compose_weekly_digest", |b| {
        b.iter(|| compose_weekly_digest(user, black_box(week), black_box(&summaries), generated_at()));
    });
}

/// Benchmark every export format over a month and a year
fn bench_exports(c: &mut Criterion) {
    let user = Uuid::new_v4();
    let profile = bench_profile(user);
    let config = AnalyticsConfig::default();

    let mut group = c.benchmark_group("export");
    group.sample_size(20);
    for length in [HistoryLength::Month, HistoryLength::Year] {
        let entries = generate_entries(user, length.days());
        let summaries = summarize_days(user, 2000.0, &entries);
        let request = ExportRequest {
            profile: &profile,
            start: start_date(),
            end: start_date() + Duration::days(365),
            entries: &entries,
            summaries: &summaries,
            generated_at: generated_at(),
        };
        for format in ExportFormat::ALL {
            group.bench_with_input(
                BenchmarkId::new(format.as_str(), length.days()),
                &request,
                |b, request| b.iter(|| export(format, black_box(request), &config)),
            );
        }
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_daily_aggregation,
    bench_trends,
    bench_digest,
    bench_exports
);
criterion_main!(benches);
