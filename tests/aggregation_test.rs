// ABOUTME: Integration tests for daily aggregation, rolling averages, streaks, and weekly rollups
// ABOUTME: Covers idempotent recomputation, soft deletes, lapsed streaks, and empty windows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::{Duration, Utc};
use common::{calorie_entry, d, entry, summary, t};
use nutrisnap::intelligence::{
    aggregate_daily, calorie_trend, completeness_score, longest_streak, rolling_average, streak,
    summarize_days, weekly_aggregate,
};
use nutrisnap::models::{MacroOverride, MealType};
use uuid::Uuid;

// ============================================================================
// Daily aggregation
// ============================================================================

#[test]
fn test_aggregate_daily_sums_final_values() {
    let user = Uuid::new_v4();
    let day = d(2025, 3, 3);
    let mut lunch = entry(user, day, t(12, 30), MealType::Lunch, 600.0, 40.0, 60.0, 20.0);
    lunch.apply_override(
        MacroOverride {
            calories: Some(650.0),
            ..MacroOverride::default()
        },
        Utc::now(),
    );
    let entries = vec![
        entry(user, day, t(8, 0), MealType::Breakfast, 400.0, 20.0, 50.0, 10.0),
        lunch,
        entry(user, day, t(16, 0), MealType::Snack, 150.0, 5.0, 20.0, 5.0),
    ];

    let s = aggregate_daily(user, day, 2000.0, &entries);

    assert!((s.total_calories - 1200.0).abs() < 1e-9);
    assert!((s.total_protein_g - 65.0).abs() < 1e-9);
    assert!((s.total_carbs_g - 130.0).abs() < 1e-9);
    assert!((s.total_fat_g - 35.0).abs() < 1e-9);
    assert_eq!(s.total_entries, 3);
    assert!(s.has_breakfast && s.has_lunch && s.has_snacks);
    assert!(!s.has_dinner);
    assert!((s.completeness_score - 2.0 / 3.0).abs() < 1e-9);
    assert!((s.calorie_target - 2000.0).abs() < f64::EPSILON);
}

#[test]
fn test_aggregate_daily_skips_deleted_and_foreign_entries() {
    let user = Uuid::new_v4();
    let day = d(2025, 3, 3);
    let mut deleted = calorie_entry(user, day, MealType::Dinner, 900.0);
    deleted.soft_delete(Utc::now());
    let entries = vec![
        calorie_entry(user, day, MealType::Lunch, 500.0),
        deleted,
        calorie_entry(Uuid::new_v4(), day, MealType::Lunch, 700.0),
        calorie_entry(user, d(2025, 3, 4), MealType::Lunch, 800.0),
    ];

    let s = aggregate_daily(user, day, 2000.0, &entries);
    assert!((s.total_calories - 500.0).abs() < 1e-9);
    assert_eq!(s.total_entries, 1);
    assert!(!s.has_dinner);
}

#[test]
fn test_aggregate_daily_missing_macros_count_as_zero() {
    let user = Uuid::new_v4();
    let day = d(2025, 3, 3);
    let mut e = calorie_entry(user, day, MealType::Lunch, 500.0);
    e.estimated.protein_g = None;
    e.apply_override(MacroOverride::default(), Utc::now());

    let s = aggregate_daily(user, day, 2000.0, &[e]);
    assert!(s.total_protein_g.abs() < f64::EPSILON);
}

#[test]
fn test_aggregate_daily_is_idempotent_and_order_independent() {
    let user = Uuid::new_v4();
    let day = d(2025, 3, 3);
    let entries: Vec<_> = (0..20)
        .map(|i| {
            entry(
                user,
                day,
                t(6 + i % 12, 0),
                MealType::Snack,
                0.1 + f64::from(i) * 33.3,
                1.1,
                2.2,
                0.7,
            )
        })
        .collect();
    let mut reversed = entries.clone();
    reversed.reverse();

    let first = aggregate_daily(user, day, 2000.0, &entries);
    let second = aggregate_daily(user, day, 2000.0, &entries);
    let third = aggregate_daily(user, day, 2000.0, &reversed);

    assert_eq!(first, second);
    assert_eq!(first.total_calories.to_bits(), third.total_calories.to_bits());
}

#[test]
fn test_empty_day_is_zero_summary() {
    let s = aggregate_daily(Uuid::new_v4(), d(2025, 3, 3), 2000.0, &[]);
    assert_eq!(s.total_entries, 0);
    assert!(s.total_calories.abs() < f64::EPSILON);
    assert!(s.completeness_score.abs() < f64::EPSILON);
}

#[test]
fn test_completeness_ignores_snacks() {
    assert!((completeness_score(true, true, true) - 1.0).abs() < f64::EPSILON);
    assert!(completeness_score(false, false, false).abs() < f64::EPSILON);
    assert!((completeness_score(true, false, false) - 1.0 / 3.0).abs() < 1e-9);
}

#[test]
fn test_summarize_days_one_summary_per_logged_day() {
    let user = Uuid::new_v4();
    let mut deleted = calorie_entry(user, d(2025, 3, 5), MealType::Lunch, 300.0);
    deleted.soft_delete(Utc::now());
    let entries = vec![
        calorie_entry(user, d(2025, 3, 4), MealType::Dinner, 700.0),
        calorie_entry(user, d(2025, 3, 3), MealType::Lunch, 500.0),
        calorie_entry(user, d(2025, 3, 3), MealType::Dinner, 600.0),
        deleted,
    ];

    let summaries = summarize_days(user, 1800.0, &entries);
    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].summary_date, d(2025, 3, 3));
    assert!((summaries[0].total_calories - 1100.0).abs() < 1e-9);
    assert_eq!(summaries[1].summary_date, d(2025, 3, 4));
}

// ============================================================================
// Rolling averages
// ============================================================================

#[test]
fn test_rolling_average_expanding_window() {
    assert_eq!(rolling_average(&[10.0, 20.0, 30.0], 7), vec![10.0, 15.0, 20.0]);
}

#[test]
fn test_rolling_average_full_window_slides() {
    let values = [1.0, 2.0, 3.0, 4.0, 5.0];
    assert_eq!(rolling_average(&values, 2), vec![1.0, 1.5, 2.5, 3.5, 4.5]);
}

#[test]
fn test_rolling_average_rounds_and_handles_edges() {
    assert_eq!(rolling_average(&[1.0, 2.0, 2.0], 3), vec![1.0, 1.5, 1.7]);
    assert!(rolling_average(&[], 7).is_empty());
    assert_eq!(rolling_average(&[5.0, 7.0], 0), vec![5.0, 7.0]);
}

#[test]
fn test_calorie_trend_sorts_by_date() {
    let user = Uuid::new_v4();
    let summaries = vec![
        summary(user, d(2025, 3, 5), 3000.0, 2000.0),
        summary(user, d(2025, 3, 3), 1000.0, 2000.0),
        summary(user, d(2025, 3, 4), 2000.0, 2000.0),
    ];

    let trend = calorie_trend(&summaries, 7);
    let dates: Vec<_> = trend.iter().map(|p| p.date).collect();
    assert_eq!(dates, vec![d(2025, 3, 3), d(2025, 3, 4), d(2025, 3, 5)]);
    assert!((trend[2].rolling_avg - 2000.0).abs() < f64::EPSILON);
}

// ============================================================================
// Streaks
// ============================================================================

#[test]
fn test_streak_counts_back_from_today() {
    let today = d(2025, 3, 10);
    let dates = [today, today - Duration::days(1), today - Duration::days(2)];
    assert_eq!(streak(&dates, today), 3);
}

#[test]
fn test_streak_anchored_yesterday() {
    let today = d(2025, 3, 10);
    let dates = [today - Duration::days(1), today - Duration::days(2)];
    assert_eq!(streak(&dates, today), 2);
}

#[test]
fn test_lapsed_streak_is_zero() {
    let today = d(2025, 3, 10);
    assert_eq!(streak(&[today - Duration::days(5)], today), 0);
    assert_eq!(streak(&[], today), 0);
}

#[test]
fn test_streak_deduplicates_and_stops_at_gap() {
    let today = d(2025, 3, 10);
    let dates = [
        today,
        today,
        today - Duration::days(1),
        today - Duration::days(1),
        today - Duration::days(3),
    ];
    assert_eq!(streak(&dates, today), 2);
}

#[test]
fn test_longest_streak_finds_historical_run() {
    let dates = [
        d(2025, 1, 1),
        d(2025, 1, 2),
        d(2025, 1, 3),
        d(2025, 1, 4),
        d(2025, 2, 1),
        d(2025, 2, 2),
    ];
    assert_eq!(longest_streak(&dates), 4);
    assert_eq!(longest_streak(&[]), 0);
}

// ============================================================================
// Weekly aggregate
// ============================================================================

#[test]
fn test_weekly_aggregate_counts_only_present_days() {
    let user = Uuid::new_v4();
    let summaries = vec![
        summary(user, d(2025, 3, 3), 1800.0, 2000.0),
        summary(user, d(2025, 3, 4), 2200.0, 2000.0),
        summary(user, d(2025, 3, 5), 2000.0, 2000.0),
    ];

    let agg = weekly_aggregate(&summaries);
    assert_eq!(agg.days_logged, 3);
    assert!((agg.total_calories - 6000.0).abs() < 1e-9);
    assert!((agg.avg_calories - 2000.0).abs() < 1e-9);
    assert!(agg.avg_variance.abs() < 1e-9);
    assert_eq!(agg.days_under, 1);
    assert_eq!(agg.days_over, 1);
    assert!((agg.total_protein_g - 300.0).abs() < 1e-9);
}

#[test]
fn test_weekly_aggregate_empty_window() {
    let agg = weekly_aggregate(&[]);
    assert_eq!(agg.days_logged, 0);
    assert!(agg.avg_calories.abs() < f64::EPSILON);
    assert!(agg.avg_target.abs() < f64::EPSILON);
}
