// ABOUTME: Integration tests for calorie variance, color classification, and macro splits
// ABOUTME: Covers on-target handling, asymmetric thresholds, and zero-division guards
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{d, summary};
use nutrisnap::intelligence::{
    calorie_color, calorie_color_with_thresholds, calorie_variance, entry_share_of_target,
    macro_percentages, summary_variance, CalorieColor, VarianceStatus,
};
use uuid::Uuid;

// ============================================================================
// Variance
// ============================================================================

#[test]
fn test_variance_under_target() {
    let v = calorie_variance(1800.0, 2000.0);
    assert!((v.variance - -200.0).abs() < f64::EPSILON);
    assert!((v.variance_pct - -10.0).abs() < f64::EPSILON);
    assert!(v.is_under);
    assert!(!v.is_over);
    assert_eq!(v.status, VarianceStatus::Under);
    assert_eq!(v.status.as_str(), "under");
}

#[test]
fn test_variance_on_target_is_neither_under_nor_over() {
    for target in [1.0, 1500.0, 2000.0, 3250.5] {
        let v = calorie_variance(target, target);
        assert_eq!(v.status, VarianceStatus::OnTarget);
        assert!(v.variance.abs() < f64::EPSILON);
        assert!(!v.is_under && !v.is_over);
    }
}

#[test]
fn test_variance_pct_zero_for_non_positive_target() {
    let v = calorie_variance(500.0, 0.0);
    assert!(v.variance_pct.abs() < f64::EPSILON);
    assert_eq!(v.status, VarianceStatus::Over);
}

#[test]
fn test_variance_pct_rounded_to_one_decimal() {
    let v = calorie_variance(2100.0, 1900.0);
    assert!((v.variance_pct - 10.5).abs() < 1e-9);
}

#[test]
fn test_summary_variance_uses_recorded_target() {
    let s = summary(Uuid::new_v4(), d(2025, 3, 3), 2200.0, 2000.0);
    let v = summary_variance(&s);
    assert_eq!(v.status, VarianceStatus::Over);
    assert!((v.variance_pct - 10.0).abs() < 1e-9);
}

// ============================================================================
// Color classification
// ============================================================================

#[test]
fn test_color_reference_cases() {
    assert_eq!(calorie_color(2300.0, 2000.0, 10.0), CalorieColor::Alert);
    assert_eq!(calorie_color(2100.0, 2000.0, 10.0), CalorieColor::Caution);
    assert_eq!(calorie_color(1500.0, 2000.0, 10.0), CalorieColor::Caution);
    assert_eq!(calorie_color(1900.0, 2000.0, 10.0), CalorieColor::Good);
}

#[test]
fn test_color_boundaries() {
    // Exactly on target
    assert_eq!(calorie_color(2000.0, 2000.0, 10.0), CalorieColor::Good);
    // Exactly 20% under is still good
    assert_eq!(calorie_color(1600.0, 2000.0, 10.0), CalorieColor::Good);
    // Exactly 10% over is caution, not alert
    assert_eq!(calorie_color(2200.0, 2000.0, 10.0), CalorieColor::Caution);
}

#[test]
fn test_color_compares_rounded_percentage() {
    // 10.045% over reports as 10.0%
    assert_eq!(calorie_color(2200.9, 2000.0, 10.0), CalorieColor::Caution);
    // 10.1% over
    assert_eq!(calorie_color(2202.0, 2000.0, 10.0), CalorieColor::Alert);
    // 20.025% under reports as 20.0%
    assert_eq!(calorie_color(1599.5, 2000.0, 10.0), CalorieColor::Good);
}

#[test]
fn test_color_custom_thresholds() {
    assert_eq!(
        calorie_color_with_thresholds(1700.0, 2000.0, 10.0, 10.0),
        CalorieColor::Caution
    );
    assert_eq!(
        calorie_color_with_thresholds(2300.0, 2000.0, 20.0, 20.0),
        CalorieColor::Caution
    );
}

#[test]
fn test_color_without_target_is_good() {
    assert_eq!(calorie_color(2500.0, 0.0, 10.0), CalorieColor::Good);
    assert_eq!(CalorieColor::Alert.as_str(), "alert");
}

// ============================================================================
// Macro percentages
// ============================================================================

#[test]
fn test_macro_percentages_all_zero() {
    let pct = macro_percentages(0.0, 0.0, 0.0);
    assert!(pct.protein_pct.abs() < f64::EPSILON);
    assert!(pct.carbs_pct.abs() < f64::EPSILON);
    assert!(pct.fat_pct.abs() < f64::EPSILON);
}

#[test]
fn test_macro_percentages_split() {
    // 400 + 800 + 450 = 1650 kcal
    let pct = macro_percentages(100.0, 200.0, 50.0);
    assert!((pct.protein_pct - 24.2).abs() < 1e-9);
    assert!((pct.carbs_pct - 48.5).abs() < 1e-9);
    assert!((pct.fat_pct - 27.3).abs() < 1e-9);
}

#[test]
fn test_entry_share_of_target() {
    assert!((entry_share_of_target(500.0, 2000.0) - 25.0).abs() < 1e-9);
    assert!(entry_share_of_target(500.0, 0.0).abs() < f64::EPSILON);
}
