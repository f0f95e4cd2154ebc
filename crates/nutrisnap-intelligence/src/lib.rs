// ABOUTME: Calorie and macro analytics engines for the nutrisnap nutrition tracker
// ABOUTME: Pure functions over entries and summaries; no I/O and no shared state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutrisnap Intelligence
//!
//! Deterministic numeric transformations that turn raw logged entries into
//! daily summaries, trend statistics, streaks, and variance classifications.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>

/// Daily aggregation, rolling averages, streaks, and weekly rollups
pub mod aggregation;

/// BMR, TDEE, and goal calorie targets
pub mod tdee;

/// Unit conversions, calendar bounds, and relative date labels
pub mod units;

/// Calorie variance, color classification, and macro percentages
pub mod variance;

pub use aggregation::{
    aggregate_daily, calorie_trend, completeness_score, longest_streak, rolling_average, streak,
    summarize_days, weekly_aggregate, TrendPoint, WeeklyAggregate,
};
pub use tdee::{
    calculate_tdee_profile, compute_bmr, compute_targets, compute_tdee, ActivityLevel, Gender,
    Goal, GoalTargets, TdeeParams, TdeeResult,
};
pub use variance::{
    calorie_color, calorie_color_with_thresholds, calorie_variance, entry_share_of_target,
    macro_percentages, summary_variance, CalorieColor, CalorieVariance, VarianceStatus,
};
