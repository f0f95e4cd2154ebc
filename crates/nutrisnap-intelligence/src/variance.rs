// ABOUTME: Calorie variance and color classification against a daily target
// ABOUTME: Asymmetric under/over thresholds plus macro calorie percentage breakdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Calorie/Macro Variance Engine
//!
//! Classification is deliberately asymmetric: under-eating is only flagged
//! past 20% below target, over-eating is flagged past 10% above it.

use crate::units::round_to;
use nutrisnap_core::constants::energy::{KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN};
use nutrisnap_core::constants::variance::DEFAULT_UNDER_THRESHOLD_PCT;
use nutrisnap_core::models::{DailySummary, MacroPercentages};
use serde::{Deserialize, Serialize};

/// Direction of a calorie variance
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum VarianceStatus {
    /// Actual below target
    Under,
    /// Actual above target
    Over,
    /// Actual exactly equal to target
    OnTarget,
}

impl VarianceStatus {
    /// Wire name of the status
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Under => "under",
            Self::Over => "over",
            Self::OnTarget => "on_target",
        }
    }
}

/// Three-bucket visual signal for a day's intake
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CalorieColor {
    /// Within tolerance
    Good,
    /// Slightly over, or far under
    Caution,
    /// Far over
    Alert,
}

impl CalorieColor {
    /// Wire name of the color
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Caution => "caution",
            Self::Alert => "alert",
        }
    }
}

/// Result of comparing actual calories against a target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalorieVariance {
    /// `actual - target`
    pub variance: f64,
    /// Variance as a percent of target, one decimal; 0 when target <= 0
    pub variance_pct: f64,
    /// Strictly under target
    pub is_under: bool,
    /// Strictly over target
    pub is_over: bool,
    /// Direction of the variance
    pub status: VarianceStatus,
}

/// Compare actual calories against a target
#[must_use]
pub fn calorie_variance(actual: f64, target: f64) -> CalorieVariance {
    let variance = actual - target;
    let variance_pct = if target > 0.0 {
        round_to(variance / target * 100.0, 1)
    } else {
        0.0
    };

    let status = if variance < 0.0 {
        VarianceStatus::Under
    } else if variance > 0.0 {
        VarianceStatus::Over
    } else {
        VarianceStatus::OnTarget
    };

    CalorieVariance {
        variance,
        variance_pct,
        is_under: status == VarianceStatus::Under,
        is_over: status == VarianceStatus::Over,
        status,
    }
}

/// Variance of a daily summary against the target recorded on it
#[must_use]
pub fn summary_variance(summary: &DailySummary) -> CalorieVariance {
    calorie_variance(summary.total_calories, summary.calorie_target)
}

/// Classify intake with the default under threshold of 20%
#[must_use]
pub fn calorie_color(actual: f64, target: f64, over_threshold_pct: f64) -> CalorieColor {
    calorie_color_with_thresholds(actual, target, over_threshold_pct, DEFAULT_UNDER_THRESHOLD_PCT)
}

/// Classify intake against explicit over and under thresholds
///
/// | Condition                         | Color   |
/// |-----------------------------------|---------|
/// | under by more than `under_pct`    | Caution |
/// | under by at most `under_pct`      | Good    |
/// | exactly on target                 | Good    |
/// | over by at most `over_pct`        | Caution |
/// | over by more than `over_pct`      | Alert   |
///
/// Percentages are compared after rounding to one decimal, as reported by
/// [`calorie_variance`]. A non-positive target has nothing to compare against
/// and is `Good`.
#[must_use]
pub fn calorie_color_with_thresholds(
    actual: f64,
    target: f64,
    over_pct: f64,
    under_pct: f64,
) -> CalorieColor {
    if target <= 0.0 {
        return CalorieColor::Good;
    }

    let variance = calorie_variance(actual, target);
    let pct = variance.variance_pct.abs();
    match variance.status {
        VarianceStatus::Under if pct > under_pct => CalorieColor::Caution,
        VarianceStatus::Over if pct > over_pct => CalorieColor::Alert,
        VarianceStatus::Over => CalorieColor::Caution,
        VarianceStatus::Under | VarianceStatus::OnTarget => CalorieColor::Good,
    }
}

/// Share of macro calories contributed by each macronutrient
///
/// Independent rounding means the three values need not sum to exactly 100.
#[must_use]
pub fn macro_percentages(protein_g: f64, carbs_g: f64, fat_g: f64) -> MacroPercentages {
    let protein_kcal = protein_g * KCAL_PER_G_PROTEIN;
    let carbs_kcal = carbs_g * KCAL_PER_G_CARBS;
    let fat_kcal = fat_g * KCAL_PER_G_FAT;
    let total = protein_kcal + carbs_kcal + fat_kcal;

    if total <= 0.0 {
        return MacroPercentages::default();
    }

    MacroPercentages {
        protein_pct: round_to(protein_kcal / total * 100.0, 1),
        carbs_pct: round_to(carbs_kcal / total * 100.0, 1),
        fat_pct: round_to(fat_kcal / total * 100.0, 1),
    }
}

/// Percent of the daily target consumed by a single entry, one decimal
#[must_use]
pub fn entry_share_of_target(entry_calories: f64, daily_target: f64) -> f64 {
    if daily_target <= 0.0 {
        return 0.0;
    }
    round_to(entry_calories / daily_target * 100.0, 1)
}
