// ABOUTME: Energy expenditure calculator using the Mifflin-St Jeor equation
// ABOUTME: BMR, activity-adjusted TDEE, and goal-based daily calorie targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Energy Expenditure Calculator
//!
//! Inputs are assumed range-checked by the caller (weight 30-300 kg, height
//! 100-250 cm, age 15-100); see the application crate's `validation` module.
//! The calculator itself has no error path.
//!
//! # Reference
//!
//! Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241

use nutrisnap_core::constants::goal_offsets;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Mifflin-St Jeor weight coefficient
const MSJ_WEIGHT_COEF: f64 = 10.0;
/// Mifflin-St Jeor height coefficient
const MSJ_HEIGHT_COEF: f64 = 6.25;
/// Mifflin-St Jeor age coefficient
const MSJ_AGE_COEF: f64 = -5.0;
/// Mifflin-St Jeor male constant
const MSJ_MALE_CONSTANT: f64 = 5.0;
/// Mifflin-St Jeor female constant
const MSJ_FEMALE_CONSTANT: f64 = -161.0;

/// Gender for BMR calculations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male constant (+5)
    Male,
    /// Female constant (-161)
    Female,
}

impl Gender {
    /// Only `"male"` (any case) selects the male constant; everything else uses the female one
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        if s.trim().eq_ignore_ascii_case("male") {
            Self::Male
        } else {
            Self::Female
        }
    }
}

/// Activity level for TDEE calculation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise: 1.2
    Sedentary,
    /// Light exercise 1-3 days/week: 1.375
    Light,
    /// Moderate exercise 3-5 days/week: 1.55
    Moderate,
    /// Hard exercise 6-7 days/week: 1.725
    Active,
    /// Physical job or training twice a day: 1.9
    VeryActive,
}

impl ActivityLevel {
    /// TDEE multiplier for this level
    #[must_use]
    pub const fn multiplier(&self) -> f64 {
        match self {
            Self::Sedentary => 1.2,
            Self::Light => 1.375,
            Self::Moderate => 1.55,
            Self::Active => 1.725,
            Self::VeryActive => 1.9,
        }
    }

    /// Parse an activity level, falling back to `Sedentary`
    ///
    /// Unknown levels are not an error: the calculator deliberately uses the
    /// most conservative multiplier rather than rejecting the request.
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "sedentary" => Self::Sedentary,
            "light" | "lightly_active" => Self::Light,
            "moderate" | "moderately_active" => Self::Moderate,
            "active" => Self::Active,
            "very_active" | "extra_active" => Self::VeryActive,
            other => {
                debug!(activity_level = %other, "unknown activity level, using sedentary");
                Self::Sedentary
            }
        }
    }
}

/// Weight goal used to pick a daily calorie target
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    /// TDEE - 750
    AggressiveLoss,
    /// TDEE - 500
    ModerateLoss,
    /// TDEE - 250
    MildLoss,
    /// TDEE
    Maintenance,
    /// TDEE + 250
    MildGain,
    /// TDEE + 500
    ModerateGain,
}

impl Goal {
    /// Every goal, from largest deficit to largest surplus
    pub const ALL: [Self; 6] = [
        Self::AggressiveLoss,
        Self::ModerateLoss,
        Self::MildLoss,
        Self::Maintenance,
        Self::MildGain,
        Self::ModerateGain,
    ];

    /// Human-readable goal name
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::AggressiveLoss => "Aggressive loss",
            Self::ModerateLoss => "Moderate loss",
            Self::MildLoss => "Mild loss",
            Self::Maintenance => "Maintenance",
            Self::MildGain => "Mild gain",
            Self::ModerateGain => "Moderate gain",
        }
    }

    /// Calorie offset applied to TDEE
    #[must_use]
    pub const fn offset(&self) -> i64 {
        match self {
            Self::AggressiveLoss => goal_offsets::AGGRESSIVE_LOSS,
            Self::ModerateLoss => goal_offsets::MODERATE_LOSS,
            Self::MildLoss => goal_offsets::MILD_LOSS,
            Self::Maintenance => 0,
            Self::MildGain => goal_offsets::MILD_GAIN,
            Self::ModerateGain => goal_offsets::MODERATE_GAIN,
        }
    }
}

/// Daily calorie targets for every goal
///
/// No lower bound is applied: a very low TDEE can produce a negative
/// aggressive-loss target, which callers must sanity-check before display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalTargets {
    /// TDEE - 750
    pub aggressive_loss: i64,
    /// TDEE - 500
    pub moderate_loss: i64,
    /// TDEE - 250
    pub mild_loss: i64,
    /// TDEE
    pub maintenance: i64,
    /// TDEE + 250
    pub mild_gain: i64,
    /// TDEE + 500
    pub moderate_gain: i64,
}

impl GoalTargets {
    /// Target for a specific goal
    #[must_use]
    pub const fn for_goal(&self, goal: Goal) -> i64 {
        match goal {
            Goal::AggressiveLoss => self.aggressive_loss,
            Goal::ModerateLoss => self.moderate_loss,
            Goal::MildLoss => self.mild_loss,
            Goal::Maintenance => self.maintenance,
            Goal::MildGain => self.mild_gain,
            Goal::ModerateGain => self.moderate_gain,
        }
    }
}

/// User parameters for the TDEE calculation
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TdeeParams {
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Age in years
    pub age_years: u32,
    /// Gender for the BMR constant
    pub gender: Gender,
    /// Activity level for the TDEE multiplier
    pub activity_level: ActivityLevel,
}

/// Complete TDEE calculation result
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TdeeResult {
    /// Basal Metabolic Rate (kcal/day, rounded)
    pub bmr: i64,
    /// Total Daily Energy Expenditure (kcal/day, rounded)
    pub tdee: i64,
    /// Activity multiplier used
    pub multiplier: f64,
    /// Goal-based targets
    pub targets: GoalTargets,
}

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + constant
/// - Men: +5
/// - Women: -161
///
/// The result is rounded to the nearest whole calorie, ties to even.
#[must_use]
pub fn compute_bmr(weight_kg: f64, height_cm: f64, age_years: u32, gender: Gender) -> i64 {
    let gender_constant = match gender {
        Gender::Male => MSJ_MALE_CONSTANT,
        Gender::Female => MSJ_FEMALE_CONSTANT,
    };

    let bmr = MSJ_AGE_COEF.mul_add(
        f64::from(age_years),
        MSJ_WEIGHT_COEF.mul_add(weight_kg, MSJ_HEIGHT_COEF * height_cm),
    ) + gender_constant;

    bmr.round_ties_even() as i64
}

/// Calculate Total Daily Energy Expenditure
///
/// Formula: TDEE = round(round(BMR) x activity multiplier)
#[must_use]
pub fn compute_tdee(
    weight_kg: f64,
    height_cm: f64,
    age_years: u32,
    gender: Gender,
    activity_level: ActivityLevel,
) -> i64 {
    let bmr = compute_bmr(weight_kg, height_cm, age_years, gender);
    (bmr as f64 * activity_level.multiplier()).round_ties_even() as i64
}

/// Derive goal targets from a TDEE value
#[must_use]
pub const fn compute_targets(tdee: i64) -> GoalTargets {
    GoalTargets {
        aggressive_loss: tdee + Goal::AggressiveLoss.offset(),
        moderate_loss: tdee + Goal::ModerateLoss.offset(),
        mild_loss: tdee + Goal::MildLoss.offset(),
        maintenance: tdee,
        mild_gain: tdee + Goal::MildGain.offset(),
        moderate_gain: tdee + Goal::ModerateGain.offset(),
    }
}

/// Calculate BMR, TDEE, and every goal target in one pass
#[must_use]
pub fn calculate_tdee_profile(params: &TdeeParams) -> TdeeResult {
    let bmr = compute_bmr(
        params.weight_kg,
        params.height_cm,
        params.age_years,
        params.gender,
    );
    let multiplier = params.activity_level.multiplier();
    let tdee = (bmr as f64 * multiplier).round_ties_even() as i64;

    debug!(bmr, tdee, multiplier, "calculated energy expenditure");

    TdeeResult {
        bmr,
        tdee,
        multiplier,
        targets: compute_targets(tdee),
    }
}
