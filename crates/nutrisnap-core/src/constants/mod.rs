// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Energy densities, unit factors, thresholds, and report defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped by domain rather than kept in a single flat list.

/// Energy density of macronutrients (Atwater factors)
pub mod energy {
    /// Kilocalories per gram of protein
    pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
    /// Kilocalories per gram of carbohydrate
    pub const KCAL_PER_G_CARBS: f64 = 4.0;
    /// Kilocalories per gram of fat
    pub const KCAL_PER_G_FAT: f64 = 9.0;
}

/// Unit conversion factors
pub mod units {
    /// Pounds in one kilogram
    pub const LB_PER_KG: f64 = 2.204_62;
    /// Centimeters in one inch
    pub const CM_PER_INCH: f64 = 2.54;
    /// Inches in one foot
    pub const INCHES_PER_FOOT: f64 = 12.0;
}

/// Accepted biometric ranges for target-setting inputs
pub mod biometrics {
    /// Minimum accepted body weight (kg)
    pub const MIN_WEIGHT_KG: f64 = 30.0;
    /// Maximum accepted body weight (kg)
    pub const MAX_WEIGHT_KG: f64 = 300.0;
    /// Minimum accepted height (cm)
    pub const MIN_HEIGHT_CM: f64 = 100.0;
    /// Maximum accepted height (cm)
    pub const MAX_HEIGHT_CM: f64 = 250.0;
    /// Minimum accepted age (years)
    pub const MIN_AGE_YEARS: u32 = 15;
    /// Maximum accepted age (years)
    pub const MAX_AGE_YEARS: u32 = 100;
}

/// Goal calorie offsets applied to TDEE (kcal/day)
pub mod goal_offsets {
    /// Aggressive loss deficit
    pub const AGGRESSIVE_LOSS: i64 = -750;
    /// Moderate loss deficit
    pub const MODERATE_LOSS: i64 = -500;
    /// Mild loss deficit
    pub const MILD_LOSS: i64 = -250;
    /// Mild gain surplus
    pub const MILD_GAIN: i64 = 250;
    /// Moderate gain surplus
    pub const MODERATE_GAIN: i64 = 500;
}

/// Calorie color classification thresholds (percent of target)
pub mod variance {
    /// Over-target percentage above which a day is flagged as alert
    pub const DEFAULT_OVER_THRESHOLD_PCT: f64 = 10.0;
    /// Under-target percentage above which a day is flagged as caution
    pub const DEFAULT_UNDER_THRESHOLD_PCT: f64 = 20.0;
}

/// Trend and streak defaults
pub mod trends {
    /// Trailing window for rolling calorie averages (days)
    pub const DEFAULT_ROLLING_WINDOW: usize = 7;
    /// How far back streak queries look (days)
    pub const STREAK_LOOKBACK_DAYS: i64 = 100;
    /// Meal slots that count toward the completeness score
    pub const EXPECTED_MEAL_SLOTS: u32 = 3;
}

/// Export and report defaults
pub mod reports {
    /// Payload returned instead of an empty CSV
    pub const NO_DATA_PLACEHOLDER: &str = "No data to export";
    /// Maximum daily-breakdown rows in the PDF report
    pub const PDF_DAILY_ROWS: usize = 14;
    /// Report document title
    pub const REPORT_TITLE: &str = "Nutrition Report";
}

/// Input validation limits
pub mod validation {
    /// Minimum password length accepted at sign-up
    pub const MIN_PASSWORD_LENGTH: usize = 8;
    /// Tolerance when checking that macro target percentages sum to 100
    pub const MACRO_TARGET_SUM_TOLERANCE: f64 = 0.5;
}

/// Service names used in structured logs
pub mod service_names {
    /// Nutrisnap service name
    pub const NUTRISNAP: &str = "nutrisnap";
}
