// ABOUTME: Input-constraint checks run before any analytics or storage write
// ABOUTME: Password strength, biometric ranges, calorie targets, and advisory macro split warnings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Local validation of user input
//!
//! Violations are rejected with a user-facing message and never change state.
//! The macro target split is the exception: a split that does not sum to 100
//! is reported as a warning and accepted.

use nutrisnap_core::constants::biometrics::{
    MAX_AGE_YEARS, MAX_HEIGHT_CM, MAX_WEIGHT_KG, MIN_AGE_YEARS, MIN_HEIGHT_CM, MIN_WEIGHT_KG,
};
use nutrisnap_core::constants::validation::{MACRO_TARGET_SUM_TOLERANCE, MIN_PASSWORD_LENGTH};
use nutrisnap_core::errors::{AppError, AppResult};
use nutrisnap_core::models::MacroTargets;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Non-blocking validation finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationWarning {
    /// Field the warning concerns
    pub field: String,
    /// User-facing message
    pub message: String,
}

/// Reject weak passwords
///
/// A password needs at least 8 characters, an uppercase letter, a lowercase
/// letter, and a digit. Checks run in that order and the first failure wins.
///
/// # Errors
///
/// Returns `InvalidInput` with a message naming the first unmet rule
pub fn validate_password(password: &str) -> AppResult<()> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AppError::invalid_input(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }
    if !password.chars().any(char::is_uppercase) {
        return Err(AppError::invalid_input(
            "Password must contain at least one uppercase letter",
        ));
    }
    if !password.chars().any(char::is_lowercase) {
        return Err(AppError::invalid_input(
            "Password must contain at least one lowercase letter",
        ));
    }
    if !password.chars().any(char::is_numeric) {
        return Err(AppError::invalid_input(
            "Password must contain at least one number",
        ));
    }
    Ok(())
}

/// Range-check biometrics before they reach the TDEE calculator
///
/// # Errors
///
/// Returns `ValueOutOfRange` naming the first field outside its range
pub fn validate_biometrics(weight_kg: f64, height_cm: f64, age_years: u32) -> AppResult<()> {
    if !(MIN_WEIGHT_KG..=MAX_WEIGHT_KG).contains(&weight_kg) {
        return Err(AppError::out_of_range(format!(
            "Weight must be between {MIN_WEIGHT_KG} and {MAX_WEIGHT_KG} kg"
        )));
    }
    if !(MIN_HEIGHT_CM..=MAX_HEIGHT_CM).contains(&height_cm) {
        return Err(AppError::out_of_range(format!(
            "Height must be between {MIN_HEIGHT_CM} and {MAX_HEIGHT_CM} cm"
        )));
    }
    if !(MIN_AGE_YEARS..=MAX_AGE_YEARS).contains(&age_years) {
        return Err(AppError::out_of_range(format!(
            "Age must be between {MIN_AGE_YEARS} and {MAX_AGE_YEARS} years"
        )));
    }
    Ok(())
}

/// Daily calorie targets must be positive
///
/// # Errors
///
/// Returns `ValueOutOfRange` for zero, negative, or non-finite targets
pub fn validate_calorie_target(target: f64) -> AppResult<()> {
    if !target.is_finite() || target <= 0.0 {
        return Err(AppError::out_of_range(
            "Daily calorie target must be greater than 0",
        ));
    }
    Ok(())
}

/// Advisory check that a macro split sums to 100 percent
///
/// Returns an empty list when the split is fine. Never fails.
#[must_use]
pub fn check_macro_targets(targets: &MacroTargets) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();
    let sum = targets.protein_pct + targets.carbs_pct + targets.fat_pct;

    if (sum - 100.0).abs() > MACRO_TARGET_SUM_TOLERANCE {
        warn!(macro_sum = sum, "macro targets do not sum to 100%");
        warnings.push(ValidationWarning {
            field: "macro_targets".into(),
            message: format!("Macro percentages add up to {sum:.1}%, expected 100%"),
        });
    }

    for (field, value) in [
        ("protein_pct", targets.protein_pct),
        ("carbs_pct", targets.carbs_pct),
        ("fat_pct", targets.fat_pct),
    ] {
        if !(0.0..=100.0).contains(&value) {
            warnings.push(ValidationWarning {
                field: field.into(),
                message: format!("{field} should be between 0 and 100, got {value:.1}"),
            });
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use nutrisnap_core::errors::ErrorCode;

    fn password_error(password: &str) -> String {
        validate_password(password)
            .err()
            .map(|e| e.message)
            .unwrap_or_default()
    }

    #[test]
    fn test_password_length() {
        assert_eq!(
            password_error("Abc1234"),
            "Password must be at least 8 characters"
        );
        assert!(validate_password("Abcd1234").is_ok());
        let err = validate_password("abc").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
    }

    #[test]
    fn test_password_character_classes() {
        assert_eq!(
            password_error("abcd1234"),
            "Password must contain at least one uppercase letter"
        );
        assert_eq!(
            password_error("ABCD1234"),
            "Password must contain at least one lowercase letter"
        );
        assert_eq!(
            password_error("Abcdefgh"),
            "Password must contain at least one number"
        );
        assert!(validate_password("Sunny-Day-42").is_ok());
    }

    #[test]
    fn test_biometric_bounds_inclusive() {
        assert!(validate_biometrics(30.0, 100.0, 15).is_ok());
        assert!(validate_biometrics(300.0, 250.0, 100).is_ok());
        assert!(validate_biometrics(29.9, 170.0, 30).is_err());
        assert!(validate_biometrics(70.0, 251.0, 30).is_err());
        let err = validate_biometrics(70.0, 170.0, 14).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
    }

    #[test]
    fn test_calorie_target() {
        assert!(validate_calorie_target(2000.0).is_ok());
        assert!(validate_calorie_target(0.0).is_err());
        assert!(validate_calorie_target(f64::NAN).is_err());
    }

    #[test]
    fn test_macro_split_is_advisory() {
        assert!(check_macro_targets(&MacroTargets::default()).is_empty());
        let odd = MacroTargets {
            protein_pct: 40.0,
            carbs_pct: 40.0,
            fat_pct: 30.0,
        };
        let warnings = check_macro_targets(&odd);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].field, "macro_targets");
    }
}
