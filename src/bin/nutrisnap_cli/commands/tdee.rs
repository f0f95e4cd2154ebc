// ABOUTME: TDEE command for nutrisnap-cli
// ABOUTME: Validates biometrics, then prints BMR, TDEE, and goal targets as a table or JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutrisnap::errors::{AppError, AppResult};
use chrono::NaiveDate;
use nutrisnap::intelligence::units::calculate_age;
use nutrisnap::intelligence::{calculate_tdee_profile, ActivityLevel, Gender, TdeeParams};
use nutrisnap::validation::validate_biometrics;
use tracing::info;

use crate::helpers::display::display_tdee;

/// Age from `--age`, or from `--birth-date` as of `today`
#[must_use]
pub fn resolve_age(age: Option<u32>, birth_date: Option<NaiveDate>, today: NaiveDate) -> u32 {
    age.or_else(|| birth_date.map(|birth| calculate_age(birth, today)))
        .unwrap_or_default()
}

/// Calculate and print calorie targets
pub fn run(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    gender: &str,
    activity: &str,
    json: bool,
) -> AppResult<()> {
    validate_biometrics(weight_kg, height_cm, age)?;

    let params = TdeeParams {
        weight_kg,
        height_cm,
        age_years: age,
        gender: Gender::from_str_lossy(gender),
        activity_level: ActivityLevel::from_str_lossy(activity),
    };
    let result = calculate_tdee_profile(&params);
    info!(bmr = result.bmr, tdee = result.tdee, "tdee calculated");

    if json {
        let rendered = serde_json::to_string_pretty(&result)
            .map_err(|e| AppError::serialization(format!("Cannot render result: {e}")))?;
        println!("{rendered}");
    } else {
        display_tdee(&result);
    }
    Ok(())
}
