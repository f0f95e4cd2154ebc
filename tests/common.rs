// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides logging setup plus builders for profiles, entries, and summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::too_many_arguments
)]
//! Shared test utilities for `nutrisnap`
//!
//! This module provides common fixtures to reduce duplication across
//! integration tests.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use nutrisnap::models::{
    DailySummary, FoodEntry, MacroEstimate, MacroOverride, MacroTargets, MealType, NewFoodEntry,
    SourceType, TargetMethod, UserProfile,
};
use std::sync::Once;
use uuid::Uuid;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Calendar date shorthand
pub fn d(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Time of day shorthand
pub fn t(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

/// Fixed timestamp for deterministic records
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap()
}

/// Profile with the default 30/40/30 macro split
pub fn profile(user_id: Uuid, target: f64) -> UserProfile {
    UserProfile {
        user_id,
        display_name: "Alex".into(),
        daily_calorie_target: target,
        target_method: TargetMethod::Manual,
        macro_targets: MacroTargets::default(),
    }
}

/// Estimated macro block
pub fn macros(calories: f64, protein_g: f64, carbs_g: f64, fat_g: f64) -> MacroEstimate {
    MacroEstimate {
        calories: Some(calories),
        protein_g: Some(protein_g),
        carbs_g: Some(carbs_g),
        fat_g: Some(fat_g),
        fiber_g: None,
        sugar_g: None,
    }
}

/// Finalized entry with estimated macros and no override
pub fn entry(
    user_id: Uuid,
    date: NaiveDate,
    time: NaiveTime,
    meal_type: MealType,
    calories: f64,
    protein_g: f64,
    carbs_g: f64,
    fat_g: f64,
) -> FoodEntry {
    FoodEntry::finalize(
        NewFoodEntry {
            user_id,
            entry_date: date,
            entry_time: time,
            meal_type,
            food_description: format!("{} meal", meal_type.label()),
            portion_description: None,
            estimated: macros(calories, protein_g, carbs_g, fat_g),
            manual: MacroOverride::default(),
            source_type: SourceType::ManualEntry,
            confidence: None,
            notes: None,
            template_id: None,
        },
        Uuid::new_v4(),
        fixed_now(),
    )
}

/// Entry with only calories known
pub fn calorie_entry(user_id: Uuid, date: NaiveDate, meal_type: MealType, calories: f64) -> FoodEntry {
    entry(user_id, date, t(12, 0), meal_type, calories, 0.0, 0.0, 0.0)
}

/// Summary with the given calories and target and a fixed macro mix
pub fn summary(user_id: Uuid, date: NaiveDate, calories: f64, target: f64) -> DailySummary {
    DailySummary {
        user_id,
        summary_date: date,
        total_calories: calories,
        total_protein_g: 100.0,
        total_carbs_g: 200.0,
        total_fat_g: 50.0,
        calorie_target: target,
        total_entries: 3,
        has_breakfast: true,
        has_lunch: true,
        has_dinner: true,
        has_snacks: false,
        completeness_score: 1.0,
    }
}
