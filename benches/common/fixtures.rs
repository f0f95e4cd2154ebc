// ABOUTME: Benchmark fixtures generating realistic food logs and daily summaries
// ABOUTME: Deterministic data so repeated runs measure the same work
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark fixtures for generating food-log data.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use nutrisnap::models::{
    DailySummary, FoodEntry, MacroEstimate, MacroOverride, MacroTargets, MealType, NewFoodEntry,
    SourceType, TargetMethod, UserProfile,
};
use uuid::Uuid;

/// Predefined history lengths for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum HistoryLength {
    /// One month of logging
    Month,
    /// One year of logging
    Year,
}

impl HistoryLength {
    #[must_use]
    pub const fn days(self) -> usize {
        match self {
            Self::Month => 30,
            Self::Year => 365,
        }
    }
}

/// First day of every generated history
#[must_use]
pub fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default()
}

/// Fixed generation timestamp
#[must_use]
pub fn generated_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Profile for the benchmark user
#[must_use]
pub fn bench_profile(user_id: Uuid) -> UserProfile {
    UserProfile {
        user_id,
        display_name: "Bench User".to_owned(),
        daily_calorie_target: 2000.0,
        target_method: TargetMethod::Manual,
        macro_targets: MacroTargets::default(),
    }
}

const MEALS: [(MealType, u32); 4] = [
    (MealType::Breakfast, 8),
    (MealType::Lunch, 13),
    (MealType::Snack, 16),
    (MealType::Dinner, 19),
];

/// Four entries per day, every tenth one manually corrected
#[allow(clippy::cast_precision_loss, clippy::cast_possible_wrap)]
#[must_use]
pub fn generate_entries(user_id: Uuid, days: usize) -> Vec<FoodEntry> {
    let mut entries = Vec::with_capacity(days * MEALS.len());
    for day in 0..days {
        let date = start_date() + Duration::days(day as i64);
        for (slot, (meal_type, hour)) in MEALS.iter().enumerate() {
            let index = day * MEALS.len() + slot;
            let calories = 250.0 + ((index * 137) % 500) as f64;
            let manual = if index % 10 == 0 {
                MacroOverride {
                    calories: Some(calories + 50.0),
                    ..MacroOverride::default()
                }
            } else {
                MacroOverride::default()
            };
            entries.push(FoodEntry::finalize(
                NewFoodEntry {
                    user_id,
                    entry_date: date,
                    entry_time: NaiveTime::from_hms_opt(*hour, 0, 0).unwrap_or_default(),
                    meal_type: *meal_type,
                    food_description: format!("Bench meal {index}"),
                    portion_description: None,
                    estimated: MacroEstimate {
                        calories: Some(calories),
                        protein_g: Some(calories * 0.075),
                        carbs_g: Some(calories * 0.1),
                        fat_g: Some(calories * 0.033),
                        fiber_g: None,
                        sugar_g: None,
                    },
                    manual,
                    source_type: SourceType::ImageUpload,
                    confidence: Some(0.8),
                    notes: None,
                    template_id: None,
                },
                Uuid::new_v4(),
                generated_at(),
            ));
        }
    }
    entries
}

/// One summary per day, skipping every seventh day
#[allow(clippy::cast_precision_loss, clippy::cast_possible_wrap)]
#[must_use]
pub fn generate_summaries(user_id: Uuid, days: usize) -> Vec<DailySummary> {
    (0..days)
        .filter(|day| day % 7 != 6)
        .map(|day| DailySummary {
            user_id,
            summary_date: start_date() + Duration::days(day as i64),
            total_calories: 1600.0 + ((day * 211) % 900) as f64,
            total_protein_g: 90.0 + (day % 40) as f64,
            total_carbs_g: 180.0 + (day % 60) as f64,
            total_fat_g: 50.0 + (day % 25) as f64,
            calorie_target: 2000.0,
            total_entries: 4,
            has_breakfast: true,
            has_lunch: true,
            has_dinner: day % 5 != 0,
            has_snacks: true,
            completeness_score: 1.0,
        })
        .collect()
}
