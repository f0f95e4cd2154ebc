// ABOUTME: CSV exports of the food log and of daily summaries
// ABOUTME: Fixed column sets; an empty export returns the no-data placeholder payload
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::format;
use csv::Writer;
use nutrisnap_core::errors::{AppError, AppResult};
use nutrisnap_core::models::{DailySummary, FoodEntry};
use nutrisnap_intelligence::summary_variance;

/// Food log columns
pub const FOOD_LOG_HEADERS: [&str; 12] = [
    "Date",
    "Time",
    "Meal Type",
    "Description",
    "Portion",
    "Calories",
    "Protein (g)",
    "Carbs (g)",
    "Fat (g)",
    "Manually Adjusted",
    "Confidence",
    "Notes",
];

/// Daily summary columns
pub const DAILY_SUMMARY_HEADERS: [&str; 13] = [
    "Date",
    "Total Calories",
    "Calorie Target",
    "Variance",
    "Variance %",
    "Protein (g)",
    "Carbs (g)",
    "Fat (g)",
    "Total Entries",
    "Has Breakfast",
    "Has Lunch",
    "Has Dinner",
    "Completeness",
];

/// One CSV row per live entry, in the order supplied
///
/// Soft-deleted entries are skipped. When nothing is left to export the
/// `placeholder` text is returned instead of a header-only file.
///
/// # Errors
///
/// Returns a `SerializationError` if the CSV writer fails
pub fn food_log_csv(entries: &[FoodEntry], placeholder: &str) -> AppResult<String> {
    let live: Vec<&FoodEntry> = entries.iter().filter(|e| !e.is_deleted).collect();
    if live.is_empty() {
        return Ok(placeholder.to_owned());
    }

    let mut wtr = Writer::from_writer(Vec::new());
    wtr.write_record(FOOD_LOG_HEADERS).map_err(csv_error)?;

    for entry in live {
        wtr.write_record([
            entry.entry_date.format("%Y-%m-%d").to_string(),
            entry.entry_time.format("%H:%M").to_string(),
            entry.meal_type.label().to_owned(),
            entry.food_description.clone(),
            entry.portion_description.clone().unwrap_or_default(),
            format::calories(entry.final_calories()),
            format::grams(entry.final_protein_g()),
            format::grams(entry.final_carbs_g()),
            format::grams(entry.final_fat_g()),
            format::yes_no(entry.was_manually_adjusted).to_owned(),
            format::confidence(entry.confidence),
            entry.notes.clone().unwrap_or_default(),
        ])
        .map_err(csv_error)?;
    }

    finish(wtr)
}

/// One CSV row per daily summary, in the order supplied
///
/// # Errors
///
/// Returns a `SerializationError` if the CSV writer fails
pub fn daily_summary_csv(summaries: &[DailySummary], placeholder: &str) -> AppResult<String> {
    if summaries.is_empty() {
        return Ok(placeholder.to_owned());
    }

    let mut wtr = Writer::from_writer(Vec::new());
    wtr.write_record(DAILY_SUMMARY_HEADERS)
        .map_err(csv_error)?;

    for summary in summaries {
        let variance = summary_variance(summary);
        wtr.write_record([
            summary.summary_date.format("%Y-%m-%d").to_string(),
            format::calories(summary.total_calories),
            format::calories(summary.calorie_target),
            format::calories(variance.variance),
            format::percent(variance.variance_pct),
            format::grams(summary.total_protein_g),
            format::grams(summary.total_carbs_g),
            format::grams(summary.total_fat_g),
            summary.total_entries.to_string(),
            format::yes_no(summary.has_breakfast).to_owned(),
            format::yes_no(summary.has_lunch).to_owned(),
            format::yes_no(summary.has_dinner).to_owned(),
            format!("{:.0}%", summary.completeness_score * 100.0),
        ])
        .map_err(csv_error)?;
    }

    finish(wtr)
}

fn finish(wtr: Writer<Vec<u8>>) -> AppResult<String> {
    let bytes = wtr
        .into_inner()
        .map_err(|e| AppError::serialization(format!("CSV flush failed: {e}")))?;
    String::from_utf8(bytes)
        .map_err(|e| AppError::serialization(format!("CSV output is not UTF-8: {e}")))
}

fn csv_error(err: csv::Error) -> AppError {
    AppError::serialization(format!("CSV write failed: {err}"))
}
