// ABOUTME: Daily aggregation, rolling averages, streaks, and weekly rollups
// ABOUTME: Rebuilds summaries from the full entry set so recomputation never drifts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Aggregation & Streak Engine
//!
//! Every function here is pure. Daily summaries are always rebuilt from the
//! complete set of entries for a (user, date) pair rather than patched
//! incrementally, so running [`aggregate_daily`] twice on the same entries
//! yields identical output.

use crate::units::round_to;
use chrono::{Duration, NaiveDate};
use nutrisnap_core::constants::trends::EXPECTED_MEAL_SLOTS;
use nutrisnap_core::models::{DailySummary, FoodEntry, MealType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;
use uuid::Uuid;

/// Fraction of the expected meal slots (breakfast, lunch, dinner) that were logged
///
/// Snacks are optional and do not count toward completeness.
#[must_use]
pub fn completeness_score(has_breakfast: bool, has_lunch: bool, has_dinner: bool) -> f64 {
    let logged = [has_breakfast, has_lunch, has_dinner]
        .iter()
        .filter(|slot| **slot)
        .count();
    logged as f64 / f64::from(EXPECTED_MEAL_SLOTS)
}

/// Build the daily summary for one user and date
///
/// Entries belonging to another user or date, and soft-deleted entries, are
/// ignored. Missing macro values count as zero. Entries are summed in
/// `(entry_time, id)` order so the floating-point result does not depend on
/// the order the caller supplied them in.
#[must_use]
pub fn aggregate_daily(
    user_id: Uuid,
    date: NaiveDate,
    calorie_target: f64,
    entries: &[FoodEntry],
) -> DailySummary {
    let mut live: Vec<&FoodEntry> = entries
        .iter()
        .filter(|e| !e.is_deleted && e.user_id == user_id && e.entry_date == date)
        .collect();
    live.sort_by_key(|e| (e.entry_time, e.id));

    let mut summary = DailySummary {
        user_id,
        summary_date: date,
        total_calories: 0.0,
        total_protein_g: 0.0,
        total_carbs_g: 0.0,
        total_fat_g: 0.0,
        calorie_target,
        total_entries: 0,
        has_breakfast: false,
        has_lunch: false,
        has_dinner: false,
        has_snacks: false,
        completeness_score: 0.0,
    };

    for entry in &live {
        summary.total_calories += entry.final_calories();
        summary.total_protein_g += entry.final_protein_g();
        summary.total_carbs_g += entry.final_carbs_g();
        summary.total_fat_g += entry.final_fat_g();
        summary.total_entries += 1;
        match entry.meal_type {
            MealType::Breakfast => summary.has_breakfast = true,
            MealType::Lunch => summary.has_lunch = true,
            MealType::Dinner => summary.has_dinner = true,
            MealType::Snack => summary.has_snacks = true,
            MealType::Other => {}
        }
    }

    summary.completeness_score =
        completeness_score(summary.has_breakfast, summary.has_lunch, summary.has_dinner);

    debug!(
        user.id = %user_id,
        summary.date = %date,
        entries = summary.total_entries,
        calories = summary.total_calories,
        "aggregated daily summary"
    );

    summary
}

/// Rebuild one summary per logged day from a flat list of entries
///
/// Only days with at least one live entry for `user_id` get a summary. The
/// result is ordered by date.
#[must_use]
pub fn summarize_days(user_id: Uuid, calorie_target: f64, entries: &[FoodEntry]) -> Vec<DailySummary> {
    let dates: BTreeSet<NaiveDate> = entries
        .iter()
        .filter(|e| !e.is_deleted && e.user_id == user_id)
        .map(|e| e.entry_date)
        .collect();

    dates
        .into_iter()
        .map(|date| aggregate_daily(user_id, date, calorie_target, entries))
        .collect()
}

/// Trailing average over up to `window` values ending at each index
///
/// The window expands at the start: index 0 averages just itself, index 1
/// averages indices 0 and 1, and so on until the window fills. Output has the
/// same length as the input, each value rounded to one decimal. A window of 0
/// behaves like a window of 1.
#[must_use]
pub fn rolling_average(values: &[f64], window: usize) -> Vec<f64> {
    let window = window.max(1);
    (1..=values.len())
        .map(|end| {
            let trailing = &values[end.saturating_sub(window)..end];
            let sum: f64 = trailing.iter().sum();
            round_to(sum / trailing.len() as f64, 1)
        })
        .collect()
}

/// Consecutive logged days ending today or yesterday
///
/// Duplicates are collapsed and dates after `today` are ignored. If the most
/// recent logged day is older than yesterday the streak has lapsed and the
/// result is 0, even though the historical dates still exist.
#[must_use]
pub fn streak(dates: &[NaiveDate], today: NaiveDate) -> u32 {
    let unique: BTreeSet<NaiveDate> = dates.iter().copied().filter(|d| *d <= today).collect();

    let Some(&most_recent) = unique.iter().next_back() else {
        return 0;
    };
    if (today - most_recent).num_days() > 1 {
        return 0;
    }

    let mut count = 0;
    let mut expected = most_recent;
    for date in unique.iter().rev() {
        if *date != expected {
            break;
        }
        count += 1;
        expected -= Duration::days(1);
    }
    count
}

/// Longest run of consecutive logged days anywhere in the history
#[must_use]
pub fn longest_streak(dates: &[NaiveDate]) -> u32 {
    let unique: BTreeSet<NaiveDate> = dates.iter().copied().collect();

    let mut best = 0;
    let mut current = 0;
    let mut previous: Option<NaiveDate> = None;
    for date in unique {
        current = match previous {
            Some(prev) if (date - prev).num_days() == 1 => current + 1,
            _ => 1,
        };
        best = best.max(current);
        previous = Some(date);
    }
    best
}

/// Statistics over the summaries present in a window
///
/// Missing days contribute nothing; they are not imputed as zero-calorie days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WeeklyAggregate {
    /// Number of summaries supplied
    pub days_logged: u32,
    /// Sum of calories
    pub total_calories: f64,
    /// `total_calories / days_logged`, 0 when nothing was logged
    pub avg_calories: f64,
    /// Mean of the per-day calorie targets, 0 when nothing was logged
    pub avg_target: f64,
    /// `avg_calories - avg_target`
    pub avg_variance: f64,
    /// Days strictly under their target
    pub days_under: u32,
    /// Days strictly over their target
    pub days_over: u32,
    /// Protein total (grams)
    pub total_protein_g: f64,
    /// Carbohydrate total (grams)
    pub total_carbs_g: f64,
    /// Fat total (grams)
    pub total_fat_g: f64,
}

/// Roll a set of daily summaries up into window statistics
#[must_use]
pub fn weekly_aggregate(summaries: &[DailySummary]) -> WeeklyAggregate {
    let mut agg = WeeklyAggregate::default();
    let mut total_target = 0.0;

    for summary in summaries {
        agg.days_logged += 1;
        agg.total_calories += summary.total_calories;
        agg.total_protein_g += summary.total_protein_g;
        agg.total_carbs_g += summary.total_carbs_g;
        agg.total_fat_g += summary.total_fat_g;
        total_target += summary.calorie_target;
        if summary.total_calories < summary.calorie_target {
            agg.days_under += 1;
        } else if summary.total_calories > summary.calorie_target {
            agg.days_over += 1;
        }
    }

    if agg.days_logged > 0 {
        let days = f64::from(agg.days_logged);
        agg.avg_calories = agg.total_calories / days;
        agg.avg_target = total_target / days;
        agg.avg_variance = agg.avg_calories - agg.avg_target;
    }

    agg
}

/// One day of a calorie trend line
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// Day
    pub date: NaiveDate,
    /// Calories logged that day
    pub calories: f64,
    /// Trailing rolling average ending at this day
    pub rolling_avg: f64,
}

/// Calorie trend line with rolling averages, in date order
#[must_use]
pub fn calorie_trend(summaries: &[DailySummary], window: usize) -> Vec<TrendPoint> {
    let mut ordered: Vec<&DailySummary> = summaries.iter().collect();
    ordered.sort_by_key(|s| s.summary_date);

    let calories: Vec<f64> = ordered.iter().map(|s| s.total_calories).collect();
    let averages = rolling_average(&calories, window);

    ordered
        .iter()
        .zip(averages)
        .map(|(summary, rolling_avg)| TrendPoint {
            date: summary.summary_date,
            calories: summary.total_calories,
            rolling_avg,
        })
        .collect()
}
