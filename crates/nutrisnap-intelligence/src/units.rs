// ABOUTME: Unit conversions and calendar helpers for reports and profile forms
// ABOUTME: Weight and height conversions, week and month bounds, relative labels, and age
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{Datelike, Duration, NaiveDate};
use nutrisnap_core::constants::units::{CM_PER_INCH, INCHES_PER_FOOT, LB_PER_KG};

/// Round to a fixed number of decimal places
#[must_use]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}

/// Kilograms to pounds
#[must_use]
pub fn kg_to_lb(kg: f64) -> f64 {
    kg * LB_PER_KG
}

/// Pounds to kilograms
#[must_use]
pub fn lb_to_kg(lb: f64) -> f64 {
    lb / LB_PER_KG
}

/// Centimeters to inches
#[must_use]
pub fn cm_to_inches(cm: f64) -> f64 {
    cm / CM_PER_INCH
}

/// Inches to centimeters
#[must_use]
pub fn inches_to_cm(inches: f64) -> f64 {
    inches * CM_PER_INCH
}

/// Feet and inches to centimeters
#[must_use]
pub fn feet_inches_to_cm(feet: u32, inches: f64) -> f64 {
    inches_to_cm(f64::from(feet).mul_add(INCHES_PER_FOOT, inches))
}

/// Centimeters to whole feet plus inches (one decimal)
#[must_use]
pub fn cm_to_feet_inches(cm: f64) -> (u32, f64) {
    let total_inches = cm_to_inches(cm.max(0.0));
    let mut feet = (total_inches / INCHES_PER_FOOT).floor();
    let mut inches = round_to(feet.mul_add(-INCHES_PER_FOOT, total_inches), 1);
    // 5' 11.96" rounds to 5' 12.0"
    if inches >= INCHES_PER_FOOT {
        feet += 1.0;
        inches = 0.0;
    }
    (feet as u32, inches)
}

/// Monday and Sunday of the week containing `date`
#[must_use]
pub fn week_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let offset = i64::from(date.weekday().num_days_from_monday());
    let monday = date - Duration::days(offset);
    (monday, monday + Duration::days(6))
}

/// First and last day of the month containing `date`
#[must_use]
pub fn month_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = date.with_day(1).unwrap_or(date);
    let (next_year, next_month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    let last = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .unwrap_or(date);
    (first, last)
}

/// Every day from `start` to `end` inclusive; empty when `start > end`
#[must_use]
pub fn date_range(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    start.iter_days().take_while(|day| *day <= end).collect()
}

/// Human label for a date relative to `today`
///
/// "Today", "Yesterday", the weekday name for anything less than a week
/// back (future dates included), otherwise the date as "Mar 05".
#[must_use]
pub fn relative_date_label(date: NaiveDate, today: NaiveDate) -> String {
    match (today - date).num_days() {
        0 => "Today".to_owned(),
        1 => "Yesterday".to_owned(),
        ..=6 => date.format("%A").to_string(),
        _ => date.format("%b %d").to_string(),
    }
}

/// Age in whole years on `today` for someone born on `birth`
///
/// The year only counts once the birthday has been reached. A birth date
/// after `today` gives 0.
#[must_use]
pub fn calculate_age(birth: NaiveDate, today: NaiveDate) -> u32 {
    today.years_since(birth).unwrap_or(0)
}
