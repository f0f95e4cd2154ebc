// ABOUTME: Format-neutral report document built once and rendered to PDF or HTML
// ABOUTME: Title, date range, profile table, statistics table, and a bounded daily breakdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{format, ExportRequest, ExportStats};
use crate::config::AnalyticsConfig;
use nutrisnap_core::constants::reports::{PDF_DAILY_ROWS, REPORT_TITLE};
use nutrisnap_intelligence::{calorie_color_with_thresholds, summary_variance, CalorieColor};

/// Column headers of the daily breakdown table
pub const DAILY_COLUMNS: [&str; 7] = [
    "Date", "Calories", "Target", "Variance", "Protein", "Carbs", "Fat",
];

/// One row of the daily breakdown table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyRow {
    /// Cell text, aligned with [`DAILY_COLUMNS`]
    pub cells: [String; 7],
    /// Color signal for the calories cell
    pub color: CalorieColor,
}

/// Report content shared by every document renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportDocument {
    /// Document title
    pub title: String,
    /// Date range line under the title
    pub subtitle: String,
    /// Label/value pairs describing the user
    pub profile_rows: Vec<(String, String)>,
    /// Label/value pairs of report statistics
    pub stats_rows: Vec<(String, String)>,
    /// Daily breakdown, at most the configured number of rows
    pub daily_rows: Vec<DailyRow>,
    /// Footer line with the generation timestamp
    pub footer: String,
}

/// Assemble the report document for a request
///
/// Only the last `reports.pdf_daily_rows` summaries of the supplied sequence appear in
/// the daily breakdown, never more than [`PDF_DAILY_ROWS`]; older days are dropped
/// to bound the page length.
/// Statistics still cover every supplied summary.
#[must_use]
pub fn build_report_document(
    request: &ExportRequest<'_>,
    stats: &ExportStats,
    config: &AnalyticsConfig,
) -> ReportDocument {
    let profile_rows = vec![
        ("Name".to_owned(), request.profile.display_name.clone()),
        (
            "Daily Calorie Target".to_owned(),
            format!("{} cal", format::thousands(request.profile.daily_calorie_target)),
        ),
        (
            "Target Method".to_owned(),
            request.profile.target_method.as_str().to_owned(),
        ),
    ];

    let stats_rows = vec![
        ("Days Tracked".to_owned(), stats.days_tracked.to_string()),
        (
            "Average Daily Calories".to_owned(),
            format!("{} cal", format::thousands(stats.avg_calories)),
        ),
        (
            "Average vs Target".to_owned(),
            format!("{} cal", format::signed_thousands(stats.avg_variance)),
        ),
        ("Days Under Target".to_owned(), stats.days_under.to_string()),
        ("Days Over Target".to_owned(), stats.days_over.to_string()),
        (
            "Total Protein".to_owned(),
            format!("{}g", format::thousands(stats.total_protein_g)),
        ),
        (
            "Total Carbs".to_owned(),
            format!("{}g", format::thousands(stats.total_carbs_g)),
        ),
        (
            "Total Fat".to_owned(),
            format!("{}g", format::thousands(stats.total_fat_g)),
        ),
        (
            "Macro Split (P/C/F)".to_owned(),
            format!(
                "{}% / {}% / {}%",
                format::percent(stats.macro_percentages.protein_pct),
                format::percent(stats.macro_percentages.carbs_pct),
                format::percent(stats.macro_percentages.fat_pct)
            ),
        ),
    ];

    let skip = request
        .summaries
        .len()
        .saturating_sub(config.reports.pdf_daily_rows.min(PDF_DAILY_ROWS));
    let daily_rows = request.summaries[skip..]
        .iter()
        .map(|summary| {
            let variance = summary_variance(summary);
            DailyRow {
                cells: [
                    summary.summary_date.format("%Y-%m-%d").to_string(),
                    format::thousands(summary.total_calories),
                    format::thousands(summary.calorie_target),
                    format::signed_thousands(variance.variance),
                    format!("{}g", format::thousands(summary.total_protein_g)),
                    format!("{}g", format::thousands(summary.total_carbs_g)),
                    format!("{}g", format::thousands(summary.total_fat_g)),
                ],
                color: calorie_color_with_thresholds(
                    summary.total_calories,
                    summary.calorie_target,
                    config.variance.over_threshold_pct,
                    config.variance.under_threshold_pct,
                ),
            }
        })
        .collect();

    ReportDocument {
        title: REPORT_TITLE.to_owned(),
        subtitle: format!(
            "{} - {}",
            request.start.format("%B %d, %Y"),
            request.end.format("%B %d, %Y")
        ),
        profile_rows,
        stats_rows,
        daily_rows,
        footer: format!(
            "Generated by Nutrisnap on {}",
            request.generated_at.format("%Y-%m-%d %H:%M")
        ),
    }
}
