// ABOUTME: Report-level statistics over the summaries of an export range
// ABOUTME: Computed once per export and reused by the PDF and HTML documents
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutrisnap_core::models::{DailySummary, MacroPercentages};
use nutrisnap_intelligence::{macro_percentages, weekly_aggregate};
use serde::{Deserialize, Serialize};

/// Statistics block printed on reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ExportStats {
    /// Number of summaries in the range
    pub days_tracked: u32,
    /// Sum of calories
    pub total_calories: f64,
    /// `total_calories / days_tracked`, 0 when empty
    pub avg_calories: f64,
    /// Mean of per-day targets, 0 when empty
    pub avg_target: f64,
    /// `avg_calories - avg_target`
    pub avg_variance: f64,
    /// Days strictly under target
    pub days_under: u32,
    /// Days strictly over target
    pub days_over: u32,
    /// Protein total (grams)
    pub total_protein_g: f64,
    /// Carbohydrate total (grams)
    pub total_carbs_g: f64,
    /// Fat total (grams)
    pub total_fat_g: f64,
    /// Macro calorie split over the range
    pub macro_percentages: MacroPercentages,
}

/// Compute report statistics; an empty range yields all zeros
#[must_use]
pub fn calculate_export_stats(summaries: &[DailySummary]) -> ExportStats {
    let agg = weekly_aggregate(summaries);
    ExportStats {
        days_tracked: agg.days_logged,
        total_calories: agg.total_calories,
        avg_calories: agg.avg_calories,
        avg_target: agg.avg_target,
        avg_variance: agg.avg_variance,
        days_under: agg.days_under,
        days_over: agg.days_over,
        total_protein_g: agg.total_protein_g,
        total_carbs_g: agg.total_carbs_g,
        total_fat_g: agg.total_fat_g,
        macro_percentages: macro_percentages(
            agg.total_protein_g,
            agg.total_carbs_g,
            agg.total_fat_g,
        ),
    }
}
