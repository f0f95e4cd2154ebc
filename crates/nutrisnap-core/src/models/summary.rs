// ABOUTME: Daily summary and weekly digest records
// ABOUTME: Per-day totals rebuilt from entries and immutable weekly snapshots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One row per (user, date), derived entirely from that date's live entries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySummary {
    /// Owner of the summary
    pub user_id: Uuid,
    /// Summarized day
    pub summary_date: NaiveDate,
    /// Sum of final calories
    pub total_calories: f64,
    /// Sum of final protein (grams)
    pub total_protein_g: f64,
    /// Sum of final carbohydrates (grams)
    pub total_carbs_g: f64,
    /// Sum of final fat (grams)
    pub total_fat_g: f64,
    /// Calorie target in effect that day
    pub calorie_target: f64,
    /// Number of live entries
    pub total_entries: u32,
    /// Any breakfast entry logged
    pub has_breakfast: bool,
    /// Any lunch entry logged
    pub has_lunch: bool,
    /// Any dinner entry logged
    pub has_dinner: bool,
    /// Any snack entry logged
    pub has_snacks: bool,
    /// Fraction of expected meal slots logged, in [0, 1]
    pub completeness_score: f64,
}

/// Share of macro calories per macronutrient (percent, one decimal)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroPercentages {
    /// Protein share of macro calories
    pub protein_pct: f64,
    /// Carbohydrate share of macro calories
    pub carbs_pct: f64,
    /// Fat share of macro calories
    pub fat_pct: f64,
}

/// Numeric content of one week's digest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DigestContent {
    /// Monday of the digest week
    pub week_start: NaiveDate,
    /// Sunday of the digest week
    pub week_end: NaiveDate,
    /// Days with a summary in the week
    pub days_logged: u32,
    /// Sum of calories over logged days
    pub total_calories: f64,
    /// Average calories over logged days
    pub avg_calories: f64,
    /// Average calorie target over logged days
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
    /// Macro split of the week's intake
    pub macro_percentages: MacroPercentages,
}

/// Immutable snapshot of one week's statistics, produced for email delivery
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyDigest {
    id: Uuid,
    user_id: Uuid,
    content: DigestContent,
    created_at: DateTime<Utc>,
}

impl WeeklyDigest {
    /// Freeze a digest snapshot
    #[must_use]
    pub const fn new(
        id: Uuid,
        user_id: Uuid,
        content: DigestContent,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            content,
            created_at,
        }
    }

    /// Digest identifier
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Owner of the digest
    #[must_use]
    pub const fn user_id(&self) -> Uuid {
        self.user_id
    }

    /// Numeric content
    #[must_use]
    pub const fn content(&self) -> &DigestContent {
        &self.content
    }

    /// First day covered
    #[must_use]
    pub const fn week_start(&self) -> NaiveDate {
        self.content.week_start
    }

    /// Last day covered
    #[must_use]
    pub const fn week_end(&self) -> NaiveDate {
        self.content.week_end
    }

    /// Creation timestamp
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
