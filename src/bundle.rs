// ABOUTME: Offline data bundle holding one user's profile, entries, and optional summaries
// ABOUTME: Loaded from JSON by the CLI; missing summaries are rebuilt from the entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use nutrisnap_core::errors::{AppError, AppResult};
use nutrisnap_core::models::{DailySummary, FoodEntry, UserProfile};
use nutrisnap_intelligence::summarize_days;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// One user's data as exported from the store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataBundle {
    /// Profile the data belongs to
    pub profile: UserProfile,
    /// Logged entries, soft-deleted ones included
    #[serde(default)]
    pub entries: Vec<FoodEntry>,
    /// Stored daily summaries; rebuilt from `entries` when absent
    #[serde(default)]
    pub summaries: Option<Vec<DailySummary>>,
}

impl DataBundle {
    /// Parse a bundle from JSON text
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when the JSON does not describe a bundle
    pub fn from_json(json: &str) -> AppResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| AppError::invalid_input(format!("Invalid data bundle: {e}")))
    }

    /// Read and parse a bundle file
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when the file cannot be read or parsed
    pub async fn load(path: &Path) -> AppResult<Self> {
        let json = tokio::fs::read_to_string(path).await.map_err(|e| {
            AppError::invalid_input(format!("Cannot read {}: {e}", path.display())).with_source(e)
        })?;
        let bundle = Self::from_json(&json)?;
        info!(
            user.id = %bundle.profile.user_id,
            entries = bundle.entries.len(),
            has_summaries = bundle.summaries.is_some(),
            "bundle loaded from {}",
            path.display()
        );
        Ok(bundle)
    }

    /// Entries owned by the profile's user
    pub fn own_entries(&self) -> impl Iterator<Item = &FoodEntry> {
        self.entries
            .iter()
            .filter(move |e| e.user_id == self.profile.user_id)
    }

    /// Stored summaries, or summaries rebuilt from the entries, in date order
    #[must_use]
    pub fn daily_summaries(&self) -> Vec<DailySummary> {
        if let Some(stored) = &self.summaries {
            let mut own: Vec<DailySummary> = stored
                .iter()
                .filter(|s| s.user_id == self.profile.user_id)
                .cloned()
                .collect();
            own.sort_by_key(|s| s.summary_date);
            return own;
        }
        debug!(
            entries = self.entries.len(),
            "bundle has no summaries, rebuilding from entries"
        );
        summarize_days(
            self.profile.user_id,
            self.profile.daily_calorie_target,
            &self.entries,
        )
    }

    /// First and last day with data, if any
    #[must_use]
    pub fn date_span(&self) -> Option<(NaiveDate, NaiveDate)> {
        let entry_dates = self
            .own_entries()
            .filter(|e| !e.is_deleted)
            .map(|e| e.entry_date);
        let summary_dates = self
            .summaries
            .iter()
            .flatten()
            .filter(|s| s.user_id == self.profile.user_id)
            .map(|s| s.summary_date);
        let mut dates = entry_dates.chain(summary_dates);
        let first = dates.next()?;
        Some(dates.fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d))))
    }

    /// Entries and summaries between `start` and `end` inclusive
    #[must_use]
    pub fn slice(&self, start: NaiveDate, end: NaiveDate) -> (Vec<FoodEntry>, Vec<DailySummary>) {
        let mut entries: Vec<FoodEntry> = self
            .own_entries()
            .filter(|e| (start..=end).contains(&e.entry_date))
            .cloned()
            .collect();
        entries.sort_by_key(|e| (e.entry_date, e.entry_time, e.id));

        let summaries = self
            .daily_summaries()
            .into_iter()
            .filter(|s| (start..=end).contains(&s.summary_date))
            .collect();

        (entries, summaries)
    }
}
