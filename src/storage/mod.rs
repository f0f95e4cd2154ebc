// ABOUTME: Persistence collaborator contract for profiles, entries, summaries, templates, digests
// ABOUTME: Async trait with inclusive date-range queries and an atomic template usage counter
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Storage abstraction
//!
//! All reads are scoped to one user. Entry queries return live (not
//! soft-deleted) entries only; date ranges are inclusive on both ends.

/// In-process store over `tokio::sync::RwLock`
pub mod memory;

pub use memory::InMemoryStore;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use nutrisnap_core::errors::AppResult;
use nutrisnap_core::models::{DailySummary, FoodEntry, MealTemplate, UserProfile, WeeklyDigest};
use uuid::Uuid;

/// Persistence collaborator
#[async_trait]
pub trait NutritionStore: Send + Sync {
    // ================================
    // Profiles
    // ================================

    /// Profile for a user, if one exists
    async fn get_profile(&self, user_id: Uuid) -> AppResult<Option<UserProfile>>;

    /// Create or replace a profile
    async fn upsert_profile(&self, profile: UserProfile) -> AppResult<()>;

    // ================================
    // Food entries
    // ================================

    /// Store a new entry
    async fn insert_entry(&self, entry: FoodEntry) -> AppResult<()>;

    /// Entry by id, including soft-deleted entries
    async fn get_entry(&self, user_id: Uuid, entry_id: Uuid) -> AppResult<Option<FoodEntry>>;

    /// Replace an existing entry
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the entry does not exist for its user
    async fn update_entry(&self, entry: FoodEntry) -> AppResult<()>;

    /// Live entries for one day, ordered by time
    async fn entries_for_date(&self, user_id: Uuid, date: NaiveDate) -> AppResult<Vec<FoodEntry>>;

    /// Live entries between `start` and `end` inclusive, ordered by date then time
    async fn entries_in_range(
        &self,
        user_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<FoodEntry>>;

    // ================================
    // Daily summaries
    // ================================

    /// Create or replace the summary for its (user, date)
    async fn upsert_summary(&self, summary: DailySummary) -> AppResult<()>;

    /// Remove the summary for a day, if any
    async fn delete_summary(&self, user_id: Uuid, date: NaiveDate) -> AppResult<()>;

    /// Summary for one day
    async fn get_summary(&self, user_id: Uuid, date: NaiveDate)
        -> AppResult<Option<DailySummary>>;

    /// Summaries between `start` and `end` inclusive, ordered by date
    async fn summaries_in_range(
        &self,
        user_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<DailySummary>>;

    // ================================
    // Meal templates
    // ================================

    /// Store a new template
    async fn insert_template(&self, template: MealTemplate) -> AppResult<()>;

    /// Template by id
    async fn get_template(
        &self,
        user_id: Uuid,
        template_id: Uuid,
    ) -> AppResult<Option<MealTemplate>>;

    /// Templates for a user, most used first
    async fn templates_for_user(&self, user_id: Uuid) -> AppResult<Vec<MealTemplate>>;

    /// Atomically add one use to a template and return the updated record
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the template does not exist for the user
    async fn increment_template_usage(
        &self,
        user_id: Uuid,
        template_id: Uuid,
        at: DateTime<Utc>,
    ) -> AppResult<MealTemplate>;

    // ================================
    // Weekly digests
    // ================================

    /// Store a digest snapshot
    async fn insert_digest(&self, digest: WeeklyDigest) -> AppResult<()>;

    /// Digest with the latest week start for a user
    async fn latest_digest(&self, user_id: Uuid) -> AppResult<Option<WeeklyDigest>>;
}
