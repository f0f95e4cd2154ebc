// ABOUTME: In-memory nutrition store backed by tokio RwLock-guarded maps
// ABOUTME: Used by tests, the CLI, and single-process deployments
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::NutritionStore;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use nutrisnap_core::errors::{AppError, AppResult, ErrorCode};
use nutrisnap_core::models::{DailySummary, FoodEntry, MealTemplate, UserProfile, WeeklyDigest};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-memory store
///
/// Cloning is cheap and every clone shares the same data.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    profiles: Arc<RwLock<HashMap<Uuid, UserProfile>>>,
    entries: Arc<RwLock<HashMap<Uuid, FoodEntry>>>,
    summaries: Arc<RwLock<BTreeMap<(Uuid, NaiveDate), DailySummary>>>,
    templates: Arc<RwLock<HashMap<Uuid, MealTemplate>>>,
    digests: Arc<RwLock<Vec<WeeklyDigest>>>,
}

impl InMemoryStore {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with one profile and its entries and summaries
    pub async fn seeded(
        profile: UserProfile,
        entries: Vec<FoodEntry>,
        summaries: Vec<DailySummary>,
    ) -> Self {
        let store = Self::new();
        store
            .profiles
            .write()
            .await
            .insert(profile.user_id, profile);
        {
            let mut map = store.entries.write().await;
            for entry in entries {
                map.insert(entry.id, entry);
            }
        }
        {
            let mut map = store.summaries.write().await;
            for summary in summaries {
                map.insert((summary.user_id, summary.summary_date), summary);
            }
        }
        store
    }
}

fn sort_by_time(entries: &mut [FoodEntry]) {
    entries.sort_by(|a, b| {
        (a.entry_date, a.entry_time, a.id).cmp(&(b.entry_date, b.entry_time, b.id))
    });
}

#[async_trait]
impl NutritionStore for InMemoryStore {
    async fn get_profile(&self, user_id: Uuid) -> AppResult<Option<UserProfile>> {
        Ok(self.profiles.read().await.get(&user_id).cloned())
    }

    async fn upsert_profile(&self, profile: UserProfile) -> AppResult<()> {
        self.profiles.write().await.insert(profile.user_id, profile);
        Ok(())
    }

    async fn insert_entry(&self, entry: FoodEntry) -> AppResult<()> {
        let mut entries = self.entries.write().await;
        if entries.contains_key(&entry.id) {
            return Err(AppError::new(
                ErrorCode::ResourceAlreadyExists,
                format!("Food entry {} already exists", entry.id),
            ));
        }
        entries.insert(entry.id, entry);
        Ok(())
    }

    async fn get_entry(&self, user_id: Uuid, entry_id: Uuid) -> AppResult<Option<FoodEntry>> {
        Ok(self
            .entries
            .read()
            .await
            .get(&entry_id)
            .filter(|e| e.user_id == user_id)
            .cloned())
    }

    async fn update_entry(&self, entry: FoodEntry) -> AppResult<()> {
        let mut entries = self.entries.write().await;
        match entries.get_mut(&entry.id) {
            Some(existing) if existing.user_id == entry.user_id => {
                *existing = entry;
                Ok(())
            }
            _ => Err(AppError::not_found("Food entry").with_resource_id(entry.id.to_string())),
        }
    }

    async fn entries_for_date(&self, user_id: Uuid, date: NaiveDate) -> AppResult<Vec<FoodEntry>> {
        self.entries_in_range(user_id, date, date).await
    }

    async fn entries_in_range(
        &self,
        user_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<FoodEntry>> {
        let mut found: Vec<FoodEntry> = self
            .entries
            .read()
            .await
            .values()
            .filter(|e| {
                e.user_id == user_id && !e.is_deleted && (start..=end).contains(&e.entry_date)
            })
            .cloned()
            .collect();
        sort_by_time(&mut found);
        Ok(found)
    }

    async fn upsert_summary(&self, summary: DailySummary) -> AppResult<()> {
        self.summaries
            .write()
            .await
            .insert((summary.user_id, summary.summary_date), summary);
        Ok(())
    }

    async fn delete_summary(&self, user_id: Uuid, date: NaiveDate) -> AppResult<()> {
        self.summaries.write().await.remove(&(user_id, date));
        Ok(())
    }

    async fn get_summary(
        &self,
        user_id: Uuid,
        date: NaiveDate,
    ) -> AppResult<Option<DailySummary>> {
        Ok(self.summaries.read().await.get(&(user_id, date)).cloned())
    }

    async fn summaries_in_range(
        &self,
        user_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<DailySummary>> {
        if start > end {
            return Ok(Vec::new());
        }
        Ok(self
            .summaries
            .read()
            .await
            .range((user_id, start)..=(user_id, end))
            .map(|(_, summary)| summary.clone())
            .collect())
    }

    async fn insert_template(&self, template: MealTemplate) -> AppResult<()> {
        self.templates.write().await.insert(template.id, template);
        Ok(())
    }

    async fn get_template(
        &self,
        user_id: Uuid,
        template_id: Uuid,
    ) -> AppResult<Option<MealTemplate>> {
        Ok(self
            .templates
            .read()
            .await
            .get(&template_id)
            .filter(|t| t.user_id == user_id)
            .cloned())
    }

    async fn templates_for_user(&self, user_id: Uuid) -> AppResult<Vec<MealTemplate>> {
        let mut templates: Vec<MealTemplate> = self
            .templates
            .read()
            .await
            .values()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .collect();
        templates.sort_by(|a, b| {
            b.usage_count
                .cmp(&a.usage_count)
                .then_with(|| a.name.cmp(&b.name))
        });
        Ok(templates)
    }

    async fn increment_template_usage(
        &self,
        user_id: Uuid,
        template_id: Uuid,
        at: DateTime<Utc>,
    ) -> AppResult<MealTemplate> {
        // Read-modify-write under one write guard
        let mut templates = self.templates.write().await;
        match templates.get_mut(&template_id) {
            Some(template) if template.user_id == user_id => {
                template.record_use(at);
                Ok(template.clone())
            }
            _ => Err(AppError::not_found("Meal template")
                .with_user_id(user_id)
                .with_resource_id(template_id.to_string())),
        }
    }

    async fn insert_digest(&self, digest: WeeklyDigest) -> AppResult<()> {
        self.digests.write().await.push(digest);
        Ok(())
    }

    async fn latest_digest(&self, user_id: Uuid) -> AppResult<Option<WeeklyDigest>> {
        Ok(self
            .digests
            .read()
            .await
            .iter()
            .filter(|d| d.user_id() == user_id)
            .max_by_key(|d| (d.week_start(), d.created_at()))
            .cloned())
    }
}
