// ABOUTME: Food-log workflow: logging from photos, templates, and manual input, plus corrections
// ABOUTME: Every mutation rebuilds that day's summary under a per-(user, date) lock
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::AnalyticsConfig;
use crate::external::vision::{ConfidenceBand, VisionAnalyzer, VisionEstimate, VisionOutcome};
use crate::storage::NutritionStore;
use crate::validation::{
    check_macro_targets, validate_biometrics, validate_calorie_target, ValidationWarning,
};
use chrono::{Duration, NaiveDate, NaiveTime, Utc};
use dashmap::DashMap;
use nutrisnap_core::errors::{AppError, AppResult};
use nutrisnap_core::models::{
    DailySummary, FoodEntry, MacroEstimate, MacroOverride, MealTemplate, MealType, NewFoodEntry,
    NewMealTemplate, SourceType, TargetMethod, UserProfile,
};
use nutrisnap_intelligence::units::week_bounds;
use nutrisnap_intelligence::{
    aggregate_daily, calculate_tdee_profile, calorie_trend, longest_streak, streak,
    summary_variance, weekly_aggregate, CalorieVariance, Goal, TdeeParams, TdeeResult,
    TrendPoint, WeeklyAggregate,
};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// When and where a new entry lands in the log
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntrySlot {
    /// Owner of the entry
    pub user_id: Uuid,
    /// Day the food was eaten
    pub entry_date: NaiveDate,
    /// Time of day the food was eaten
    pub entry_time: NaiveTime,
    /// Meal slot
    pub meal_type: MealType,
}

/// Manually typed entry
#[derive(Debug, Clone, Default)]
pub struct ManualEntryInput {
    /// What was eaten
    pub food_description: String,
    /// Portion size as free text
    pub portion_description: Option<String>,
    /// Typed nutrition values
    pub macros: MacroEstimate,
    /// Free-text notes
    pub notes: Option<String>,
}

/// Entry created from a photo, with the estimate it was built from
#[derive(Debug, Clone)]
pub struct ImageLogResult {
    /// Stored entry
    pub entry: FoodEntry,
    /// Vision estimate
    pub estimate: VisionEstimate,
    /// Informational confidence band
    pub band: ConfidenceBand,
}

/// Progress view for a dashboard
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressSnapshot {
    /// Consecutive logged days ending today or yesterday
    pub streak: u32,
    /// Longest run of consecutive logged days in the lookback window
    pub longest_streak: u32,
    /// Calorie trend over the lookback window
    pub trend: Vec<TrendPoint>,
    /// Statistics for the Monday-Sunday week containing today
    pub week: WeeklyAggregate,
    /// Today's summary, if anything is logged
    pub today: Option<DailySummary>,
    /// Variance of today's summary against its target
    pub today_variance: Option<CalorieVariance>,
}

/// Food-log workflow service
pub struct FoodLogService {
    store: Arc<dyn NutritionStore>,
    vision: Arc<dyn VisionAnalyzer>,
    config: AnalyticsConfig,
    day_locks: DashMap<(Uuid, NaiveDate), Arc<Mutex<()>>>,
}

impl FoodLogService {
    /// Create a service over explicitly injected collaborators
    #[must_use]
    pub fn new(
        store: Arc<dyn NutritionStore>,
        vision: Arc<dyn VisionAnalyzer>,
        config: AnalyticsConfig,
    ) -> Self {
        Self {
            store,
            vision,
            config,
            day_locks: DashMap::new(),
        }
    }

    // ================================
    // Profile and targets
    // ================================

    /// Save a profile after checking its target and macro split
    ///
    /// A macro split that does not sum to 100% is saved and reported as a
    /// warning.
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` for a non-positive calorie target, or a
    /// storage error
    pub async fn save_profile(&self, profile: UserProfile) -> AppResult<Vec<ValidationWarning>> {
        validate_calorie_target(profile.daily_calorie_target)?;
        let warnings = check_macro_targets(&profile.macro_targets);
        self.store.upsert_profile(profile).await?;
        Ok(warnings)
    }

    /// Set a user's calorie target from the TDEE calculator
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` for biometrics outside accepted ranges or a
    /// goal that leaves no positive target, and `ResourceNotFound` when the
    /// user has no profile
    pub async fn apply_tdee_target(
        &self,
        user_id: Uuid,
        params: &TdeeParams,
        goal: Goal,
    ) -> AppResult<(UserProfile, TdeeResult)> {
        validate_biometrics(params.weight_kg, params.height_cm, params.age_years)?;
        let mut profile = self.require_profile(user_id).await?;

        let result = calculate_tdee_profile(params);
        let target = result.targets.for_goal(goal) as f64;
        validate_calorie_target(target)?;
        profile.daily_calorie_target = target;
        profile.target_method = TargetMethod::TdeeCalculated;
        self.store.upsert_profile(profile.clone()).await?;

        info!(
            user.id = %user_id,
            tdee = result.tdee,
            target = profile.daily_calorie_target,
            "calorie target set from TDEE"
        );
        Ok((profile, result))
    }

    /// Save a reusable meal preset
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a blank name, or a storage error
    pub async fn create_template(&self, new: NewMealTemplate) -> AppResult<MealTemplate> {
        if new.name.trim().is_empty() {
            return Err(AppError::invalid_input("Template name is required"));
        }
        let template = MealTemplate::new(new, Uuid::new_v4(), Utc::now());
        self.store.insert_template(template.clone()).await?;
        Ok(template)
    }

    // ================================
    // Logging
    // ================================

    /// Log a meal from a photo using the vision estimate
    ///
    /// `overrides` are applied on top of the estimate, as when the user
    /// corrects the numbers before saving.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when the user has no profile,
    /// `ExternalServiceError` when the vision provider fails, or a storage
    /// error
    pub async fn log_from_image(
        &self,
        slot: EntrySlot,
        image: &[u8],
        filename: &str,
        context: Option<&str>,
        overrides: MacroOverride,
    ) -> AppResult<ImageLogResult> {
        self.require_profile(slot.user_id).await?;
        let estimate = match self.vision.analyze(image, filename, context).await {
            VisionOutcome::Success(estimate) => estimate,
            VisionOutcome::Failure { error } => {
                warn!(user.id = %slot.user_id, error = %error, "vision analysis failed");
                return Err(AppError::external_service("vision", error).with_user_id(slot.user_id));
            }
        };

        let food_description = if estimate.description.trim().is_empty() {
            estimate
                .food_items
                .iter()
                .map(|item| item.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        } else {
            estimate.description.clone()
        };
        let portion_description = match estimate.food_items.as_slice() {
            [single] if !single.portion.is_empty() => Some(single.portion.clone()),
            _ => None,
        };

        let entry = self
            .insert_and_recompute(NewFoodEntry {
                user_id: slot.user_id,
                entry_date: slot.entry_date,
                entry_time: slot.entry_time,
                meal_type: slot.meal_type,
                food_description,
                portion_description,
                estimated: estimate.to_macro_estimate(),
                manual: overrides,
                source_type: SourceType::ImageUpload,
                confidence: Some(estimate.confidence),
                notes: (!estimate.notes.is_empty()).then(|| estimate.notes.clone()),
                template_id: None,
            })
            .await?;

        let band = estimate.confidence_band();
        Ok(ImageLogResult {
            entry,
            estimate,
            band,
        })
    }

    /// Log a meal by copying a saved template
    ///
    /// The template's usage count goes up by exactly one, and only once the
    /// entry is stored.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when the user has no profile or the template
    /// does not belong to the user, or a storage error
    pub async fn log_from_template(&self, slot: EntrySlot, template_id: Uuid) -> AppResult<FoodEntry> {
        self.require_profile(slot.user_id).await?;
        let template = self
            .store
            .get_template(slot.user_id, template_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Meal template")
                    .with_user_id(slot.user_id)
                    .with_resource_id(template_id.to_string())
            })?;

        let entry = FoodEntry::finalize(
            NewFoodEntry {
                user_id: slot.user_id,
                entry_date: slot.entry_date,
                entry_time: slot.entry_time,
                meal_type: slot.meal_type,
                food_description: template.name,
                portion_description: template.portion_description,
                estimated: template.macros,
                manual: MacroOverride::default(),
                source_type: SourceType::Template,
                confidence: None,
                notes: None,
                template_id: Some(template.id),
            },
            Uuid::new_v4(),
            Utc::now(),
        );
        self.store.insert_entry(entry.clone()).await?;

        let used = self
            .store
            .increment_template_usage(slot.user_id, template_id, Utc::now())
            .await?;
        debug!(
            template.id = %template_id,
            template.usage_count = used.usage_count,
            "template used"
        );

        self.recompute_daily_summary(entry.user_id, entry.entry_date)
            .await?;
        log_entry(&entry);
        Ok(entry)
    }

    /// Log a manually typed meal
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a blank description or negative values,
    /// `ResourceNotFound` when the user has no profile, or a storage error
    pub async fn log_manual(&self, slot: EntrySlot, input: ManualEntryInput) -> AppResult<FoodEntry> {
        if input.food_description.trim().is_empty() {
            return Err(AppError::invalid_input("Food description is required"));
        }
        let typed = [
            input.macros.calories,
            input.macros.protein_g,
            input.macros.carbs_g,
            input.macros.fat_g,
        ];
        if typed.iter().flatten().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(AppError::invalid_input(
                "Nutrition values must be zero or positive",
            ));
        }

        self.insert_and_recompute(NewFoodEntry {
            user_id: slot.user_id,
            entry_date: slot.entry_date,
            entry_time: slot.entry_time,
            meal_type: slot.meal_type,
            food_description: input.food_description,
            portion_description: input.portion_description,
            estimated: input.macros,
            manual: MacroOverride::default(),
            source_type: SourceType::ManualEntry,
            confidence: None,
            notes: input.notes,
            template_id: None,
        })
        .await
    }

    /// Replace the manual override on an entry
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for a missing or deleted entry, or a
    /// storage error
    pub async fn apply_override(
        &self,
        user_id: Uuid,
        entry_id: Uuid,
        manual: MacroOverride,
    ) -> AppResult<FoodEntry> {
        let mut entry = self.require_live_entry(user_id, entry_id).await?;
        entry.apply_override(manual, Utc::now());
        self.store.update_entry(entry.clone()).await?;
        self.recompute_daily_summary(user_id, entry.entry_date)
            .await?;
        Ok(entry)
    }

    /// Soft-delete an entry and rebuild its day
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for a missing or already deleted entry, or
    /// a storage error
    pub async fn delete_entry(&self, user_id: Uuid, entry_id: Uuid) -> AppResult<()> {
        let mut entry = self.require_live_entry(user_id, entry_id).await?;
        entry.soft_delete(Utc::now());
        let date = entry.entry_date;
        self.store.update_entry(entry).await?;
        self.recompute_daily_summary(user_id, date).await?;
        info!(user.id = %user_id, entry.id = %entry_id, "food entry deleted");
        Ok(())
    }

    /// Rebuild one day's summary from its full set of live entries
    ///
    /// Idempotent. Calls for the same (user, date) run one at a time. A day
    /// left with no live entries loses its summary and returns `None`. An
    /// existing summary keeps the calorie target it was created with; a day's
    /// first summary takes the profile's current target.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when the user has no profile, or a storage
    /// error
    pub async fn recompute_daily_summary(
        &self,
        user_id: Uuid,
        date: NaiveDate,
    ) -> AppResult<Option<DailySummary>> {
        let key = (user_id, date);
        let lock = self.day_locks.entry(key).or_default().clone();
        let result = {
            let _guard = lock.lock().await;
            self.rebuild_day(user_id, date).await
        };
        drop(lock);
        self.day_locks
            .remove_if(&key, |_, lock| Arc::strong_count(lock) == 1);
        result
    }

    /// Number of (user, date) recompute locks currently held or awaited
    #[must_use]
    pub fn active_day_locks(&self) -> usize {
        self.day_locks.len()
    }

    async fn rebuild_day(&self, user_id: Uuid, date: NaiveDate) -> AppResult<Option<DailySummary>> {
        let profile = self.require_profile(user_id).await?;
        let entries = self.store.entries_for_date(user_id, date).await?;

        if entries.is_empty() {
            self.store.delete_summary(user_id, date).await?;
            debug!(user.id = %user_id, summary.date = %date, "no live entries, summary removed");
            return Ok(None);
        }

        let calorie_target = self
            .store
            .get_summary(user_id, date)
            .await?
            .map_or(profile.daily_calorie_target, |existing| existing.calorie_target);
        let summary = aggregate_daily(user_id, date, calorie_target, &entries);
        self.store.upsert_summary(summary.clone()).await?;
        Ok(Some(summary))
    }

    // ================================
    // Progress
    // ================================

    /// Streaks, trend, and this week's statistics as of `today`
    ///
    /// # Errors
    ///
    /// Returns a storage error
    pub async fn progress(&self, user_id: Uuid, today: NaiveDate) -> AppResult<ProgressSnapshot> {
        let lookback_start = today - Duration::days(self.config.trends.streak_lookback_days - 1);
        let (monday, sunday) = week_bounds(today);
        let range_start = lookback_start.min(monday);
        let range_end = today.max(sunday);

        let summaries = self
            .store
            .summaries_in_range(user_id, range_start, range_end)
            .await?;

        let window: Vec<DailySummary> = summaries
            .iter()
            .filter(|s| (lookback_start..=today).contains(&s.summary_date))
            .cloned()
            .collect();
        let dates: Vec<NaiveDate> = window.iter().map(|s| s.summary_date).collect();

        let week: Vec<DailySummary> = summaries
            .iter()
            .filter(|s| (monday..=sunday).contains(&s.summary_date))
            .cloned()
            .collect();

        let today_summary = summaries.iter().find(|s| s.summary_date == today).cloned();
        let today_variance = today_summary.as_ref().map(summary_variance);

        Ok(ProgressSnapshot {
            streak: streak(&dates, today),
            longest_streak: longest_streak(&dates),
            trend: calorie_trend(&window, self.config.trends.rolling_window),
            week: weekly_aggregate(&week),
            today: today_summary,
            today_variance,
        })
    }

    async fn insert_and_recompute(&self, new: NewFoodEntry) -> AppResult<FoodEntry> {
        self.require_profile(new.user_id).await?;
        let entry = FoodEntry::finalize(new, Uuid::new_v4(), Utc::now());
        self.store.insert_entry(entry.clone()).await?;
        self.recompute_daily_summary(entry.user_id, entry.entry_date)
            .await?;
        log_entry(&entry);
        Ok(entry)
    }

    async fn require_profile(&self, user_id: Uuid) -> AppResult<UserProfile> {
        self.store
            .get_profile(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User profile").with_user_id(user_id))
    }

    async fn require_live_entry(&self, user_id: Uuid, entry_id: Uuid) -> AppResult<FoodEntry> {
        self.store
            .get_entry(user_id, entry_id)
            .await?
            .filter(|e| !e.is_deleted)
            .ok_or_else(|| {
                AppError::not_found("Food entry")
                    .with_user_id(user_id)
                    .with_resource_id(entry_id.to_string())
            })
    }
}

fn log_entry(entry: &FoodEntry) {
    info!(
        user.id = %entry.user_id,
        entry.id = %entry.id,
        entry.source = entry.source_type.as_str(),
        entry.calories = entry.final_calories(),
        "food entry logged"
    );
}
