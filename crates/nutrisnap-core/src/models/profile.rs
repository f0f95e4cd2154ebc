// ABOUTME: User profile and meal template models
// ABOUTME: Calorie target, target derivation method, macro split, and reusable presets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::entry::{MacroEstimate, MealType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How the user's daily calorie target was chosen
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TargetMethod {
    /// Entered directly by the user
    #[default]
    Manual,
    /// Derived from the TDEE calculator
    TdeeCalculated,
    /// Provided by a dietitian or coach
    Professional,
}

impl TargetMethod {
    /// Wire name of the method
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Manual => "manual",
            Self::TdeeCalculated => "tdee_calculated",
            Self::Professional => "professional",
        }
    }
}

/// Macro target split as percentages of daily calories
///
/// Expected to sum to 100; a mismatch is reported as a warning, not rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroTargets {
    /// Protein share (percent)
    pub protein_pct: f64,
    /// Carbohydrate share (percent)
    pub carbs_pct: f64,
    /// Fat share (percent)
    pub fat_pct: f64,
}

impl Default for MacroTargets {
    fn default() -> Self {
        Self {
            protein_pct: 30.0,
            carbs_pct: 40.0,
            fat_pct: 30.0,
        }
    }
}

/// User profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Owner of the profile
    pub user_id: Uuid,
    /// Name shown in reports and digests
    pub display_name: String,
    /// Daily calorie target (kcal)
    pub daily_calorie_target: f64,
    /// How the target was derived
    #[serde(default)]
    pub target_method: TargetMethod,
    /// Macro target split
    #[serde(default)]
    pub macro_targets: MacroTargets,
}

/// Reusable meal preset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealTemplate {
    /// Template identifier
    pub id: Uuid,
    /// Owner of the template
    pub user_id: Uuid,
    /// Template name, also used as the entry description
    pub name: String,
    /// Default meal slot
    pub meal_type: MealType,
    /// Portion size as free text
    pub portion_description: Option<String>,
    /// Stored macros
    pub macros: MacroEstimate,
    /// Number of entries created from this template
    pub usage_count: u32,
    /// Last time the template was used
    pub last_used_at: Option<DateTime<Utc>>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl MealTemplate {
    /// Create a template that has never been used
    #[must_use]
    pub fn new(new: NewMealTemplate, id: Uuid, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            user_id: new.user_id,
            name: new.name,
            meal_type: new.meal_type,
            portion_description: new.portion_description,
            macros: new.macros,
            usage_count: 0,
            last_used_at: None,
            created_at,
        }
    }

    /// Record one use: the counter goes up by exactly one and never decrements
    pub fn record_use(&mut self, at: DateTime<Utc>) {
        self.usage_count = self.usage_count.saturating_add(1);
        self.last_used_at = Some(at);
    }
}

/// Input for creating a meal template
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMealTemplate {
    /// Owner of the template
    pub user_id: Uuid,
    /// Template name
    pub name: String,
    /// Default meal slot
    pub meal_type: MealType,
    /// Portion size as free text
    #[serde(default)]
    pub portion_description: Option<String>,
    /// Stored macros
    pub macros: MacroEstimate,
}
