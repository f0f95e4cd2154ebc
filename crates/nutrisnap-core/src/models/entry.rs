// ABOUTME: Food entry model with estimated and manually overridden macro values
// ABOUTME: MealType, SourceType, MacroValue resolution, and entry finalization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Type of meal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    Dinner,
    /// Snack between meals
    Snack,
    /// Unspecified or other meal type
    Other,
}

impl MealType {
    /// Parse meal type from string
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Self::Breakfast,
            "lunch" => Self::Lunch,
            "dinner" => Self::Dinner,
            "snack" | "snacks" => Self::Snack,
            _ => Self::Other,
        }
    }

    /// Display label used in exports
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::Lunch => "Lunch",
            Self::Dinner => "Dinner",
            Self::Snack => "Snack",
            Self::Other => "Other",
        }
    }
}

/// How a food entry was created
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    /// Estimated from a meal photo by the vision provider
    ImageUpload,
    /// Copied from a saved meal template
    Template,
    /// Typed in by the user
    ManualEntry,
}

impl SourceType {
    /// Wire name of the source type
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ImageUpload => "image_upload",
            Self::Template => "template",
            Self::ManualEntry => "manual_entry",
        }
    }
}

/// Macro estimate produced by the vision provider or copied from a template
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroEstimate {
    /// Estimated calories (kcal)
    pub calories: Option<f64>,
    /// Estimated protein (grams)
    pub protein_g: Option<f64>,
    /// Estimated carbohydrates (grams)
    pub carbs_g: Option<f64>,
    /// Estimated fat (grams)
    pub fat_g: Option<f64>,
    /// Estimated fiber (grams)
    pub fiber_g: Option<f64>,
    /// Estimated sugar (grams)
    pub sugar_g: Option<f64>,
}

/// User-supplied corrections; `None` keeps the estimate for that macro
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroOverride {
    /// Corrected calories (kcal)
    pub calories: Option<f64>,
    /// Corrected protein (grams)
    pub protein_g: Option<f64>,
    /// Corrected carbohydrates (grams)
    pub carbs_g: Option<f64>,
    /// Corrected fat (grams)
    pub fat_g: Option<f64>,
}

impl MacroOverride {
    /// True when no macro is overridden
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.calories.is_none()
            && self.protein_g.is_none()
            && self.carbs_g.is_none()
            && self.fat_g.is_none()
    }
}

/// Resolved value of a single macro: the manual override wins, else the estimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", content = "value", rename_all = "snake_case")]
pub enum MacroValue {
    /// Value taken from the estimate (may be missing)
    Estimated(Option<f64>),
    /// Value taken from a manual override
    Overridden(f64),
}

impl MacroValue {
    /// Resolve a macro from its estimate and optional manual override
    #[must_use]
    pub const fn resolve(estimated: Option<f64>, manual: Option<f64>) -> Self {
        match manual {
            Some(value) => Self::Overridden(value),
            None => Self::Estimated(estimated),
        }
    }

    /// Final value, `None` when neither estimate nor override exists
    #[must_use]
    pub const fn value(&self) -> Option<f64> {
        match self {
            Self::Estimated(value) => *value,
            Self::Overridden(value) => Some(*value),
        }
    }

    /// Final value with missing treated as zero, as used by summation
    #[must_use]
    pub fn value_or_zero(&self) -> f64 {
        self.value().unwrap_or(0.0)
    }

    /// Whether the value came from a manual override
    #[must_use]
    pub const fn is_overridden(&self) -> bool {
        matches!(self, Self::Overridden(_))
    }
}

/// Final macro values fixed when an entry is written
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinalMacros {
    /// Final calories
    pub calories: MacroValue,
    /// Final protein (grams)
    pub protein_g: MacroValue,
    /// Final carbohydrates (grams)
    pub carbs_g: MacroValue,
    /// Final fat (grams)
    pub fat_g: MacroValue,
}

impl FinalMacros {
    /// Resolve every macro once from the estimate and the override
    #[must_use]
    pub const fn resolve(estimated: &MacroEstimate, manual: &MacroOverride) -> Self {
        Self {
            calories: MacroValue::resolve(estimated.calories, manual.calories),
            protein_g: MacroValue::resolve(estimated.protein_g, manual.protein_g),
            carbs_g: MacroValue::resolve(estimated.carbs_g, manual.carbs_g),
            fat_g: MacroValue::resolve(estimated.fat_g, manual.fat_g),
        }
    }

    /// Whether any macro was manually overridden
    #[must_use]
    pub const fn any_overridden(&self) -> bool {
        self.calories.is_overridden()
            || self.protein_g.is_overridden()
            || self.carbs_g.is_overridden()
            || self.fat_g.is_overridden()
    }
}

/// Input for creating a food entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewFoodEntry {
    /// Owner of the entry
    pub user_id: Uuid,
    /// Day the food was eaten
    pub entry_date: NaiveDate,
    /// Time of day the food was eaten
    pub entry_time: NaiveTime,
    /// Meal slot
    pub meal_type: MealType,
    /// What was eaten
    pub food_description: String,
    /// Portion size as free text
    #[serde(default)]
    pub portion_description: Option<String>,
    /// Estimated macros
    #[serde(default)]
    pub estimated: MacroEstimate,
    /// Manual corrections
    #[serde(default)]
    pub manual: MacroOverride,
    /// How the entry was created
    pub source_type: SourceType,
    /// Vision provider confidence in [0, 1]
    #[serde(default)]
    pub confidence: Option<f64>,
    /// Free-text notes
    #[serde(default)]
    pub notes: Option<String>,
    /// Template the entry was created from
    #[serde(default)]
    pub template_id: Option<Uuid>,
}

/// One logged meal or snack
///
/// `final_macros` is resolved when the entry is created or corrected and is
/// never re-derived at read sites.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodEntry {
    /// Entry identifier
    pub id: Uuid,
    /// Owner of the entry
    pub user_id: Uuid,
    /// Day the food was eaten
    pub entry_date: NaiveDate,
    /// Time of day the food was eaten
    pub entry_time: NaiveTime,
    /// Meal slot
    pub meal_type: MealType,
    /// What was eaten
    pub food_description: String,
    /// Portion size as free text
    pub portion_description: Option<String>,
    /// Estimated macros
    pub estimated: MacroEstimate,
    /// Manual corrections
    pub manual: MacroOverride,
    /// Resolved macro values
    pub final_macros: FinalMacros,
    /// Whether any macro was manually overridden
    pub was_manually_adjusted: bool,
    /// How the entry was created
    pub source_type: SourceType,
    /// Vision provider confidence in [0, 1]
    pub confidence: Option<f64>,
    /// Free-text notes
    pub notes: Option<String>,
    /// Template the entry was created from
    pub template_id: Option<Uuid>,
    /// Soft-delete flag; deleted entries are kept but excluded from totals
    pub is_deleted: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

impl FoodEntry {
    /// Finalize a new entry, resolving its macro values
    #[must_use]
    pub fn finalize(new: NewFoodEntry, id: Uuid, created_at: DateTime<Utc>) -> Self {
        let final_macros = FinalMacros::resolve(&new.estimated, &new.manual);
        Self {
            id,
            user_id: new.user_id,
            entry_date: new.entry_date,
            entry_time: new.entry_time,
            meal_type: new.meal_type,
            food_description: new.food_description,
            portion_description: new.portion_description,
            estimated: new.estimated,
            manual: new.manual,
            final_macros,
            was_manually_adjusted: final_macros.any_overridden(),
            source_type: new.source_type,
            confidence: new.confidence,
            notes: new.notes,
            template_id: new.template_id,
            is_deleted: false,
            created_at,
            updated_at: created_at,
        }
    }

    /// Replace the manual override and re-resolve the final values
    pub fn apply_override(&mut self, manual: MacroOverride, at: DateTime<Utc>) {
        self.manual = manual;
        self.final_macros = FinalMacros::resolve(&self.estimated, &self.manual);
        self.was_manually_adjusted = self.final_macros.any_overridden();
        self.updated_at = at;
    }

    /// Flag the entry as deleted without removing it
    pub fn soft_delete(&mut self, at: DateTime<Utc>) {
        self.is_deleted = true;
        self.updated_at = at;
    }

    /// Final calories, zero when unknown
    #[must_use]
    pub fn final_calories(&self) -> f64 {
        self.final_macros.calories.value_or_zero()
    }

    /// Final protein grams, zero when unknown
    #[must_use]
    pub fn final_protein_g(&self) -> f64 {
        self.final_macros.protein_g.value_or_zero()
    }

    /// Final carbohydrate grams, zero when unknown
    #[must_use]
    pub fn final_carbs_g(&self) -> f64 {
        self.final_macros.carbs_g.value_or_zero()
    }

    /// Final fat grams, zero when unknown
    #[must_use]
    pub fn final_fat_g(&self) -> f64 {
        self.final_macros.fat_g.value_or_zero()
    }
}
