// ABOUTME: Core data models for the nutrisnap nutrition tracker
// ABOUTME: Re-exports food entries, daily summaries, templates, profiles, and digests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Every record belongs to exactly one user. The analytics engines treat these
//! as plain inputs and outputs; lifecycle and storage belong to the
//! persistence collaborator.
//!
//! - `FoodEntry`: one logged meal or snack, with estimated and overridden macros
//! - `DailySummary`: per-day totals rebuilt from that day's entries
//! - `MealTemplate`: reusable preset with a monotonically increasing usage count
//! - `UserProfile`: calorie target and macro target split
//! - `WeeklyDigest`: immutable snapshot of one week's statistics

mod entry;
mod profile;
mod summary;

pub use entry::{
    FinalMacros, FoodEntry, MacroEstimate, MacroOverride, MacroValue, MealType, NewFoodEntry,
    SourceType,
};
pub use profile::{MacroTargets, MealTemplate, NewMealTemplate, TargetMethod, UserProfile};
pub use summary::{DailySummary, DigestContent, MacroPercentages, WeeklyDigest};
