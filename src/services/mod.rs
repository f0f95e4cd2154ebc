// ABOUTME: Domain service layer orchestrating storage, vision, and mail collaborators
// ABOUTME: Food-log mutations with summary upkeep, and weekly digest generation and delivery
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! Services own their collaborators as explicitly injected trait objects and
//! contain no I/O of their own beyond calling them.

/// Weekly digest generation and delivery
pub mod digest;

/// Food-log workflow and progress view
pub mod food_log;

pub use digest::{DigestDelivery, DigestService};
pub use food_log::{
    EntrySlot, FoodLogService, ImageLogResult, ManualEntryInput, ProgressSnapshot,
};
