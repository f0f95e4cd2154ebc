// ABOUTME: Main library entry point for the nutrisnap nutrition tracker
// ABOUTME: Exports, weekly digests, collaborator boundaries, and the food-log services
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutrisnap
//!
//! Calorie and macro tracking built on two foundation crates:
//!
//! - `nutrisnap-core`: domain records, error codes, and constants
//! - `nutrisnap-intelligence`: TDEE, variance, aggregation, and streak engines
//!
//! This crate adds the application layer:
//!
//! - **reports**: CSV, XLSX, PDF, and HTML exports over a date range
//! - **digest**: weekly digest snapshots and their email bodies
//! - **external**: vision and mail collaborator traits with test doubles
//! - **storage**: persistence trait and an in-memory implementation
//! - **services**: food-log workflow and digest delivery
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use nutrisnap::intelligence::{calculate_tdee_profile, ActivityLevel, Gender, TdeeParams};
//!
//! let result = calculate_tdee_profile(&TdeeParams {
//!     weight_kg: 70.0,
//!     height_cm: 170.0,
//!     age_years: 30,
//!     gender: Gender::Male,
//!     activity_level: ActivityLevel::Sedentary,
//! });
//! println!("BMR {} kcal, TDEE {} kcal", result.bmr, result.tdee);
//! ```

/// Offline data bundle consumed by the CLI
pub mod bundle;

/// Analytics configuration with environment overrides
pub mod config;

/// Weekly digest composition and rendering
pub mod digest;

/// Vision and mail collaborators
pub mod external;

/// Structured logging setup
pub mod logging;

/// Export and report composer
pub mod reports;

/// Domain services
pub mod services;

/// Persistence collaborator
pub mod storage;

/// Input validation for profiles and biometrics
pub mod validation;

pub use nutrisnap_core::{constants, errors, models};

/// Analytics engines
pub use nutrisnap_intelligence as intelligence;
