// ABOUTME: Core types and constants for the nutrisnap nutrition tracker
// ABOUTME: Foundation crate with error handling, domain records, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutrisnap Core
//!
//! Foundation crate providing shared types and constants for the nutrisnap
//! nutrition tracker. The analytics engines and the application crate both
//! build on these records; nothing here performs I/O.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Nutrition constants and report defaults
//! - **models**: Food entries, daily summaries, templates, profiles, digests

/// Unified error handling system with standard error codes
pub mod errors;

/// Nutrition and reporting constants organized by domain
pub mod constants;

/// Domain records consumed and produced by the analytics engines
pub mod models;
