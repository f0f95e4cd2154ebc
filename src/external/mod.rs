// ABOUTME: External collaborator boundaries for meal photo analysis and digest email delivery
// ABOUTME: Async traits with typed outcomes plus in-process implementations for tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! External Collaborators
//!
//! Providers are injected as trait objects so the food-log and digest
//! services never reach a network client directly.

/// Digest email delivery
pub mod mailer;
/// Meal photo nutrition estimation
pub mod vision;

pub use mailer::{DigestMailer, MailOutcome, RecordingMailer, SentDigest};
pub use vision::{
    image_media_type, parse_vision_response, ConfidenceBand, FoodItem, MockVisionAnalyzer,
    VisionAnalyzer, VisionEstimate, VisionMacros, VisionOutcome,
};
