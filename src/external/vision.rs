// ABOUTME: Vision analysis collaborator contract and tolerant parsing of model responses
// ABOUTME: Typed success/failure outcome, confidence bands, and a mock analyzer for tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Vision Analysis Boundary
//!
//! The vision provider estimates nutrition from a meal photo. Its failures
//! come back as [`VisionOutcome::Failure`] rather than an error so callers
//! can surface the message without aborting report generation.
//!
//! Confidence bands are informational only:
//!
//! | Confidence  | Band      |
//! |-------------|-----------|
//! | >= 0.85     | Clear     |
//! | 0.70 - 0.85 | Good      |
//! | 0.50 - 0.70 | Uncertain |
//! | < 0.50      | Low       |

use async_trait::async_trait;
use nutrisnap_core::models::MacroEstimate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{debug, warn};

/// Confidence assumed when the model omits one
const DEFAULT_CONFIDENCE: f64 = 0.5;

/// One food item recognized in the photo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    /// Item name
    #[serde(default)]
    pub name: String,
    /// Estimated portion as free text
    #[serde(default)]
    pub portion: String,
    /// Estimated calories for this item
    #[serde(default)]
    pub calories: f64,
}

/// Macro estimate block of a vision response
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisionMacros {
    /// Protein (grams)
    pub protein_g: f64,
    /// Carbohydrates (grams)
    pub carbs_g: f64,
    /// Fat (grams)
    pub fat_g: f64,
    /// Fiber (grams)
    pub fiber_g: f64,
    /// Sugar (grams)
    pub sugar_g: f64,
}

/// Successful vision estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisionEstimate {
    /// Recognized items
    pub food_items: Vec<FoodItem>,
    /// Total calories of the meal
    pub total_calories: f64,
    /// Macro totals
    pub macros: VisionMacros,
    /// Model confidence, clamped to [0, 1]
    pub confidence: f64,
    /// Short meal description
    pub description: String,
    /// Estimation notes
    pub notes: String,
    /// Parsed JSON exactly as returned by the model
    pub raw_response: Value,
}

impl VisionEstimate {
    /// Macro estimate to store on a food entry
    #[must_use]
    pub const fn to_macro_estimate(&self) -> MacroEstimate {
        MacroEstimate {
            calories: Some(self.total_calories),
            protein_g: Some(self.macros.protein_g),
            carbs_g: Some(self.macros.carbs_g),
            fat_g: Some(self.macros.fat_g),
            fiber_g: Some(self.macros.fiber_g),
            sugar_g: Some(self.macros.sugar_g),
        }
    }

    /// Informational confidence band
    #[must_use]
    pub fn confidence_band(&self) -> ConfidenceBand {
        ConfidenceBand::from_confidence(self.confidence)
    }
}

/// Result of a vision analysis call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum VisionOutcome {
    /// Estimate produced
    Success(VisionEstimate),
    /// Provider or parsing failure
    Failure {
        /// User-facing failure message
        error: String,
    },
}

impl VisionOutcome {
    /// Build a failure outcome
    pub fn failure(error: impl Into<String>) -> Self {
        Self::Failure {
            error: error.into(),
        }
    }
}

/// Informational confidence bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceBand {
    /// Clear image, common foods, visible portion cues
    Clear,
    /// Some portion estimation required
    Good,
    /// Unclear portions or mixed dishes
    Uncertain,
    /// Significant uncertainty
    Low,
}

impl ConfidenceBand {
    /// Bucket a confidence score
    #[must_use]
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence >= 0.85 {
            Self::Clear
        } else if confidence >= 0.70 {
            Self::Good
        } else if confidence >= 0.50 {
            Self::Uncertain
        } else {
            Self::Low
        }
    }

    /// Label shown next to an estimate
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Clear => "High confidence",
            Self::Good => "Good confidence",
            Self::Uncertain => "Uncertain",
            Self::Low => "Low confidence",
        }
    }
}

#[derive(Deserialize)]
struct RawPayload {
    #[serde(default)]
    food_items: Vec<FoodItem>,
    #[serde(default)]
    total_calories: f64,
    #[serde(default)]
    macros: VisionMacros,
    #[serde(default)]
    confidence: Option<f64>,
    #[serde(default)]
    description: String,
    #[serde(default)]
    notes: String,
}

/// Media type for an uploaded image, by file extension (JPEG when unknown)
#[must_use]
pub fn image_media_type(filename: &str) -> &'static str {
    let ext = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        _ => "image/jpeg",
    }
}

/// Strip markdown code fences and surrounding prose, leaving the JSON object
fn extract_json_object(raw: &str) -> &str {
    let mut cleaned = raw.trim();
    if cleaned.starts_with("```") {
        if let Some((_, rest)) = cleaned.split_once('\n') {
            cleaned = rest;
        }
        cleaned = cleaned.trim_end().trim_end_matches("```").trim();
    }
    match (cleaned.find('{'), cleaned.rfind('}')) {
        (Some(start), Some(end)) if start < end => &cleaned[start..=end],
        _ => cleaned,
    }
}

/// Parse a vision model's text reply into a typed outcome
///
/// Code fences and prose around the JSON object are tolerated. Missing
/// fields take defaults, confidence defaults to 0.5 and is clamped to [0, 1].
/// Unparseable text becomes a [`VisionOutcome::Failure`].
#[must_use]
pub fn parse_vision_response(raw: &str) -> VisionOutcome {
    let json = extract_json_object(raw);

    let value: Value = match serde_json::from_str(json) {
        Ok(value) => value,
        Err(e) => {
            warn!(error = %e, "vision response is not valid JSON");
            return VisionOutcome::failure(format!("Failed to parse response: {e}"));
        }
    };

    let payload: RawPayload = match serde_json::from_value(value.clone()) {
        Ok(payload) => payload,
        Err(e) => {
            warn!(error = %e, "vision response has unexpected shape");
            return VisionOutcome::failure(format!("Failed to parse response: {e}"));
        }
    };

    let confidence = payload
        .confidence
        .unwrap_or(DEFAULT_CONFIDENCE)
        .clamp(0.0, 1.0);

    debug!(
        items = payload.food_items.len(),
        calories = payload.total_calories,
        confidence,
        "parsed vision estimate"
    );

    VisionOutcome::Success(VisionEstimate {
        food_items: payload.food_items,
        total_calories: payload.total_calories,
        macros: payload.macros,
        confidence,
        description: payload.description,
        notes: payload.notes,
        raw_response: value,
    })
}

/// Vision analysis collaborator
#[async_trait]
pub trait VisionAnalyzer: Send + Sync {
    /// Estimate nutrition for a meal photo
    ///
    /// Failures are returned as [`VisionOutcome::Failure`], never as a panic.
    async fn analyze(&self, image: &[u8], filename: &str, context: Option<&str>)
        -> VisionOutcome;
}

/// Mock vision analyzer for testing (no provider calls)
///
/// Replies with a canned model response, run through the real parser.
pub struct MockVisionAnalyzer {
    reply: Result<String, String>,
    calls: AtomicUsize,
}

impl MockVisionAnalyzer {
    /// Analyzer that answers every call with `raw_reply`
    #[must_use]
    pub fn with_reply(raw_reply: impl Into<String>) -> Self {
        Self {
            reply: Ok(raw_reply.into()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Analyzer whose provider always fails with `error`
    #[must_use]
    pub fn failing(error: impl Into<String>) -> Self {
        Self {
            reply: Err(error.into()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of `analyze` calls received
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockVisionAnalyzer {
    fn default() -> Self {
        Self::with_reply(
            r#"{"food_items":[{"name":"Grilled chicken","portion":"150g","calories":250},{"name":"Rice","portion":"1 cup","calories":200}],
                "total_calories":450,
                "macros":{"protein_g":40.0,"carbs_g":45.0,"fat_g":8.0,"fiber_g":1.0,"sugar_g":0.5},
                "confidence":0.82,"description":"Chicken with rice","notes":"Portion estimated from plate size"}"#,
        )
    }
}

#[async_trait]
impl VisionAnalyzer for MockVisionAnalyzer {
    async fn analyze(
        &self,
        image: &[u8],
        _filename: &str,
        _context: Option<&str>,
    ) -> VisionOutcome {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if image.is_empty() {
            return VisionOutcome::failure("Image is empty");
        }
        match &self.reply {
            Ok(raw) => parse_vision_response(raw),
            Err(error) => VisionOutcome::failure(format!("API Error: {error}")),
        }
    }
}
