// ABOUTME: Tests for parsing vision model replies and the mock analyzer
// ABOUTME: Code fences, defaults, confidence clamping, failure outcomes, and media types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use nutrisnap::external::{
    image_media_type, parse_vision_response, ConfidenceBand, MockVisionAnalyzer, VisionAnalyzer,
    VisionEstimate, VisionOutcome,
};

fn success(raw: &str) -> VisionEstimate {
    match parse_vision_response(raw) {
        VisionOutcome::Success(estimate) => estimate,
        VisionOutcome::Failure { error } => panic!("expected success, got failure: {error}"),
    }
}

fn failure(raw: &str) -> String {
    match parse_vision_response(raw) {
        VisionOutcome::Failure { error } => error,
        VisionOutcome::Success(estimate) => panic!("expected failure, got {estimate:?}"),
    }
}

#[test]
fn test_parses_fenced_reply() {
    let raw = "```json\n{\"food_items\":[{\"name\":\"Toast\",\"portion\":\"2 slices\",\"calories\":160}],\
               \"total_calories\":160,\"macros\":{\"protein_g\":6,\"carbs_g\":30,\"fat_g\":2},\
               \"confidence\":0.9,\"description\":\"Toast\",\"notes\":\"\"}\n```";
    let estimate = success(raw);

    assert_eq!(estimate.food_items.len(), 1);
    assert_eq!(estimate.food_items[0].portion, "2 slices");
    assert!((estimate.total_calories - 160.0).abs() < f64::EPSILON);
    assert!((estimate.macros.carbs_g - 30.0).abs() < f64::EPSILON);
    assert!(estimate.macros.fiber_g.abs() < f64::EPSILON);
    assert_eq!(estimate.confidence_band(), ConfidenceBand::Clear);
    assert_eq!(estimate.raw_response["description"], "Toast");
}

#[test]
fn test_prose_around_json_is_ignored() {
    let raw = "Here is my estimate: {\"total_calories\": 300, \"confidence\": 0.6} Hope that helps.";
    let estimate = success(raw);

    assert!((estimate.total_calories - 300.0).abs() < f64::EPSILON);
    assert!(estimate.food_items.is_empty());
    assert_eq!(estimate.description, "");
}

#[test]
fn test_confidence_defaults_and_clamps() {
    assert!((success("{}").confidence - 0.5).abs() < f64::EPSILON);
    assert!((success("{\"confidence\": null}").confidence - 0.5).abs() < f64::EPSILON);
    assert!((success("{\"confidence\": 1.7}").confidence - 1.0).abs() < f64::EPSILON);
    assert!(success("{\"confidence\": -0.2}").confidence.abs() < f64::EPSILON);
}

#[test]
fn test_macro_estimate_carries_every_value() {
    let estimate = success(
        "{\"total_calories\":500,\"macros\":{\"protein_g\":30,\"carbs_g\":50,\"fat_g\":20,\"fiber_g\":4,\"sugar_g\":9}}",
    );
    let macros = estimate.to_macro_estimate();

    assert_eq!(macros.calories, Some(500.0));
    assert_eq!(macros.protein_g, Some(30.0));
    assert_eq!(macros.fiber_g, Some(4.0));
    assert_eq!(macros.sugar_g, Some(9.0));
}

#[test]
fn test_unparseable_replies_become_failures() {
    assert!(failure("I can't see any food in this image.").starts_with("Failed to parse response"));
    assert!(failure("{\"total_calories\": \"lots\"}").starts_with("Failed to parse response"));
    assert!(failure("").starts_with("Failed to parse response"));
}

#[test]
fn test_outcome_serializes_with_status_tag() {
    let value = serde_json::to_value(VisionOutcome::failure("API Error: timeout")).unwrap();
    assert_eq!(value["status"], "failure");
    assert_eq!(value["error"], "API Error: timeout");

    let value = serde_json::to_value(parse_vision_response("{\"total_calories\": 10}")).unwrap();
    assert_eq!(value["status"], "success");
}

#[test]
fn test_confidence_bands() {
    assert_eq!(ConfidenceBand::from_confidence(0.85), ConfidenceBand::Clear);
    assert_eq!(ConfidenceBand::from_confidence(0.84), ConfidenceBand::Good);
    assert_eq!(ConfidenceBand::from_confidence(0.70), ConfidenceBand::Good);
    assert_eq!(ConfidenceBand::from_confidence(0.5), ConfidenceBand::Uncertain);
    assert_eq!(ConfidenceBand::from_confidence(0.49), ConfidenceBand::Low);
    assert_eq!(ConfidenceBand::Clear.label(), "High confidence");
}

#[test]
fn test_image_media_types() {
    assert_eq!(image_media_type("plate.PNG"), "image/png");
    assert_eq!(image_media_type("anim.gif"), "image/gif");
    assert_eq!(image_media_type("photo.webp"), "image/webp");
    assert_eq!(image_media_type("photo.jpeg"), "image/jpeg");
    assert_eq!(image_media_type("no_extension"), "image/jpeg");
}

#[tokio::test]
async fn test_mock_analyzer_modes() {
    let ok = MockVisionAnalyzer::default();
    assert!(matches!(
        ok.analyze(&[1, 2, 3], "meal.jpg", Some("dinner at home")).await,
        VisionOutcome::Success(_)
    ));
    assert_eq!(
        ok.analyze(&[], "meal.jpg", None).await,
        VisionOutcome::failure("Image is empty")
    );
    assert_eq!(ok.calls(), 2);

    let failing = MockVisionAnalyzer::failing("quota exceeded");
    assert_eq!(
        failing.analyze(&[1], "meal.jpg", None).await,
        VisionOutcome::failure("API Error: quota exceeded")
    );
}
