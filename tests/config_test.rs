// ABOUTME: Integration tests for analytics configuration loading
// ABOUTME: Environment overrides, parse failures, and validation of thresholds and windows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use nutrisnap::config::{
    AnalyticsConfig, ConfigError, ENV_PDF_DAILY_ROWS, ENV_ROLLING_WINDOW, ENV_VARIANCE_OVER_PCT,
    ENV_VARIANCE_UNDER_PCT,
};
use nutrisnap::errors::{AppError, ErrorCode};
use serial_test::serial;

fn clear_env() {
    for var in [
        ENV_VARIANCE_OVER_PCT,
        ENV_VARIANCE_UNDER_PCT,
        ENV_ROLLING_WINDOW,
        ENV_PDF_DAILY_ROWS,
    ] {
        std::env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_load_without_overrides_matches_defaults() {
    clear_env();
    let config = AnalyticsConfig::load().unwrap();

    assert!((config.variance.over_threshold_pct - 10.0).abs() < f64::EPSILON);
    assert!((config.variance.under_threshold_pct - 20.0).abs() < f64::EPSILON);
    assert_eq!(config.trends.rolling_window, 7);
    assert_eq!(config.trends.streak_lookback_days, 100);
    assert_eq!(config.reports.pdf_daily_rows, 14);
    assert_eq!(config.digest.subject_prefix, "Your weekly nutrition digest");
}

#[test]
#[serial]
fn test_environment_variable_override() {
    clear_env();
    std::env::set_var(ENV_VARIANCE_OVER_PCT, "15");
    std::env::set_var(ENV_VARIANCE_UNDER_PCT, " 25.5 ");
    std::env::set_var(ENV_ROLLING_WINDOW, "3");
    std::env::set_var(ENV_PDF_DAILY_ROWS, "10");

    let config = AnalyticsConfig::load().unwrap();
    assert!((config.variance.over_threshold_pct - 15.0).abs() < f64::EPSILON);
    assert!((config.variance.under_threshold_pct - 25.5).abs() < f64::EPSILON);
    assert_eq!(config.trends.rolling_window, 3);
    assert_eq!(config.reports.pdf_daily_rows, 10);

    clear_env();
}

#[test]
#[serial]
fn test_pdf_rows_above_page_bound_rejected() {
    clear_env();
    std::env::set_var(ENV_PDF_DAILY_ROWS, "30");

    let err = AnalyticsConfig::load().unwrap_err();
    assert!(matches!(err, ConfigError::ValueOutOfRange(_)));

    clear_env();
}

#[test]
#[serial]
fn test_unparseable_override_is_rejected() {
    clear_env();
    std::env::set_var(ENV_ROLLING_WINDOW, "a week");

    let err = AnalyticsConfig::load().unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().contains(ENV_ROLLING_WINDOW));

    clear_env();
}

#[test]
#[serial]
fn test_out_of_range_override_fails_validation() {
    clear_env();
    std::env::set_var(ENV_VARIANCE_OVER_PCT, "0");

    let err = AnalyticsConfig::load().unwrap_err();
    assert!(matches!(err, ConfigError::ValueOutOfRange(_)));

    clear_env();
}

#[test]
fn test_window_longer_than_lookback_rejected() {
    let mut config = AnalyticsConfig::default();
    config.trends.rolling_window = 30;
    config.trends.streak_lookback_days = 14;

    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidRange(_))
    ));
}

#[test]
fn test_config_error_maps_to_app_error() {
    let app: AppError = ConfigError::ValueOutOfRange("PDF daily rows must be at least 1").into();
    assert_eq!(app.code, ErrorCode::ConfigError);
    assert!(app.message.contains("PDF daily rows"));
}
