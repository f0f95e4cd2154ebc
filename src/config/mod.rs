// ABOUTME: Analytics configuration for variance thresholds, trend windows, and report limits
// ABOUTME: Environment-only overrides on top of defaults, validated before use
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Analytics Configuration
//!
//! Configuration is environment-only: defaults come from
//! `nutrisnap_core::constants` and a handful of `NUTRISNAP_*` variables can
//! override them. There is no global instance; callers load a config once and
//! pass it to the services that need it.

/// Configuration error types
pub mod error;

pub use error::ConfigError;

use nutrisnap_core::constants::{reports, trends, variance};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use tracing::debug;

/// Over-target alert threshold (percent)
pub const ENV_VARIANCE_OVER_PCT: &str = "NUTRISNAP_VARIANCE_OVER_PCT";
/// Under-target caution threshold (percent)
pub const ENV_VARIANCE_UNDER_PCT: &str = "NUTRISNAP_VARIANCE_UNDER_PCT";
/// Rolling average window (days)
pub const ENV_ROLLING_WINDOW: &str = "NUTRISNAP_ROLLING_WINDOW";
/// Daily rows in the PDF breakdown table
pub const ENV_PDF_DAILY_ROWS: &str = "NUTRISNAP_PDF_DAILY_ROWS";

/// Calorie color thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VarianceConfig {
    /// Over target by more than this percent is an alert
    pub over_threshold_pct: f64,
    /// Under target by more than this percent is a caution
    pub under_threshold_pct: f64,
}

impl Default for VarianceConfig {
    fn default() -> Self {
        Self {
            over_threshold_pct: variance::DEFAULT_OVER_THRESHOLD_PCT,
            under_threshold_pct: variance::DEFAULT_UNDER_THRESHOLD_PCT,
        }
    }
}

/// Trend and streak windows
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendConfig {
    /// Rolling average window in days
    pub rolling_window: usize,
    /// How far back to look when computing streaks
    pub streak_lookback_days: i64,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            rolling_window: trends::DEFAULT_ROLLING_WINDOW,
            streak_lookback_days: trends::STREAK_LOOKBACK_DAYS,
        }
    }
}

/// Report rendering limits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Maximum rows in the PDF daily breakdown table (1 to 14)
    pub pdf_daily_rows: usize,
    /// Payload returned for CSV exports with no rows
    pub no_data_placeholder: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            pdf_daily_rows: reports::PDF_DAILY_ROWS,
            no_data_placeholder: reports::NO_DATA_PLACEHOLDER.to_owned(),
        }
    }
}

/// Weekly digest settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DigestConfig {
    /// Email subject prefix
    pub subject_prefix: String,
}

impl Default for DigestConfig {
    fn default() -> Self {
        Self {
            subject_prefix: "Your weekly nutrition digest".to_owned(),
        }
    }
}

/// Top-level analytics configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Calorie color thresholds
    pub variance: VarianceConfig,
    /// Trend and streak windows
    pub trends: TrendConfig,
    /// Report rendering limits
    pub reports: ReportConfig,
    /// Weekly digest settings
    pub digest: DigestConfig,
}

impl AnalyticsConfig {
    /// Load defaults, apply environment overrides, and validate
    ///
    /// # Errors
    ///
    /// Returns an error if an override cannot be parsed or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        debug!(
            over_pct = config.variance.over_threshold_pct,
            under_pct = config.variance.under_threshold_pct,
            rolling_window = config.trends.rolling_window,
            pdf_daily_rows = config.reports.pdf_daily_rows,
            "analytics config loaded"
        );
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if a threshold or window is not positive, the rolling
    /// window is longer than the streak lookback, or the PDF row limit is
    /// outside 1..=14
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.variance.over_threshold_pct <= 0.0 || self.variance.over_threshold_pct > 100.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Over threshold must be between 0 and 100 percent",
            ));
        }
        if self.variance.under_threshold_pct <= 0.0 || self.variance.under_threshold_pct > 100.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Under threshold must be between 0 and 100 percent",
            ));
        }
        if self.trends.rolling_window == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "Rolling window must be at least 1 day",
            ));
        }
        if self.trends.streak_lookback_days < 2 {
            return Err(ConfigError::ValueOutOfRange(
                "Streak lookback must be at least 2 days",
            ));
        }
        if !i64::try_from(self.trends.rolling_window)
            .is_ok_and(|window| window <= self.trends.streak_lookback_days)
        {
            return Err(ConfigError::InvalidRange(
                "Rolling window cannot exceed the streak lookback",
            ));
        }
        if !(1..=reports::PDF_DAILY_ROWS).contains(&self.reports.pdf_daily_rows) {
            return Err(ConfigError::ValueOutOfRange(
                "PDF daily rows must be between 1 and 14",
            ));
        }
        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}: {val}")))?;
        }
        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(ENV_VARIANCE_OVER_PCT, &mut self.variance.over_threshold_pct)?;
        Self::apply_env_var(ENV_VARIANCE_UNDER_PCT, &mut self.variance.under_threshold_pct)?;
        Self::apply_env_var(ENV_ROLLING_WINDOW, &mut self.trends.rolling_window)?;
        Self::apply_env_var(ENV_PDF_DAILY_ROWS, &mut self.reports.pdf_daily_rows)?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let config = AnalyticsConfig::default();
        assert!(config.validate().is_ok());
        assert!((config.variance.over_threshold_pct - 10.0).abs() < f64::EPSILON);
        assert!((config.variance.under_threshold_pct - 20.0).abs() < f64::EPSILON);
        assert_eq!(config.trends.rolling_window, 7);
        assert_eq!(config.reports.pdf_daily_rows, 14);
        assert_eq!(config.reports.no_data_placeholder, "No data to export");
    }

    #[test]
    fn test_zero_window_rejected() {
        let mut config = AnalyticsConfig::default();
        config.trends.rolling_window = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange(_))
        ));
    }

    #[test]
    fn test_negative_threshold_rejected() {
        let mut config = AnalyticsConfig::default();
        config.variance.over_threshold_pct = -5.0;
        assert!(config.validate().is_err());
    }
}
