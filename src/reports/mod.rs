// ABOUTME: Export and report composer for food logs and daily summaries over a date range
// ABOUTME: Dispatches to CSV, XLSX, PDF, and HTML renderers and wraps the bytes as an artifact
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Report Composer
//!
//! Pure projections of entries, summaries, and a profile into external
//! artifact formats. Nothing here touches the filesystem; every renderer
//! returns bytes or text.
//!
//! Empty input is never an error: CSV exports return the configured
//! placeholder payload, the workbook gets header-only sheets, and the
//! PDF/HTML reports show zeroed statistics and no daily rows.

/// Food log and daily summary CSV exports
pub mod csv_export;
/// Format-neutral report document shared by the PDF and HTML renderers
pub mod document;
/// Number formatting shared by every renderer
pub mod format;
/// HTML report renderer
pub mod html;
/// PDF report renderer
pub mod pdf;
/// Multi-sheet XLSX workbook export
pub mod spreadsheet;
/// Report-level statistics computed once per export
pub mod stats;

pub use csv_export::{daily_summary_csv, food_log_csv};
pub use document::{build_report_document, ReportDocument};
pub use html::render_html_report;
pub use pdf::render_pdf_report;
pub use spreadsheet::build_workbook;
pub use stats::{calculate_export_stats, ExportStats};

use crate::config::AnalyticsConfig;
use chrono::{DateTime, NaiveDate, Utc};
use nutrisnap_core::errors::{AppError, AppResult};
use nutrisnap_core::models::{DailySummary, FoodEntry, UserProfile};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::info;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    /// One CSV row per food entry
    CsvLog,
    /// One CSV row per day
    CsvDaily,
    /// Workbook with Summary, Daily Totals, and Food Log sheets
    Xlsx,
    /// Printable report document
    Pdf,
    /// Report document as a standalone HTML page
    Html,
}

impl ExportFormat {
    /// Every format, in menu order
    pub const ALL: [Self; 5] = [Self::CsvLog, Self::CsvDaily, Self::Xlsx, Self::Pdf, Self::Html];

    /// Wire name of the format
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CsvLog => "csv_log",
            Self::CsvDaily => "csv_daily",
            Self::Xlsx => "xlsx",
            Self::Pdf => "pdf",
            Self::Html => "html",
        }
    }

    /// MIME type of the produced artifact
    #[must_use]
    pub const fn content_type(&self) -> &'static str {
        match self {
            Self::CsvLog | Self::CsvDaily => "text/csv; charset=utf-8",
            Self::Xlsx => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            Self::Pdf => "application/pdf",
            Self::Html => "text/html; charset=utf-8",
        }
    }

    /// File extension without the leading dot
    #[must_use]
    pub const fn file_extension(&self) -> &'static str {
        match self {
            Self::CsvLog | Self::CsvDaily => "csv",
            Self::Xlsx => "xlsx",
            Self::Pdf => "pdf",
            Self::Html => "html",
        }
    }

    const fn file_stem(self) -> &'static str {
        match self {
            Self::CsvLog => "food_log",
            Self::CsvDaily => "daily_summaries",
            Self::Xlsx | Self::Pdf | Self::Html => "nutrition_report",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "csv_log" | "csv" | "log" => Ok(Self::CsvLog),
            "csv_daily" | "daily" => Ok(Self::CsvDaily),
            "xlsx" | "excel" => Ok(Self::Xlsx),
            "pdf" => Ok(Self::Pdf),
            "html" => Ok(Self::Html),
            other => Err(AppError::invalid_input(format!(
                "Unknown export format '{other}'"
            ))),
        }
    }
}

/// Inputs for one export over an inclusive date range
#[derive(Debug, Clone, Copy)]
pub struct ExportRequest<'a> {
    /// Profile shown in report headers
    pub profile: &'a UserProfile,
    /// First day of the range
    pub start: NaiveDate,
    /// Last day of the range
    pub end: NaiveDate,
    /// Entries in the range
    pub entries: &'a [FoodEntry],
    /// Daily summaries in the range, in the order they should be reported
    pub summaries: &'a [DailySummary],
    /// Timestamp printed on the report
    pub generated_at: DateTime<Utc>,
}

/// Rendered export ready to hand to a download or write to disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    /// Suggested file name
    pub filename: String,
    /// MIME type
    pub content_type: &'static str,
    /// Payload
    pub bytes: Vec<u8>,
}

/// Render one export format
///
/// Report statistics are computed once and shared by the document renderers.
///
/// # Errors
///
/// Returns a `SerializationError` if the CSV, XLSX, or PDF backend fails to
/// produce output. Empty input is not an error.
pub fn export(
    format: ExportFormat,
    request: &ExportRequest<'_>,
    config: &AnalyticsConfig,
) -> AppResult<ExportArtifact> {
    let placeholder = config.reports.no_data_placeholder.as_str();
    let bytes = match format {
        ExportFormat::CsvLog => {
            food_log_csv(request.entries, placeholder)?.into_bytes()
        }
        ExportFormat::CsvDaily => {
            daily_summary_csv(request.summaries, placeholder)?.into_bytes()
        }
        ExportFormat::Xlsx => build_workbook(request)?,
        ExportFormat::Pdf | ExportFormat::Html => {
            let stats = calculate_export_stats(request.summaries);
            let document = build_report_document(request, &stats, config);
            if format == ExportFormat::Pdf {
                render_pdf_report(&document)?
            } else {
                render_html_report(&document).into_bytes()
            }
        }
    };

    let filename = format!(
        "{}_{}_{}.{}",
        format.file_stem(),
        request.start.format("%Y%m%d"),
        request.end.format("%Y%m%d"),
        format.file_extension()
    );

    info!(
        user.id = %request.profile.user_id,
        export.format = %format,
        export.bytes = bytes.len(),
        export.entries = request.entries.len(),
        export.days = request.summaries.len(),
        "export rendered"
    );

    Ok(ExportArtifact {
        filename,
        content_type: format.content_type(),
        bytes,
    })
}
