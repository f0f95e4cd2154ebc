// ABOUTME: Export command for nutrisnap-cli
// ABOUTME: Renders a bundle over a date range in the chosen format and writes it to disk
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{NaiveDate, Utc};
use nutrisnap::bundle::DataBundle;
use nutrisnap::config::AnalyticsConfig;
use nutrisnap::errors::{AppError, AppResult};
use nutrisnap::reports::{export, ExportFormat, ExportRequest};
use std::path::Path;
use tracing::info;

/// Export a bundle to `output`
pub async fn run(
    config: &AnalyticsConfig,
    input: &Path,
    format: ExportFormat,
    output: &Path,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> AppResult<()> {
    let bundle = DataBundle::load(input).await?;

    let today = Utc::now().date_naive();
    let (first, last) = bundle.date_span().unwrap_or((today, today));
    let start = start.unwrap_or(first);
    let end = end.unwrap_or(last);
    if start > end {
        return Err(AppError::invalid_input(format!(
            "Start date {start} is after end date {end}"
        )));
    }

    let (entries, summaries) = bundle.slice(start, end);
    let request = ExportRequest {
        profile: &bundle.profile,
        start,
        end,
        entries: &entries,
        summaries: &summaries,
        generated_at: Utc::now(),
    };
    let artifact = export(format, &request, config)?;

    tokio::fs::write(output, &artifact.bytes).await.map_err(|e| {
        AppError::internal(format!("Cannot write {}: {e}", output.display())).with_source(e)
    })?;

    info!(
        export.format = %format,
        export.bytes = artifact.bytes.len(),
        "export written to {}",
        output.display()
    );
    println!(
        "Wrote {} ({} bytes, suggested name {})",
        output.display(),
        artifact.bytes.len(),
        artifact.filename
    );
    Ok(())
}
