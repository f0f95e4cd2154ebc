// ABOUTME: XLSX workbook export with Summary, Daily Totals, and Food Log sheets
// ABOUTME: Flat tables mirroring the CSV column sets, bold header rows, never fails on empty input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::csv_export::{DAILY_SUMMARY_HEADERS, FOOD_LOG_HEADERS};
use super::{format, ExportRequest};
use nutrisnap_core::errors::{AppError, AppResult};
use nutrisnap_intelligence::summary_variance;
use nutrisnap_intelligence::units::round_to;
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};

/// Sheet holding profile and range metadata
pub const SUMMARY_SHEET: &str = "Summary";
/// Sheet with one row per day
pub const DAILY_TOTALS_SHEET: &str = "Daily Totals";
/// Sheet with one row per entry
pub const FOOD_LOG_SHEET: &str = "Food Log";

/// Build the three-sheet workbook and return the XLSX bytes
///
/// # Errors
///
/// Returns a `SerializationError` if the workbook cannot be written
pub fn build_workbook(request: &ExportRequest<'_>) -> AppResult<Vec<u8>> {
    write_workbook(request).map_err(|e| AppError::serialization(format!("XLSX export failed: {e}")))
}

fn write_workbook(request: &ExportRequest<'_>) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();

    {
        let sheet = workbook.add_worksheet();
        sheet.set_name(SUMMARY_SHEET)?;
        write_header(sheet, &["Field", "Value"], &bold)?;
        let rows = [
            ("User", request.profile.display_name.clone()),
            (
                "Date Range",
                format!(
                    "{} to {}",
                    request.start.format("%Y-%m-%d"),
                    request.end.format("%Y-%m-%d")
                ),
            ),
            (
                "Calorie Target",
                format::calories(request.profile.daily_calorie_target),
            ),
            (
                "Target Method",
                request.profile.target_method.as_str().to_owned(),
            ),
            (
                "Generated On",
                request.generated_at.format("%Y-%m-%d %H:%M").to_string(),
            ),
        ];
        for (row, (field, value)) in (1_u32..).zip(rows) {
            sheet.write_string(row, 0, field)?;
            sheet.write_string(row, 1, value)?;
        }
        sheet.set_column_width(0, 18)?;
        sheet.set_column_width(1, 32)?;
    }

    {
        let sheet = workbook.add_worksheet();
        sheet.set_name(DAILY_TOTALS_SHEET)?;
        write_header(sheet, &DAILY_SUMMARY_HEADERS, &bold)?;
        for (row, summary) in (1_u32..).zip(request.summaries) {
            let variance = summary_variance(summary);
            sheet.write_string(row, 0, summary.summary_date.format("%Y-%m-%d").to_string())?;
            sheet.write_number(row, 1, summary.total_calories.round())?;
            sheet.write_number(row, 2, summary.calorie_target.round())?;
            sheet.write_number(row, 3, variance.variance.round())?;
            sheet.write_number(row, 4, variance.variance_pct)?;
            sheet.write_number(row, 5, round1(summary.total_protein_g))?;
            sheet.write_number(row, 6, round1(summary.total_carbs_g))?;
            sheet.write_number(row, 7, round1(summary.total_fat_g))?;
            sheet.write_number(row, 8, summary.total_entries)?;
            sheet.write_string(row, 9, format::yes_no(summary.has_breakfast))?;
            sheet.write_string(row, 10, format::yes_no(summary.has_lunch))?;
            sheet.write_string(row, 11, format::yes_no(summary.has_dinner))?;
            sheet.write_string(
                row,
                12,
                format!("{:.0}%", summary.completeness_score * 100.0),
            )?;
        }
        sheet.set_column_width(0, 12)?;
    }

    {
        let sheet = workbook.add_worksheet();
        sheet.set_name(FOOD_LOG_SHEET)?;
        write_header(sheet, &FOOD_LOG_HEADERS, &bold)?;
        let live = request.entries.iter().filter(|e| !e.is_deleted);
        for (row, entry) in (1_u32..).zip(live) {
            sheet.write_string(row, 0, entry.entry_date.format("%Y-%m-%d").to_string())?;
            sheet.write_string(row, 1, entry.entry_time.format("%H:%M").to_string())?;
            sheet.write_string(row, 2, entry.meal_type.label())?;
            sheet.write_string(row, 3, entry.food_description.as_str())?;
            sheet.write_string(
                row,
                4,
                entry.portion_description.as_deref().unwrap_or_default(),
            )?;
            sheet.write_number(row, 5, entry.final_calories().round())?;
            sheet.write_number(row, 6, round1(entry.final_protein_g()))?;
            sheet.write_number(row, 7, round1(entry.final_carbs_g()))?;
            sheet.write_number(row, 8, round1(entry.final_fat_g()))?;
            sheet.write_string(row, 9, format::yes_no(entry.was_manually_adjusted))?;
            if let Some(confidence) = entry.confidence {
                sheet.write_number(row, 10, confidence)?;
            }
            sheet.write_string(row, 11, entry.notes.as_deref().unwrap_or_default())?;
        }
        sheet.set_column_width(3, 36)?;
    }

    workbook.save_to_buffer()
}

fn write_header(sheet: &mut Worksheet, headers: &[&str], bold: &Format) -> Result<(), XlsxError> {
    for (col, header) in (0_u16..).zip(headers) {
        sheet.write_string_with_format(0, col, *header, bold)?;
    }
    Ok(())
}

fn round1(value: f64) -> f64 {
    round_to(value, 1)
}
