// ABOUTME: PDF rendering of the report document on A4 pages with builtin Helvetica fonts
// ABOUTME: Line-based layout with automatic page breaks and colored calorie cells
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::document::{ReportDocument, DAILY_COLUMNS};
use nutrisnap_core::errors::{AppError, AppResult};
use nutrisnap_intelligence::CalorieColor;
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Rgb,
};

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 20.0;
const LINE_MM: f32 = 6.5;
const TITLE_PT: f32 = 20.0;
const HEADING_PT: f32 = 13.0;
const BODY_PT: f32 = 10.0;
const FOOTER_PT: f32 = 8.0;
const LABEL_COLUMN_MM: f32 = 75.0;
const DAILY_COLUMN_X_MM: [f32; 7] = [20.0, 50.0, 75.0, 100.0, 125.0, 150.0, 172.0];

/// Render the report document to PDF bytes
///
/// # Errors
///
/// Returns a `SerializationError` if fonts cannot be registered or the
/// document cannot be serialized
pub fn render_pdf_report(document: &ReportDocument) -> AppResult<Vec<u8>> {
    let (doc, page, layer) = PdfDocument::new(
        document.title.as_str(),
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Layer 1",
    );
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(pdf_error)?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(pdf_error)?;

    {
        let first_layer = doc.get_page(page).get_layer(layer);
        let mut writer = PageWriter {
            doc: &doc,
            layer: first_layer,
            y: PAGE_HEIGHT_MM - MARGIN_MM,
            pages: 1,
            regular,
            bold,
        };
        writer.write_document(document);
    }

    doc.save_to_bytes().map_err(pdf_error)
}

fn pdf_error(err: printpdf::Error) -> AppError {
    AppError::serialization(format!("PDF export failed: {err:?}"))
}

struct PageWriter<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    y: f32,
    pages: u32,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

impl PageWriter<'_> {
    fn write_document(&mut self, document: &ReportDocument) {
        self.text(&document.title, TITLE_PT, MARGIN_MM, true);
        self.advance(LINE_MM * 1.5);
        self.text(&document.subtitle, BODY_PT, MARGIN_MM, false);
        self.advance(LINE_MM * 2.0);

        self.heading("Profile Information");
        self.label_rows(&document.profile_rows);
        self.advance(LINE_MM);

        self.heading("Summary Statistics");
        self.label_rows(&document.stats_rows);
        self.advance(LINE_MM);

        if !document.daily_rows.is_empty() {
            self.heading("Daily Breakdown");
            self.daily_header();
            for row in &document.daily_rows {
                self.ensure_room(LINE_MM, true);
                for (i, (cell, x)) in row.cells.iter().zip(DAILY_COLUMN_X_MM).enumerate() {
                    if i == 1 {
                        self.set_color(row.color);
                    }
                    self.text(cell, BODY_PT, x, false);
                    if i == 1 {
                        self.reset_color();
                    }
                }
                self.advance(LINE_MM);
            }
        }

        self.advance(LINE_MM * 2.0);
        self.ensure_room(LINE_MM, false);
        self.text(&document.footer, FOOTER_PT, MARGIN_MM, false);
    }

    fn heading(&mut self, text: &str) {
        self.ensure_room(LINE_MM * 3.0, false);
        self.text(text, HEADING_PT, MARGIN_MM, true);
        self.advance(LINE_MM * 1.3);
    }

    fn label_rows(&mut self, rows: &[(String, String)]) {
        for (label, value) in rows {
            self.ensure_room(LINE_MM, false);
            self.text(&format!("{label}:"), BODY_PT, MARGIN_MM, true);
            self.text(value, BODY_PT, LABEL_COLUMN_MM, false);
            self.advance(LINE_MM);
        }
    }

    fn daily_header(&mut self) {
        for (header, x) in DAILY_COLUMNS.iter().zip(DAILY_COLUMN_X_MM) {
            self.text(header, BODY_PT, x, true);
        }
        self.advance(LINE_MM);
    }

    /// Start a new page when fewer than `needed` mm remain above the bottom margin
    fn ensure_room(&mut self, needed: f32, repeat_daily_header: bool) {
        if self.y - needed >= MARGIN_MM {
            return;
        }
        self.pages += 1;
        let (page, layer) = self.doc.add_page(
            Mm(PAGE_WIDTH_MM),
            Mm(PAGE_HEIGHT_MM),
            format!("Layer {}", self.pages),
        );
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.y = PAGE_HEIGHT_MM - MARGIN_MM;
        if repeat_daily_header {
            self.daily_header();
        }
    }

    fn advance(&mut self, mm: f32) {
        self.y -= mm;
    }

    fn text(&self, text: &str, size: f32, x: f32, bold: bool) {
        let font = if bold { &self.bold } else { &self.regular };
        self.layer.use_text(text, size, Mm(x), Mm(self.y), font);
    }

    fn set_color(&self, color: CalorieColor) {
        let (r, g, b) = match color {
            CalorieColor::Good => (0.13, 0.55, 0.13),
            CalorieColor::Caution => (0.85, 0.55, 0.0),
            CalorieColor::Alert => (0.8, 0.1, 0.1),
        };
        self.layer.set_fill_color(Color::Rgb(Rgb::new(r, g, b, None)));
    }

    fn reset_color(&self) {
        self.layer
            .set_fill_color(Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None)));
    }
}
