// ABOUTME: HTML rendering of the report document as a standalone page
// ABOUTME: All user-supplied text is escaped; calorie cells carry a color class
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::document::{ReportDocument, DAILY_COLUMNS};
use html_escape::encode_text;
use std::fmt::Write;

const STYLE: &str = "body{font-family:-apple-system,'Segoe UI',Roboto,sans-serif;color:#1f2937;max-width:760px;margin:0 auto;padding:24px}\
h1{text-align:center;margin-bottom:4px}.subtitle{text-align:center;color:#6b7280}\
table{border-collapse:collapse;width:100%;margin:8px 0 20px}td,th{padding:6px 8px;border:1px solid #e5e7eb}\
th{background:#3b82f6;color:#fff;text-align:left}td.label{font-weight:bold;width:40%}\
.good{color:#16a34a}.caution{color:#d97706}.alert{color:#dc2626}\
.footer{text-align:center;color:#9ca3af;font-size:12px}";

/// Render the report document as a complete HTML page
#[must_use]
pub fn render_html_report(document: &ReportDocument) -> String {
    let mut html = String::with_capacity(4096);

    let _ = write!(
        html,
        "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>{}</title><style>{STYLE}</style></head><body>",
        encode_text(&document.title)
    );
    let _ = write!(
        html,
        "<h1>{}</h1><p class=\"subtitle\">{}</p>",
        encode_text(&document.title),
        encode_text(&document.subtitle)
    );

    push_label_table(&mut html, "Profile Information", &document.profile_rows);
    push_label_table(&mut html, "Summary Statistics", &document.stats_rows);

    if !document.daily_rows.is_empty() {
        html.push_str("<h2>Daily Breakdown</h2><table><tr>");
        for header in DAILY_COLUMNS {
            let _ = write!(html, "<th>{header}</th>");
        }
        html.push_str("</tr>");
        for row in &document.daily_rows {
            html.push_str("<tr>");
            for (i, cell) in row.cells.iter().enumerate() {
                if i == 1 {
                    let _ = write!(
                        html,
                        "<td class=\"{}\">{}</td>",
                        row.color.as_str(),
                        encode_text(cell)
                    );
                } else {
                    let _ = write!(html, "<td>{}</td>", encode_text(cell));
                }
            }
            html.push_str("</tr>");
        }
        html.push_str("</table>");
    }

    let _ = write!(
        html,
        "<p class=\"footer\">{}</p></body></html>",
        encode_text(&document.footer)
    );
    html
}

fn push_label_table(html: &mut String, heading: &str, rows: &[(String, String)]) {
    let _ = write!(html, "<h2>{heading}</h2><table>");
    for (label, value) in rows {
        let _ = write!(
            html,
            "<tr><td class=\"label\">{}</td><td>{}</td></tr>",
            encode_text(label),
            encode_text(value)
        );
    }
    html.push_str("</table>");
}
