// ABOUTME: Weekly digest composer producing immutable snapshots and their email renderings
// ABOUTME: Numeric content over one Monday-Sunday window plus plain text and HTML bodies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Weekly digest composition
//!
//! Delivery is not handled here; see [`crate::external::mailer`].

use crate::reports::format;
use chrono::{DateTime, NaiveDate, Utc};
use html_escape::encode_text;
use nutrisnap_core::models::{DailySummary, DigestContent, WeeklyDigest};
use nutrisnap_intelligence::units::week_bounds;
use nutrisnap_intelligence::{macro_percentages, weekly_aggregate};
use std::fmt::Write;
use tracing::debug;
use uuid::Uuid;

/// Compose the digest for the week containing `week_start`
///
/// The window is normalized to Monday through Sunday. Summaries for other
/// users or outside the window are ignored; days without a summary are not
/// counted as zero-calorie days.
#[must_use]
pub fn compose_weekly_digest(
    user_id: Uuid,
    week_start: NaiveDate,
    summaries: &[DailySummary],
    generated_at: DateTime<Utc>,
) -> WeeklyDigest {
    let (monday, sunday) = week_bounds(week_start);
    let in_week: Vec<DailySummary> = summaries
        .iter()
        .filter(|s| s.user_id == user_id && (monday..=sunday).contains(&s.summary_date))
        .cloned()
        .collect();

    let agg = weekly_aggregate(&in_week);
    let content = DigestContent {
        week_start: monday,
        week_end: sunday,
        days_logged: agg.days_logged,
        total_calories: agg.total_calories,
        avg_calories: agg.avg_calories,
        avg_target: agg.avg_target,
        avg_variance: agg.avg_variance,
        days_under: agg.days_under,
        days_over: agg.days_over,
        total_protein_g: agg.total_protein_g,
        total_carbs_g: agg.total_carbs_g,
        total_fat_g: agg.total_fat_g,
        macro_percentages: macro_percentages(
            agg.total_protein_g,
            agg.total_carbs_g,
            agg.total_fat_g,
        ),
    };

    debug!(
        user.id = %user_id,
        digest.week_start = %monday,
        digest.days_logged = content.days_logged,
        "composed weekly digest"
    );

    WeeklyDigest::new(Uuid::new_v4(), user_id, content, generated_at)
}

/// Email subject line for a digest
#[must_use]
pub fn digest_subject(prefix: &str, content: &DigestContent) -> String {
    format!(
        "{prefix} ({} - {})",
        content.week_start.format("%b %d"),
        content.week_end.format("%b %d")
    )
}

fn variance_phrase(avg_variance: f64) -> String {
    let rounded = avg_variance.round();
    if rounded < 0.0 {
        format!("{} under", format::thousands(-rounded))
    } else {
        format!("{} over", format::thousands(rounded))
    }
}

/// Plain-text digest body
#[must_use]
pub fn render_text(display_name: &str, content: &DigestContent) -> String {
    let mut text = String::with_capacity(512);
    let _ = writeln!(text, "Hi {display_name},");
    text.push('\n');
    let _ = writeln!(text, "Weekly Nutrition Report");
    let _ = writeln!(
        text,
        "{} - {}",
        content.week_start.format("%b %d"),
        content.week_end.format("%b %d, %Y")
    );
    text.push('\n');
    let _ = writeln!(text, "SUMMARY");
    let _ = writeln!(text, "-------");
    let _ = writeln!(
        text,
        "Average Daily Calories: {} ({} target)",
        format::thousands(content.avg_calories),
        variance_phrase(content.avg_variance)
    );
    let _ = writeln!(text, "Days Logged: {}", content.days_logged);
    let _ = writeln!(text, "Daily Target: {}", format::thousands(content.avg_target));
    let _ = writeln!(
        text,
        "Days Under / Over Target: {} / {}",
        content.days_under, content.days_over
    );
    text.push('\n');
    let _ = writeln!(text, "MACROS (Weekly Total)");
    let _ = writeln!(text, "---------------------");
    let _ = writeln!(
        text,
        "Protein: {}g ({}%)",
        format::thousands(content.total_protein_g),
        format::percent(content.macro_percentages.protein_pct)
    );
    let _ = writeln!(
        text,
        "Carbs: {}g ({}%)",
        format::thousands(content.total_carbs_g),
        format::percent(content.macro_percentages.carbs_pct)
    );
    let _ = writeln!(
        text,
        "Fat: {}g ({}%)",
        format::thousands(content.total_fat_g),
        format::percent(content.macro_percentages.fat_pct)
    );
    text.push('\n');
    text.push_str("Keep up the great work!\n- Nutrisnap");
    text
}

/// HTML digest body
#[must_use]
pub fn render_html(display_name: &str, content: &DigestContent) -> String {
    let variance_class = if content.avg_variance <= 0.0 {
        "good"
    } else {
        "alert"
    };

    let mut html = String::with_capacity(2048);
    html.push_str(
        "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><style>\
         body{font-family:-apple-system,'Segoe UI',Roboto,sans-serif;color:#1f2937;line-height:1.6}\
         .container{max-width:600px;margin:0 auto;padding:20px}\
         .header{background:#3b82f6;color:#fff;padding:24px;border-radius:12px 12px 0 0;text-align:center}\
         .content{background:#f9fafb;padding:24px;border-radius:0 0 12px 12px}\
         .stat{display:inline-block;width:45%;margin:8px 2%;background:#fff;padding:16px;text-align:center;border-radius:8px}\
         .value{font-size:24px;font-weight:bold;color:#3b82f6}.label{font-size:12px;color:#6b7280;text-transform:uppercase}\
         .good{color:#16a34a}.alert{color:#dc2626}\
         </style></head><body><div class=\"container\">",
    );
    let _ = write!(
        html,
        "<div class=\"header\"><h1>Your Weekly Nutrition Report</h1><p>{} - {}</p></div>",
        content.week_start.format("%b %d"),
        content.week_end.format("%b %d, %Y")
    );
    let _ = write!(
        html,
        "<div class=\"content\"><p>Hi {},</p>",
        encode_text(display_name)
    );

    for (value, label) in [
        (format::thousands(content.avg_calories), "Avg Daily Calories"),
        (content.days_logged.to_string(), "Days Logged"),
        (content.days_under.to_string(), "Days Under Target"),
        (content.days_over.to_string(), "Days Over Target"),
    ] {
        let _ = write!(
            html,
            "<div class=\"stat\"><div class=\"value\">{value}</div><div class=\"label\">{label}</div></div>"
        );
    }

    let _ = write!(
        html,
        "<p class=\"{variance_class}\">Averaging {} your {} calorie target</p>",
        variance_phrase(content.avg_variance),
        format::thousands(content.avg_target)
    );

    html.push_str("<h3>Weekly Macros</h3>");
    for (label, grams, pct) in [
        (
            "Protein",
            content.total_protein_g,
            content.macro_percentages.protein_pct,
        ),
        (
            "Carbs",
            content.total_carbs_g,
            content.macro_percentages.carbs_pct,
        ),
        ("Fat", content.total_fat_g, content.macro_percentages.fat_pct),
    ] {
        let _ = write!(
            html,
            "<div class=\"stat\"><div class=\"value\">{}g</div><div class=\"label\">{label} ({}%)</div></div>",
            format::thousands(grams),
            format::percent(pct)
        );
    }

    html.push_str("<p>Keep up the great work!</p><p>Nutrisnap</p></div></div></body></html>");
    html
}
