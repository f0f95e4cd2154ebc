// ABOUTME: Digest preview command for nutrisnap-cli
// ABOUTME: Composes the weekly digest from a bundle and prints its subject and body
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{NaiveDate, Utc};
use nutrisnap::bundle::DataBundle;
use nutrisnap::config::AnalyticsConfig;
use nutrisnap::digest::{compose_weekly_digest, digest_subject, render_html, render_text};
use nutrisnap::errors::AppResult;
use std::path::Path;

/// Print the digest email for the week containing `week_start`
pub async fn run(
    config: &AnalyticsConfig,
    input: &Path,
    week_start: NaiveDate,
    html: bool,
) -> AppResult<()> {
    let bundle = DataBundle::load(input).await?;
    let summaries = bundle.daily_summaries();
    let digest = compose_weekly_digest(bundle.profile.user_id, week_start, &summaries, Utc::now());

    let name = &bundle.profile.display_name;
    if html {
        println!("{}", render_html(name, digest.content()));
    } else {
        println!(
            "Subject: {}\n",
            digest_subject(&config.digest.subject_prefix, digest.content())
        );
        println!("{}", render_text(name, digest.content()));
    }
    Ok(())
}
