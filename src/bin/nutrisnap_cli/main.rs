// ABOUTME: Nutrisnap CLI - offline TDEE calculator, report exporter, and digest previewer
// ABOUTME: Works on JSON data bundles so no store or network access is needed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Calorie targets for a 30 year old sedentary male
//! nutrisnap-cli tdee --weight-kg 70 --height-cm 170 --age 30 --gender male --activity sedentary
//!
//! # Age taken from a birth date
//! nutrisnap-cli tdee --weight-kg 70 --height-cm 170 --birth-date 1995-06-15 --gender male
//!
//! # Same result as JSON
//! nutrisnap-cli tdee --weight-kg 70 --height-cm 170 --age 30 --gender male --activity sedentary --json
//!
//! # Export a bundle as a PDF report for March
//! nutrisnap-cli export --input bundle.json --format pdf --output report.pdf --start 2025-03-01 --end 2025-03-31
//!
//! # Preview the weekly digest email as HTML
//! nutrisnap-cli digest --input bundle.json --week-start 2025-03-03 --html
//! ```

mod commands;
mod helpers;

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use nutrisnap::config::AnalyticsConfig;
use nutrisnap::errors::AppResult;
use nutrisnap::logging::LoggingConfig;
use nutrisnap::reports::ExportFormat;
use std::path::PathBuf;
use tracing::debug;

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "nutrisnap-cli",
    about = "Nutrisnap nutrition tracker CLI",
    long_about = "Offline tools for calorie targets, report exports, and weekly digest previews."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Calculate BMR, TDEE, and goal calorie targets
    Tdee {
        /// Body weight in kilograms
        #[arg(long)]
        weight_kg: f64,

        /// Height in centimeters
        #[arg(long)]
        height_cm: f64,

        /// Age in years
        #[arg(long, required_unless_present = "birth_date", conflicts_with = "birth_date")]
        age: Option<u32>,

        /// Birth date (YYYY-MM-DD), used instead of --age
        #[arg(long)]
        birth_date: Option<NaiveDate>,

        /// Gender used for the BMR constant (male or female)
        #[arg(long)]
        gender: String,

        /// Activity level (sedentary, light, moderate, active, very_active)
        #[arg(long, default_value = "sedentary")]
        activity: String,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Render a data bundle as CSV, XLSX, PDF, or HTML
    Export {
        /// Bundle JSON file with profile, entries, and optional summaries
        #[arg(long)]
        input: PathBuf,

        /// Export format (csv_log, csv_daily, xlsx, pdf, html)
        #[arg(long)]
        format: ExportFormat,

        /// Output file
        #[arg(long)]
        output: PathBuf,

        /// First day of the range (defaults to the first day with data)
        #[arg(long)]
        start: Option<NaiveDate>,

        /// Last day of the range (defaults to the last day with data)
        #[arg(long)]
        end: Option<NaiveDate>,
    },

    /// Print the weekly digest email for a data bundle
    Digest {
        /// Bundle JSON file with profile, entries, and optional summaries
        #[arg(long)]
        input: PathBuf,

        /// Any day of the digest week
        #[arg(long)]
        week_start: NaiveDate,

        /// Print the HTML body instead of plain text
        #[arg(long)]
        html: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingConfig::for_cli(cli.verbose).init()?;

    let config = AnalyticsConfig::load()?;
    debug!(?config, "configuration loaded");

    match cli.command {
        Command::Tdee {
            weight_kg,
            height_cm,
            age,
            birth_date,
            gender,
            activity,
            json,
        } => {
            let age = commands::tdee::resolve_age(age, birth_date, Local::now().date_naive());
            commands::tdee::run(weight_kg, height_cm, age, &gender, &activity, json)?;
        }
        Command::Export {
            input,
            format,
            output,
            start,
            end,
        } => {
            commands::export::run(&config, &input, format, &output, start, end).await?;
        }
        Command::Digest {
            input,
            week_start,
            html,
        } => {
            commands::digest::run(&config, &input, week_start, html).await?;
        }
    }

    Ok(())
}
