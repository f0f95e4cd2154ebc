// ABOUTME: Output formatting helpers for nutrisnap-cli
// ABOUTME: Console tables for TDEE results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutrisnap::intelligence::{Goal, TdeeResult};
use nutrisnap::reports::format::{signed_thousands, thousands};

/// Print BMR, TDEE, and every goal target
pub fn display_tdee(result: &TdeeResult) {
    println!("\nEnergy Expenditure");
    println!("{}", "=".repeat(40));
    println!("   BMR:        {:>8} kcal/day", thousands(result.bmr as f64));
    println!("   Multiplier: {:>8}", result.multiplier);
    println!("   TDEE:       {:>8} kcal/day", thousands(result.tdee as f64));

    println!("\nDaily Calorie Targets");
    println!("{}", "=".repeat(40));
    for goal in Goal::ALL {
        println!(
            "   {:<16} {:>8} kcal ({})",
            goal.label(),
            thousands(result.targets.for_goal(goal) as f64),
            signed_thousands(goal.offset() as f64)
        );
    }

    if result.targets.aggressive_loss <= 0 {
        println!("\nWARNING: aggressive loss target is not positive; pick a milder goal");
    }
}
