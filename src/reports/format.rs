// ABOUTME: Number and flag formatting shared by the CSV, XLSX, PDF, and HTML renderers
// ABOUTME: Calories whole, grams one decimal, confidence two decimals, grouped thousands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Calories as a whole number
#[must_use]
pub fn calories(value: f64) -> String {
    format!("{:.0}", normalize_zero(value.round()))
}

/// Grams with one decimal
#[must_use]
pub fn grams(value: f64) -> String {
    one_decimal(value)
}

/// Percentage with one decimal, no sign or suffix
#[must_use]
pub fn percent(value: f64) -> String {
    one_decimal(value)
}

/// Confidence with two decimals, empty when absent
#[must_use]
pub fn confidence(value: Option<f64>) -> String {
    value.map_or_else(String::new, |c| format!("{c:.2}"))
}

/// `Yes` / `No` flag
#[must_use]
pub const fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

/// Whole number with thousands separators, e.g. `12,345`
#[must_use]
pub fn thousands(value: f64) -> String {
    let rounded = normalize_zero(value.round());
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0.0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Whole number with an explicit sign and thousands separators, e.g. `+1,250`
#[must_use]
pub fn signed_thousands(value: f64) -> String {
    let body = thousands(value);
    if body.starts_with('-') || body == "0" {
        body
    } else {
        format!("+{body}")
    }
}

fn one_decimal(value: f64) -> String {
    format!("{:.1}", normalize_zero((value * 10.0).round() / 10.0))
}

/// Collapse `-0.0` so it never prints as `-0`
fn normalize_zero(value: f64) -> f64 {
    if value.abs() < 0.5e-9 {
        0.0
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thousands_grouping() {
        assert_eq!(thousands(0.0), "0");
        assert_eq!(thousands(999.4), "999");
        assert_eq!(thousands(1_000.0), "1,000");
        assert_eq!(thousands(1_234_567.0), "1,234,567");
        assert_eq!(thousands(-2_500.0), "-2,500");
    }

    #[test]
    fn test_signed_thousands() {
        assert_eq!(signed_thousands(1_250.0), "+1,250");
        assert_eq!(signed_thousands(-300.0), "-300");
        assert_eq!(signed_thousands(0.0), "0");
    }

    #[test]
    fn test_field_precision() {
        assert_eq!(calories(512.6), "513");
        assert_eq!(grams(23.456), "23.5");
        assert_eq!(confidence(Some(0.8)), "0.80");
        assert_eq!(confidence(None), "");
        assert_eq!(yes_no(true), "Yes");
    }
}
