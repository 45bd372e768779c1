//! Currency amount parsing for profile funding fields.
//!
//! Upstream ships amounts in whatever shape the source system had: bare
//! numbers, "$5M", "250K", "$1,250,000", or stage names like "Seed". This
//! parser is total: every input resolves to a finite number, with 0 for
//! anything unrecognizable.

use std::sync::OnceLock;

use regex::Regex;

use crate::raw::RawAmount;

// Longest leading float: sign, digits with optional fraction (or a bare
// fraction), optional exponent. Deliberately excludes inf/NaN spellings.
fn float_prefix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?").unwrap()
    })
}

/// Convert an upstream amount to a number.
pub fn parse_amount(amount: &RawAmount) -> f64 {
    match amount {
        RawAmount::Number(n) if n.is_finite() => *n,
        RawAmount::Number(_) => 0.0,
        RawAmount::Text(text) => parse_amount_text(text),
    }
}

fn parse_amount_text(raw: &str) -> f64 {
    if raw.is_empty() || raw == "0" {
        return 0.0;
    }

    let stripped: String = raw.chars().filter(|c| !matches!(c, '$' | ',')).collect();

    // Stage names and anything else without a leading number read as zero.
    if stripped.eq_ignore_ascii_case("seed") || leading_float(&stripped).is_none() {
        return 0.0;
    }

    // Scale markers are matched anywhere in the text, not just as a suffix,
    // and are case-sensitive: "5M" is five million, "5m" is just 5.
    if stripped.contains('M') {
        return scaled(&stripped.replace('M', ""), 1_000_000.0);
    }
    if stripped.contains('K') {
        return scaled(&stripped.replace('K', ""), 1_000.0);
    }

    leading_float(&stripped).unwrap_or(0.0)
}

/// Apply a scale factor; a product that overflows to infinity reads as zero,
/// keeping the parser finite even when the unscaled number was fine.
fn scaled(text: &str, factor: f64) -> f64 {
    let value = leading_float(text).unwrap_or(0.0) * factor;
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Read the longest leading float out of the text, tolerating leading
/// whitespace and trailing junk. Non-finite reads are rejected so every
/// amount stays a real number.
fn leading_float(text: &str) -> Option<f64> {
    let matched = float_prefix().find(text.trim_start())?;
    let value: f64 = matched.as_str().parse().ok()?;
    value.is_finite().then_some(value)
}
