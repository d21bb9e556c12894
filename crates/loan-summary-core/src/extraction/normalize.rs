//! Value normalizers: turn raw disclosure values into numbers, and numbers
//! into display strings.
//!
//! Parsers return `Option<Decimal>`; `None` means the value was absent or
//! could not be read. Formatters render `None` as an empty cell.

use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::{Decimal, RoundingStrategy};
use serde_json::Value;
use std::str::FromStr;

use crate::types::{Money, Multiple, Rate};

lazy_static! {
    /// Trailing US postal code (ZIP or ZIP+4) with its leading comma/space.
    static ref TRAILING_ZIP: Regex = Regex::new(r",?\s*\d{5}(-\d{4})?$").unwrap();
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parse a plain decimal or scientific literal.
pub fn parse_decimal(s: &str) -> Option<Decimal> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .ok()
}

fn number_to_decimal(n: &serde_json::Number) -> Option<Decimal> {
    parse_decimal(&n.to_string())
}

/// Numeric value of a balance, ratio or area.
///
/// Strings lose `$`, `,` and `%` and everything after the first space, so
/// `"5.2 years"` reads as 5.2.
pub fn extract_numeric(value: &Value) -> Option<Decimal> {
    match value {
        Value::String(s) => {
            let cleaned = s.replace(['$', ',', '%'], "");
            let first = cleaned.trim().split(' ').next().unwrap_or_default();
            parse_decimal(first)
        }
        Value::Number(n) => number_to_decimal(n),
        _ => None,
    }
}

/// Interest rate as a percentage. Only `%` is stripped.
pub fn extract_rate_value(value: &Value) -> Option<Rate> {
    match value {
        Value::String(s) => parse_decimal(&s.replace('%', "")),
        Value::Number(n) => number_to_decimal(n),
        _ => None,
    }
}

/// Pick the last of several `/`-separated alternates after dropping `strip`.
fn last_alternate(s: &str, strip: char) -> Option<Decimal> {
    let lowered = s.to_lowercase().replace(strip, "");
    lowered.split('/').next_back().and_then(parse_decimal)
}

/// DSCR multiple.
///
/// Accepts a `{"whole_loan": ...}` mapping, a number, or a string such as
/// `"1.20x/0.95x"` where the last alternate is the whole-loan figure.
pub fn extract_dscr_value(value: &Value) -> Option<Multiple> {
    match value {
        Value::Object(map) => match map.get("whole_loan")? {
            Value::Number(n) => number_to_decimal(n),
            Value::String(s) => parse_decimal(s),
            _ => None,
        },
        Value::String(s) => last_alternate(s, 'x'),
        Value::Number(n) => number_to_decimal(n),
        _ => None,
    }
}

/// Debt yield percentage, e.g. `"9.4%/9.0%"` reads as 9.0.
pub fn extract_debt_yield_value(value: &Value) -> Option<Rate> {
    match value {
        Value::String(s) => last_alternate(s, '%'),
        Value::Number(n) => number_to_decimal(n),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

/// Insert `,` every three digits of an integer string, keeping any sign.
fn group_thousands(integer: &str) -> String {
    let (sign, digits) = match integer.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer),
    };
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    format!("{sign}{out}")
}

/// Round half-to-even and render with exactly `dp` decimals.
fn fixed(value: Decimal, dp: u32) -> String {
    let mut rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointNearestEven);
    rounded.rescale(dp);
    rounded.to_string()
}

/// `$#,##0`
pub fn fmt_currency(value: Option<Money>) -> String {
    match value {
        Some(v) => format!("${}", group_thousands(&fixed(v, 0))),
        None => String::new(),
    }
}

/// `#.##%`
pub fn fmt_percent(value: Option<Rate>) -> String {
    match value {
        Some(v) => format!("{}%", fixed(v, 2)),
        None => String::new(),
    }
}

/// `#.##`
pub fn fmt_number(value: Option<Decimal>) -> String {
    value.map(|v| fixed(v, 2)).unwrap_or_default()
}

/// `#,##0`, truncating any fraction.
pub fn fmt_integer(value: Option<Decimal>) -> String {
    value
        .map(|v| group_thousands(&fixed(v.trunc(), 0)))
        .unwrap_or_default()
}

/// Render an arbitrary resolved value as cell text.
pub fn display_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Drop a trailing ZIP or ZIP+4 code from an address.
pub fn strip_zip(location: &str) -> String {
    TRAILING_ZIP.replace(location.trim(), "").into_owned()
}
