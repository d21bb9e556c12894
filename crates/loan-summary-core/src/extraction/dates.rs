//! Free-text date parsing for maturity and payment dates.
//!
//! Disclosures write dates as `7/6/2031`, `2031-07-06`, `July 6, 2031` or
//! `July 6th, 2031 (ARD)`. Known layouts are tried first; anything else goes
//! through a token heuristic that reads month names, four-digit years and
//! month-first numeric dates. Missing days default to the 1st and missing
//! years fail, so the result never depends on the current date.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde_json::Value;

use super::normalize::display_text;

/// Layouts tried verbatim before tokenising.
const DATE_FORMATS: [&str; 9] = [
    "%Y-%m-%d",
    "%m/%d/%Y",
    "%Y/%m/%d",
    "%m-%d-%Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
    "%Y%m%d",
];

const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

const MONTHS: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

const WEEKDAYS: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

/// Connective words accepted even when noise words are rejected.
const JUMP_WORDS: [&str; 11] = ["at", "on", "and", "ad", "m", "t", "of", "st", "nd", "rd", "th"];

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Number { value: u32, digits: usize },
    Month(u32),
    Word,
}

fn month_from_word(word: &str) -> Option<u32> {
    if word.len() < 3 {
        return None;
    }
    if word == "sept" {
        return Some(9);
    }
    MONTHS
        .iter()
        .position(|m| *m == word || (word.len() == 3 && m.starts_with(word)))
        .and_then(|i| u32::try_from(i + 1).ok())
}

fn is_known_word(word: &str) -> bool {
    JUMP_WORDS.contains(&word)
        || WEEKDAYS
            .iter()
            .any(|d| *d == word || (word.len() == 3 && d.starts_with(word)))
}

/// Split into runs of digits and runs of letters. `None` when a noise word
/// appears and `fuzzy` is off.
fn tokenize(raw: &str, fuzzy: bool) -> Option<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = raw.chars().peekable();
    while let Some(&ch) = chars.peek() {
        if ch.is_ascii_digit() {
            let mut run = String::new();
            while let Some(&d) = chars.peek().filter(|c| c.is_ascii_digit()) {
                run.push(d);
                chars.next();
            }
            // Runs too long for a u32 are noise, never a date part.
            if let Ok(value) = run.parse::<u32>() {
                tokens.push(Token::Number {
                    value,
                    digits: run.len(),
                });
            }
        } else if ch.is_alphabetic() {
            let mut run = String::new();
            while let Some(&a) = chars.peek().filter(|c| c.is_alphabetic()) {
                run.push(a);
                chars.next();
            }
            let word = run.to_lowercase();
            if let Some(month) = month_from_word(&word) {
                tokens.push(Token::Month(month));
            } else if fuzzy || is_known_word(&word) {
                tokens.push(Token::Word);
            } else {
                return None;
            }
        } else {
            chars.next();
        }
    }
    Some(tokens)
}

fn expand_two_digit_year(yy: u32) -> i32 {
    let yy = i32::try_from(yy).unwrap_or_default();
    if yy <= 68 {
        2000 + yy
    } else {
        1900 + yy
    }
}

/// Assemble a date from tokens, month-first when the order is ambiguous.
fn from_tokens(tokens: &[Token]) -> Option<NaiveDate> {
    let named_month = tokens.iter().find_map(|t| match t {
        Token::Month(m) => Some(*m),
        _ => None,
    });
    let numbers: Vec<(u32, usize)> = tokens
        .iter()
        .filter_map(|t| match t {
            Token::Number { value, digits } => Some((*value, *digits)),
            _ => None,
        })
        .collect();

    let year_pos = numbers.iter().position(|&(_, digits)| digits == 4);
    let mut rest: Vec<u32> = numbers
        .iter()
        .enumerate()
        .filter(|&(i, &(_, digits))| Some(i) != year_pos && digits <= 2)
        .map(|(_, &(value, _))| value)
        .collect();

    let year = match year_pos {
        Some(i) => i32::try_from(numbers[i].0).ok()?,
        // m/d/yy: the third short number is the year.
        None if named_month.is_none() && rest.len() >= 3 => {
            let yy = rest.remove(2);
            expand_two_digit_year(yy)
        }
        None if named_month.is_some() && rest.len() >= 2 => {
            let yy = rest.remove(1);
            expand_two_digit_year(yy)
        }
        None => return None,
    };

    let (month, day) = match named_month {
        Some(month) => (month, rest.first().copied().unwrap_or(1)),
        None => {
            let first = *rest.first()?;
            let second = rest.get(1).copied().unwrap_or(1);
            if first > 12 && second <= 12 {
                (second, first)
            } else {
                (first, second)
            }
        }
    };

    NaiveDate::from_ymd_opt(year, month, day)
}

/// `%Y` also accepts short years ("7/6/31" reads as year 31); those are
/// left to the two-digit-year handling in `from_tokens`.
fn from_known_format(raw: &str) -> Option<NaiveDate> {
    let plausible = |date: &NaiveDate| date.year() >= 1000;
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok().filter(plausible))
        .or_else(|| {
            DATETIME_FORMATS.iter().find_map(|fmt| {
                NaiveDateTime::parse_from_str(raw, fmt)
                    .ok()
                    .map(|dt| dt.date())
                    .filter(plausible)
            })
        })
}

/// Parse a date that may carry noise words around it.
#[must_use]
pub fn parse_fuzzy_date(raw: &str) -> Option<NaiveDate> {
    parse_with(raw, true)
}

/// Parse a date, rejecting unknown words.
#[must_use]
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    parse_with(raw, false)
}

fn parse_with(raw: &str, fuzzy: bool) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    from_known_format(raw).or_else(|| from_tokens(&tokenize(raw, fuzzy)?))
}

/// `M/D/YYYY`, no zero padding.
pub fn format_us_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}

/// Render a maturity date cell. Text that does not parse is shown as-is.
pub fn fmt_date(value: &Value) -> String {
    match value {
        Value::String(s) => parse_fuzzy_date(s)
            .map(format_us_date)
            .unwrap_or_else(|| s.clone()),
        other => display_text(other),
    }
}
