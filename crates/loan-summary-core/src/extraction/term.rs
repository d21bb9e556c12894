//! Loan term in whole years.

use chrono::{Datelike, NaiveDate};
use serde_json::Value;

use super::dates::parse_date;
use super::resolver::resolve;

/// Explicit original term, in months.
pub const TERM_MONTHS_PATHS: [&str; 4] = [
    "mortgage_loan_information.original_term_months",
    "mortgage_loan_information.original_term_to_maturity_months",
    "loan_summary.original_term",
    "loan_term_original",
];

pub const FIRST_PAYMENT_DATE_PATHS: [&str; 1] = ["mortgage_loan_information.first_payment_date"];

pub const TERM_MATURITY_DATE_PATHS: [&str; 2] =
    ["mortgage_loan_information.maturity_date", "maturity_date"];

/// `"120 months"`, `"120"` or `120` read as 120. Fractional or worded
/// values (`"10 years"`) do not parse.
fn term_months(value: &Value) -> Option<i64> {
    let text = match value {
        Value::String(s) => s.to_lowercase(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    text.replace("months", "")
        .replace("month", "")
        .trim()
        .parse()
        .ok()
}

fn date_at(record: &Value, paths: &[&str]) -> Option<NaiveDate> {
    parse_date(resolve(record, paths)?.as_str()?)
}

/// Calendar months from first payment to maturity; days are ignored.
pub fn months_between(start: NaiveDate, end: NaiveDate) -> i64 {
    let years = i64::from(end.year()) - i64::from(start.year());
    let months = i64::from(end.month()) - i64::from(start.month());
    years * 12 + months
}

fn years_label(months: i64) -> String {
    format!("{} Years", months.div_euclid(12))
}

/// Term as `"N Years"`, floored.
///
/// An explicit month count wins. If none parses, the span from first payment
/// to maturity is used. Empty when neither is available.
pub fn loan_term(record: &Value) -> String {
    if let Some(months) = resolve(record, &TERM_MONTHS_PATHS).and_then(term_months) {
        return years_label(months);
    }
    let start = date_at(record, &FIRST_PAYMENT_DATE_PATHS);
    let end = date_at(record, &TERM_MATURITY_DATE_PATHS);
    match (start, end) {
        (Some(start), Some(end)) => years_label(months_between(start, end)),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_explicit_months() {
        let record = json!({"mortgage_loan_information": {"original_term_months": "120 months"}});
        assert_eq!(loan_term(&record), "10 Years");
        assert_eq!(loan_term(&json!({"loan_term_original": 61})), "5 Years");
    }

    #[test]
    fn test_unparsable_term_falls_back_to_dates() {
        let record = json!({
            "loan_summary": {"original_term": "Ten years"},
            "mortgage_loan_information": {
                "first_payment_date": "August 6, 2021",
                "maturity_date": "July 6, 2031"
            }
        });
        assert_eq!(loan_term(&record), "9 Years");
    }

    #[test]
    fn test_months_between_ignores_days() {
        let start = NaiveDate::from_ymd_opt(2021, 8, 31).unwrap();
        let end = NaiveDate::from_ymd_opt(2031, 8, 1).unwrap();
        assert_eq!(months_between(start, end), 120);
    }

    #[test]
    fn test_negative_span_floors() {
        assert_eq!(years_label(-1), "-1 Years");
    }

    #[test]
    fn test_nothing_available() {
        assert_eq!(loan_term(&json!({"maturity_date": "2031-07-06"})), "");
    }
}
