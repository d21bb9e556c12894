use loan_summary_core::extraction::normalize::*;
use loan_summary_core::extraction::{fmt_date, loan_term, tenant_rating, top_tenant};
use loan_summary_core::overrides::OverrideTables;
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;
use serde_json::{json, Value};

// ===========================================================================
// Numeric extraction
// ===========================================================================

#[test]
fn test_extract_numeric_known_answers() {
    assert_eq!(extract_numeric(&json!("$1,234.50")), Some(dec!(1234.50)));
    assert_eq!(extract_numeric(&json!("12%")), Some(dec!(12)));
    assert_eq!(extract_numeric(&json!("")), None);
    assert_eq!(extract_numeric(&Value::Null), None);
    assert_eq!(extract_numeric(&json!(250000)), Some(dec!(250000)));
}

#[test]
fn test_dscr_last_alternate() {
    assert_eq!(extract_dscr_value(&json!("1.20x/0.95x")), Some(dec!(0.95)));
    assert_eq!(extract_dscr_value(&json!("2.45X")), Some(dec!(2.45)));
    assert_eq!(extract_dscr_value(&json!(1.8)), Some(dec!(1.8)));
    assert_eq!(extract_dscr_value(&json!({"whole_loan": 1.62})), Some(dec!(1.62)));
    assert_eq!(extract_dscr_value(&json!("NAP")), None);
}

#[test]
fn test_debt_yield_last_alternate() {
    assert_eq!(extract_debt_yield_value(&json!("9.4%/9.0%")), Some(dec!(9.0)));
    assert_eq!(extract_debt_yield_value(&json!("11.2%")), Some(dec!(11.2)));
    assert_eq!(extract_debt_yield_value(&json!({"whole_loan": "9.0%"})), None);
}

// ===========================================================================
// Formatting
// ===========================================================================

#[test]
fn test_fmt_currency() {
    assert_eq!(fmt_currency(Some(dec!(1234567))), "$1,234,567");
    assert_eq!(fmt_currency(Some(dec!(999.5))), "$1,000");
    assert_eq!(fmt_currency(None), "");
}

#[test]
fn test_fmt_percent_and_number() {
    assert_eq!(fmt_percent(Some(dec!(40.3))), "40.30%");
    assert_eq!(fmt_percent(Some(dec!(3.0525))), "3.05%");
    assert_eq!(fmt_percent(None), "");
    assert_eq!(fmt_number(Some(dec!(1.2))), "1.20");
    assert_eq!(fmt_number(None), "");
}

#[test]
fn test_fmt_integer_truncates() {
    assert_eq!(fmt_integer(Some(dec!(485210.9))), "485,210");
    assert_eq!(fmt_integer(Some(dec!(980))), "980");
    assert_eq!(fmt_integer(None), "");
}

#[test]
fn test_fmt_date() {
    assert_eq!(fmt_date(&json!("July 6, 2031")), "7/6/2031");
    assert_eq!(fmt_date(&json!("2032-01-09")), "1/9/2032");
    assert_eq!(fmt_date(&json!("10/01/2030 (ARD)")), "10/1/2030");
    assert_eq!(fmt_date(&json!("See Annex A")), "See Annex A");
}

#[test]
fn test_strip_zip() {
    assert_eq!(strip_zip("Sterling, VA 20166"), "Sterling, VA");
    assert_eq!(strip_zip("Sterling, VA 20166-1234"), "Sterling, VA");
    assert_eq!(strip_zip("  Austin, TX  "), "Austin, TX");
    assert_eq!(strip_zip("New York, NY, 10001"), "New York, NY");
}

// ===========================================================================
// Domain extractors
// ===========================================================================

#[test]
fn test_top_tenant_source_priority() {
    let record = json!({
        "tenant_summary": {"tenants": [
            {"name": "Later Source Co", "percent_of_total_uw_base_rent": "90%"}
        ]},
        "largest_tenants_based_on_uw_base_rent": {"tenants": [
            {"tenant_name": "Amazon", "percent_of_uw_base_rent": "38.1%"},
            {"tenant_name": "Microsoft", "percent_of_uw_base_rent": "41.7%"}
        ]}
    });
    assert_eq!(top_tenant(&record), "Microsoft");
}

#[test]
fn test_top_tenant_nameless_entry_tries_next_source() {
    let record = json!({
        "major_tenant": {"tenants": [
            {"tenant": "Wrong Key", "percent_of_total_annual_uw_base_rent": "70%"}
        ]},
        "top_tenant_summary": {"tenants": [
            {"name": "Fallback Tenant", "percent_uw_base_rent": "25%"}
        ]}
    });
    assert_eq!(top_tenant(&record), "Fallback Tenant");
}

#[test]
fn test_top_tenant_absent() {
    assert_eq!(top_tenant(&json!({"major_tenant": {"tenants": []}})), "");
}

#[test]
fn test_tenant_rating_from_rent_roll() {
    let record = json!({
        "major_tenant": {"tenants": [
            {"name": "Other", "credit_rating": {"S&P": "AAA"}}
        ]},
        "tenant_summary": {"tenants": [
            {"name": "Anchor", "credit_rating": {"S&P": "A-", "moody's": "NR", "FITCH": "BBB+"}}
        ]}
    });
    let rating = tenant_rating(&record, "Anchor", "n-unknown", &OverrideTables::builtin());
    assert_eq!(rating, "S&P: A- / Fitch: BBB+");
}

#[test]
fn test_tenant_rating_override_wins() {
    let record = json!({
        "major_tenant": {"tenants": [
            {"name": "Anchor", "credit_rating": {"S&P": "AAA"}}
        ]}
    });
    let rating = tenant_rating(&record, "Anchor", "n2450-x2", &OverrideTables::builtin());
    assert_eq!(rating, "S&P: B / Moody's: Caa1");
}

#[test]
fn test_tenant_rating_first_match_is_final() {
    let record = json!({
        "major_tenant": {"tenants": [
            {"name": "Anchor", "credit_rating": {"S&P": "NR"}}
        ]},
        "tenant_summary": {"tenants": [
            {"name": "Anchor", "credit_rating": {"S&P": "AA"}}
        ]}
    });
    assert_eq!(tenant_rating(&record, "Anchor", "x", &OverrideTables::default()), "");
}

#[test]
fn test_loan_term_from_dates() {
    let record = json!({
        "mortgage_loan_information": {"first_payment_date": "2021-09-06"},
        "maturity_date": "2031-08-06"
    });
    assert_eq!(loan_term(&record), "9 Years");
}
