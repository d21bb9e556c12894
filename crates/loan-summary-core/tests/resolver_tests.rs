use loan_summary_core::extraction::resolver::{resolve, resolve_with_path};
use pretty_assertions::assert_eq;
use serde_json::json;

// ===========================================================================
// Candidate-path resolution
// ===========================================================================

#[test]
fn test_first_successful_path_wins() {
    let record = json!({
        "a": {"b": "first"},
        "c": "second"
    });
    assert_eq!(resolve(&record, &["a.b", "c"]), Some(&json!("first")));
}

#[test]
fn test_nth_path_after_broken_prefixes() {
    // Path 1 misses a key, path 2 indexes a mapping, path 3 indexes out of
    // range, path 4 descends into a scalar. Only path 5 resolves.
    let record = json!({
        "underwriting": {"ltv": {"cut_off": "55.0"}},
        "history": [{"occupancy": "93%"}],
        "summary": "n/a",
        "financial_information": {"whole_loan": {"ltv": {"cut_off": "40.3"}}}
    });
    let paths = [
        "underwriting.ltv.at_cut_off",
        "underwriting.0.ltv",
        "history.3.occupancy",
        "summary.ltv",
        "financial_information.whole_loan.ltv.cut_off",
    ];
    let found = resolve_with_path(&record, &paths).unwrap();
    assert_eq!(found.path, "financial_information.whole_loan.ltv.cut_off");
    assert_eq!(found.value, &json!("40.3"));
}

#[test]
fn test_list_index_segments() {
    let record = json!({
        "underwriting_and_financial_information": {
            "occupancy_history": [{"occupancy": "96.2%"}, {"occupancy": "94.0%"}]
        }
    });
    assert_eq!(
        resolve(
            &record,
            &["underwriting_and_financial_information.occupancy_history.0.occupancy"]
        ),
        Some(&json!("96.2%"))
    );
}

#[test]
fn test_numeric_zero_is_found_but_null_is_not() {
    let record = json!({"x": null, "y": 0, "z": 7});
    assert_eq!(resolve(&record, &["x", "y", "z"]), Some(&json!(0)));
}

#[test]
fn test_nothing_resolves() {
    let record = json!({"a": {"b": ""}});
    assert_eq!(resolve(&record, &["a.b", "a.c", "d"]), None);
}

#[test]
fn test_owned_candidate_paths() {
    let record = json!({"loan_summary": {"issuer": "GACC"}});
    let paths: Vec<String> = vec!["issuer".into(), "loan_summary.issuer".into()];
    let found = resolve_with_path(&record, &paths).unwrap();
    assert_eq!(found.path, "loan_summary.issuer");
}
