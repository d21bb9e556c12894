use napi::Result as NapiResult;
use napi_derive::napi;

use loan_summary_core::extraction::{dates, resolver};
use loan_summary_core::overrides::OverrideTables;
use loan_summary_core::summary;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

fn tables(overrides_json: Option<String>) -> NapiResult<OverrideTables> {
    match overrides_json {
        Some(json) => Ok(OverrideTables::builtin()
            .merge(OverrideTables::from_json_str(&json).map_err(to_napi_error)?)),
        None => Ok(OverrideTables::builtin()),
    }
}

// ---------------------------------------------------------------------------
// Summary table
// ---------------------------------------------------------------------------

#[napi]
pub fn build_loan_summary(
    document_json: String,
    overrides_json: Option<String>,
) -> NapiResult<String> {
    let document: serde_json::Value =
        serde_json::from_str(&document_json).map_err(to_napi_error)?;
    let output =
        summary::build_loan_summary(&document, &tables(overrides_json)?).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn build_loan_row(
    document_json: String,
    loan_id: String,
    overrides_json: Option<String>,
) -> NapiResult<String> {
    let document: serde_json::Value =
        serde_json::from_str(&document_json).map_err(to_napi_error)?;
    let output = summary::build_loan_summary_for(&document, &loan_id, &tables(overrides_json)?)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Extraction helpers
// ---------------------------------------------------------------------------

#[napi]
pub fn resolve_path(record_json: String, paths: Vec<String>) -> NapiResult<String> {
    let record: serde_json::Value = serde_json::from_str(&record_json).map_err(to_napi_error)?;
    let found = resolver::resolve(&record, &paths).cloned().unwrap_or_default();
    serde_json::to_string(&found).map_err(to_napi_error)
}

#[napi]
pub fn format_date(raw: String) -> String {
    dates::fmt_date(&serde_json::Value::String(raw))
}
