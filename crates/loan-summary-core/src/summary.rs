//! Loan summary table: one display row per loan record.
//!
//! Every column is extracted independently. A missing or unreadable value
//! leaves an empty cell (the maturity date keeps its raw text) and adds a
//! [`FieldDiagnostic`] so the gap can be traced back to the source record.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::time::Instant;

use crate::extraction::normalize::{display_text, strip_zip};
use crate::extraction::{
    dates, fields, fmt_currency, fmt_integer, fmt_number, fmt_percent, loan_term, normalize,
    resolve, tenant_rating, top_tenant,
};
use crate::overrides::OverrideTables;
use crate::types::{with_metadata, ComputationOutput};
use crate::{LoanSummaryError, LoanSummaryResult};

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

/// Column headers in display order.
pub const COLUMNS: [&str; 18] = [
    "Loan ID",
    "Deal Name",
    "Purpose",
    "Issuer",
    "Borrower",
    "Top Tenant",
    "Tenant Credit Rating",
    "Original Balance",
    "Interest Rate",
    "DSCR",
    "Debt Yield",
    "Cut-off LTV",
    "Maturity LTV",
    "Occupancy Rate",
    "Location",
    "SQFT",
    "Loan Term",
    "Maturity Date",
];

/// One row of the summary table. All cells are display-ready text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanSummaryRow {
    #[serde(rename = "Loan ID")]
    pub loan_id: String,
    #[serde(rename = "Deal Name")]
    pub deal_name: String,
    #[serde(rename = "Purpose")]
    pub purpose: String,
    #[serde(rename = "Issuer")]
    pub issuer: String,
    #[serde(rename = "Borrower")]
    pub borrower: String,
    #[serde(rename = "Top Tenant")]
    pub top_tenant: String,
    #[serde(rename = "Tenant Credit Rating")]
    pub tenant_credit_rating: String,
    /// `$#,##0`
    #[serde(rename = "Original Balance")]
    pub original_balance: String,
    /// `#.##%`
    #[serde(rename = "Interest Rate")]
    pub interest_rate: String,
    /// `#.##`
    #[serde(rename = "DSCR")]
    pub dscr: String,
    #[serde(rename = "Debt Yield")]
    pub debt_yield: String,
    #[serde(rename = "Cut-off LTV")]
    pub cut_off_ltv: String,
    #[serde(rename = "Maturity LTV")]
    pub maturity_ltv: String,
    #[serde(rename = "Occupancy Rate")]
    pub occupancy_rate: String,
    #[serde(rename = "Location")]
    pub location: String,
    /// `#,##0`
    #[serde(rename = "SQFT")]
    pub sqft: String,
    /// `N Years`
    #[serde(rename = "Loan Term")]
    pub loan_term: String,
    /// `M/D/YYYY`
    #[serde(rename = "Maturity Date")]
    pub maturity_date: String,
}

impl LoanSummaryRow {
    /// Cells in [`COLUMNS`] order.
    pub fn cells(&self) -> [&str; 18] {
        [
            self.loan_id.as_str(),
            self.deal_name.as_str(),
            self.purpose.as_str(),
            self.issuer.as_str(),
            self.borrower.as_str(),
            self.top_tenant.as_str(),
            self.tenant_credit_rating.as_str(),
            self.original_balance.as_str(),
            self.interest_rate.as_str(),
            self.dscr.as_str(),
            self.debt_yield.as_str(),
            self.cut_off_ltv.as_str(),
            self.maturity_ltv.as_str(),
            self.occupancy_rate.as_str(),
            self.location.as_str(),
            self.sqft.as_str(),
            self.loan_term.as_str(),
            self.maturity_date.as_str(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// No candidate path held a value.
    Missing,
    /// A value was found but could not be read.
    Unparsable { raw: String },
}

/// Why one cell of one row is blank (or raw).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDiagnostic {
    pub loan_id: String,
    pub column: String,
    #[serde(flatten)]
    pub kind: DiagnosticKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanSummary {
    pub rows: Vec<LoanSummaryRow>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub diagnostics: Vec<FieldDiagnostic>,
}

// ---------------------------------------------------------------------------
// Row extraction
// ---------------------------------------------------------------------------

/// Extracts the cells of one loan, noting every gap.
struct RowBuilder<'a> {
    loan_id: &'a str,
    record: &'a Value,
    diagnostics: &'a mut Vec<FieldDiagnostic>,
}

impl<'a> RowBuilder<'a> {
    fn note(&mut self, column: &str, kind: DiagnosticKind) {
        match &kind {
            DiagnosticKind::Missing => log::debug!("{}: no value for {column}", self.loan_id),
            DiagnosticKind::Unparsable { raw } => {
                log::warn!("{}: could not read {column} from {raw:?}", self.loan_id)
            }
        }
        self.diagnostics.push(FieldDiagnostic {
            loan_id: self.loan_id.to_string(),
            column: column.to_string(),
            kind,
        });
    }

    fn lookup(&mut self, column: &str, paths: &[&str]) -> Option<&'a Value> {
        let found = resolve(self.record, paths);
        if found.is_none() {
            self.note(column, DiagnosticKind::Missing);
        }
        found
    }

    fn text(&mut self, column: &str, paths: &[&str]) -> String {
        self.lookup(column, paths)
            .map(display_text)
            .unwrap_or_default()
    }

    fn number(
        &mut self,
        column: &str,
        paths: &[&str],
        parse: fn(&Value) -> Option<Decimal>,
    ) -> Option<Decimal> {
        let raw = self.lookup(column, paths)?;
        let parsed = parse(raw);
        if parsed.is_none() {
            self.note(
                column,
                DiagnosticKind::Unparsable {
                    raw: display_text(raw),
                },
            );
        }
        parsed
    }

    fn required(&mut self, column: &str, cell: String) -> String {
        if cell.is_empty() {
            self.note(column, DiagnosticKind::Missing);
        }
        cell
    }

    fn build(mut self, overrides: &OverrideTables) -> LoanSummaryRow {
        let record = self.record;
        let loan_id = self.loan_id;

        let purpose = self.text("Purpose", fields::PURPOSE);
        let borrower = self.text("Borrower", fields::BORROWER);
        let issuer = self
            .lookup("Issuer", fields::ISSUER)
            .map(|raw| overrides.issuer_name(&display_text(raw)).to_string())
            .unwrap_or_default();

        let tenant = self.required("Top Tenant", top_tenant(record));
        let rating = tenant_rating(record, &tenant, loan_id, overrides);
        let rating = if overrides.tenant_rating(loan_id).is_some() {
            rating
        } else {
            self.required("Tenant Credit Rating", rating)
        };

        let balance = self.number(
            "Original Balance",
            fields::ORIGINAL_BALANCE,
            normalize::extract_numeric,
        );
        let rate = self.number(
            "Interest Rate",
            fields::INTEREST_RATE,
            normalize::extract_rate_value,
        );
        let dscr = self.number("DSCR", fields::DSCR, normalize::extract_dscr_value);
        let debt_yield = self.number(
            "Debt Yield",
            fields::DEBT_YIELD,
            normalize::extract_debt_yield_value,
        );
        let cut_off_ltv = self.number("Cut-off LTV", fields::CUT_OFF_LTV, normalize::extract_numeric);
        let maturity_ltv = self.number(
            "Maturity LTV",
            fields::MATURITY_LTV,
            normalize::extract_numeric,
        );
        let occupancy = self.number("Occupancy Rate", fields::OCCUPANCY, normalize::extract_numeric);

        let location = match self.lookup("Location", fields::LOCATION) {
            Some(Value::String(s)) => strip_zip(s),
            Some(other) => display_text(other),
            None => String::new(),
        };
        let sqft = self.number("SQFT", fields::SQFT, normalize::extract_numeric);
        let term = self.required("Loan Term", loan_term(record));

        let maturity_date = match self.lookup("Maturity Date", fields::MATURITY_DATE) {
            Some(raw) => {
                if raw.as_str().and_then(dates::parse_fuzzy_date).is_none() {
                    self.note(
                        "Maturity Date",
                        DiagnosticKind::Unparsable {
                            raw: display_text(raw),
                        },
                    );
                }
                dates::fmt_date(raw)
            }
            None => String::new(),
        };

        LoanSummaryRow {
            loan_id: loan_id.to_string(),
            deal_name: overrides.deal_name(loan_id).unwrap_or_default().to_string(),
            purpose,
            issuer,
            borrower,
            top_tenant: tenant,
            tenant_credit_rating: rating,
            original_balance: fmt_currency(balance),
            interest_rate: fmt_percent(rate),
            dscr: fmt_number(dscr),
            debt_yield: fmt_percent(debt_yield),
            cut_off_ltv: fmt_percent(cut_off_ltv),
            maturity_ltv: fmt_percent(maturity_ltv),
            occupancy_rate: fmt_percent(occupancy),
            location,
            sqft: fmt_integer(sqft),
            loan_term: term,
            maturity_date,
        }
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Build the row for a single loan, appending gaps to `diagnostics`.
pub fn build_row(
    loan_id: &str,
    record: &Value,
    overrides: &OverrideTables,
    diagnostics: &mut Vec<FieldDiagnostic>,
) -> LoanSummaryRow {
    RowBuilder {
        loan_id,
        record,
        diagnostics,
    }
    .build(overrides)
}

/// One row per loan, in source order, with the gaps found along the way.
pub fn build_rows_with_diagnostics(
    loans: &Map<String, Value>,
    overrides: &OverrideTables,
) -> LoanSummary {
    let mut diagnostics = Vec::new();
    let rows = loans
        .iter()
        .map(|(loan_id, record)| build_row(loan_id, record, overrides, &mut diagnostics))
        .collect();
    LoanSummary { rows, diagnostics }
}

/// One row per loan, in source order.
pub fn build_rows(loans: &Map<String, Value>, overrides: &OverrideTables) -> Vec<LoanSummaryRow> {
    build_rows_with_diagnostics(loans, overrides).rows
}

fn loan_map(document: &Value) -> LoanSummaryResult<&Map<String, Value>> {
    document
        .as_object()
        .ok_or_else(|| LoanSummaryError::InvalidInput {
            field: "document".into(),
            reason: "expected an object mapping loan ids to loan records".into(),
        })
}

fn summarize(
    loans: &Map<String, Value>,
    overrides: &OverrideTables,
    start: Instant,
) -> ComputationOutput<LoanSummary> {
    let summary = build_rows_with_diagnostics(loans, overrides);

    let mut warnings: Vec<String> = Vec::new();
    for row in &summary.rows {
        let gaps: Vec<&str> = summary
            .diagnostics
            .iter()
            .filter(|d| d.loan_id == row.loan_id)
            .map(|d| d.column.as_str())
            .collect();
        if !gaps.is_empty() {
            warnings.push(format!(
                "{}: {} column(s) unresolved ({})",
                row.loan_id,
                gaps.len(),
                gaps.join(", ")
            ));
        }
    }

    let assumptions = serde_json::json!({
        "loans": loans.len(),
        "tenant_rating_overrides": overrides.tenant_ratings.len(),
        "deal_name_overrides": overrides.deal_names.len(),
        "issuer_names": overrides.issuer_names.len(),
    });

    let elapsed = start.elapsed().as_micros() as u64;
    with_metadata(
        "Candidate-path extraction with first-match fallback; blank cells for absent or unreadable values",
        &assumptions,
        warnings,
        elapsed,
        summary,
    )
}

/// Build the summary table for a whole disclosure document.
///
/// The document must be an object keyed by loan id. Nothing inside a loan
/// record can fail the build.
pub fn build_loan_summary(
    document: &Value,
    overrides: &OverrideTables,
) -> LoanSummaryResult<ComputationOutput<LoanSummary>> {
    let start = Instant::now();
    let loans = loan_map(document)?;
    Ok(summarize(loans, overrides, start))
}

/// Build the summary for a single loan of a disclosure document.
pub fn build_loan_summary_for(
    document: &Value,
    loan_id: &str,
    overrides: &OverrideTables,
) -> LoanSummaryResult<ComputationOutput<LoanSummary>> {
    let start = Instant::now();
    let loans = loan_map(document)?;
    let record = loans.get(loan_id).ok_or_else(|| {
        LoanSummaryError::InsufficientData(format!("loan '{loan_id}' not found in document"))
    })?;
    let mut single = Map::new();
    single.insert(loan_id.to_string(), record.clone());
    Ok(summarize(&single, overrides, start))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_columns_match_serialized_order() {
        let row = LoanSummaryRow::default();
        let value = serde_json::to_value(&row).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, COLUMNS.to_vec());
    }

    #[test]
    fn test_maturity_date_raw_fallback_is_diagnosed() {
        let mut diagnostics = Vec::new();
        let record = json!({"maturity_date": "Anticipated repayment"});
        let row = build_row("n1", &record, &OverrideTables::default(), &mut diagnostics);
        assert_eq!(row.maturity_date, "Anticipated repayment");
        assert!(diagnostics.iter().any(|d| d.column == "Maturity Date"
            && d.kind
                == DiagnosticKind::Unparsable {
                    raw: "Anticipated repayment".into()
                }));
    }

    #[test]
    fn test_override_rating_is_not_diagnosed() {
        let mut diagnostics = Vec::new();
        let row = build_row(
            "n3021-x3",
            &json!({}),
            &OverrideTables::builtin(),
            &mut diagnostics,
        );
        assert_eq!(row.tenant_credit_rating, "DBRS: BBB(sf)");
        assert!(diagnostics
            .iter()
            .all(|d| d.column != "Tenant Credit Rating"));
    }
}
