//! Manual lookup tables that fill or replace extracted values.
//!
//! The built-in tables cover loans whose disclosures omit the deal name or
//! carry ratings only in prose. A user file can extend or replace them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::{LoanSummaryError, LoanSummaryResult};

// ---------------------------------------------------------------------------
// Built-in tables
// ---------------------------------------------------------------------------

const TENANT_RATINGS: &[(&str, &str)] = &[
    ("n2405-x1", "S&P: A- / Moody's: Baa1 / Fitch: BBB"),
    ("n2450-x2", "S&P: B / Moody's: Caa1"),
    ("n3021-x3", "DBRS: BBB(sf)"),
    ("n3791_x3", "S&P: BBB+ / Moody's: Baa1 / Fitch: A-"),
];

const DEAL_NAMES: &[(&str, &str)] = &[
    ("n1967-x4", "Series 2020-BNK25"),
    ("n2405-x1", "BENCHMARK 2021-B23"),
    ("n2450-x2", "BENCHMARK 2021-B24"),
    ("n2711_x3", "BANK 2021-BNK36"),
    ("n3021-x3", "BENCHMARK 2022-B34"),
    ("n3791_x3", "Series 2023-C22"),
];

const ISSUER_NAMES: &[(&str, &str)] = &[
    ("GACC", "Goldman Sachs"),
    ("MSMCH", "Morgan Stanley Mortgage Capital Holdings"),
    ("GSMC", "Goldman Sachs Mortgage Company"),
    ("JPMCB", "J.P. Morgan Chase Bank"),
];

fn table(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

// ---------------------------------------------------------------------------
// OverrideTables
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverrideTables {
    /// Loan id -> full tenant rating text. Wins over any extracted rating.
    #[serde(default)]
    pub tenant_ratings: BTreeMap<String, String>,
    /// Loan id -> securitisation deal name.
    #[serde(default)]
    pub deal_names: BTreeMap<String, String>,
    /// Loan seller code -> full issuer name.
    #[serde(default)]
    pub issuer_names: BTreeMap<String, String>,
}

impl OverrideTables {
    /// The tables shipped with the crate.
    pub fn builtin() -> Self {
        OverrideTables {
            tenant_ratings: table(TENANT_RATINGS),
            deal_names: table(DEAL_NAMES),
            issuer_names: table(ISSUER_NAMES),
        }
    }

    /// Parse tables from JSON. Missing tables are empty.
    pub fn from_json_str(json: &str) -> LoanSummaryResult<Self> {
        serde_json::from_str(json).map_err(|e| LoanSummaryError::InvalidInput {
            field: "overrides".into(),
            reason: e.to_string(),
        })
    }

    /// Layer `other` on top of `self`; entries in `other` win.
    pub fn merge(mut self, other: OverrideTables) -> Self {
        self.tenant_ratings.extend(other.tenant_ratings);
        self.deal_names.extend(other.deal_names);
        self.issuer_names.extend(other.issuer_names);
        self
    }

    pub fn tenant_rating(&self, loan_id: &str) -> Option<&str> {
        self.tenant_ratings.get(loan_id).map(String::as_str)
    }

    pub fn deal_name(&self, loan_id: &str) -> Option<&str> {
        self.deal_names.get(loan_id).map(String::as_str)
    }

    /// Full issuer name for a seller code; unknown codes pass through.
    pub fn issuer_name<'a>(&'a self, code: &'a str) -> &'a str {
        self.issuer_names.get(code).map_or(code, String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tenant_ratings.len() + self.deal_names.len() + self.issuer_names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
