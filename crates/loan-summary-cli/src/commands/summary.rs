use clap::Args;
use serde_json::Value;

use loan_summary_core::summary::{build_loan_summary, build_loan_summary_for};

use crate::config::OverrideArgs;
use crate::input;

/// Arguments for the full summary table
#[derive(Args)]
pub struct SummaryArgs {
    /// Path to the JSON loan document (reads stdin when omitted)
    #[arg(long)]
    pub input: Option<String>,

    #[command(flatten)]
    pub tables: OverrideArgs,

    /// Include per-field extraction diagnostics in the output
    #[arg(long)]
    pub diagnostics: bool,
}

/// Arguments for a single loan's summary row
#[derive(Args)]
pub struct LoanArgs {
    /// Path to the JSON loan document (reads stdin when omitted)
    #[arg(long)]
    pub input: Option<String>,

    /// Loan id (top-level key of the document)
    #[arg(long)]
    pub loan_id: String,

    #[command(flatten)]
    pub tables: OverrideArgs,

    /// Include per-field extraction diagnostics in the output
    #[arg(long)]
    pub diagnostics: bool,
}

pub fn run_summary(args: SummaryArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let document = input::load_document(args.input.as_deref())?;
    let tables = args.tables.load()?;

    let mut output = build_loan_summary(&document, &tables)?;
    log::info!(
        "built {} rows, {} field gaps",
        output.result.rows.len(),
        output.result.diagnostics.len()
    );
    if !args.diagnostics {
        output.result.diagnostics.clear();
    }
    Ok(serde_json::to_value(output)?)
}

pub fn run_loan(args: LoanArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let document = input::load_document(args.input.as_deref())?;
    let tables = args.tables.load()?;

    let mut output = build_loan_summary_for(&document, &args.loan_id, &tables)?;
    if !args.diagnostics {
        output.result.diagnostics.clear();
    }
    Ok(serde_json::to_value(output)?)
}
