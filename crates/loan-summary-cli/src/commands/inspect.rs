use clap::Args;
use serde_json::{json, Value};

use loan_summary_core::extraction::resolver::resolve_with_path;

use crate::config::OverrideArgs;
use crate::input;

/// Arguments for candidate-path resolution
#[derive(Args)]
pub struct ResolveArgs {
    /// Path to the JSON loan document (reads stdin when omitted)
    #[arg(long)]
    pub input: Option<String>,

    /// Loan id (top-level key of the document)
    #[arg(long)]
    pub loan_id: String,

    /// Dotted candidate path, tried in the order given
    #[arg(long = "path", required = true)]
    pub paths: Vec<String>,
}

/// Arguments for printing the override tables
#[derive(Args)]
pub struct OverridesArgs {
    #[command(flatten)]
    pub tables: OverrideArgs,
}

pub fn run_resolve(args: ResolveArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let document = input::load_document(args.input.as_deref())?;
    let record = document
        .get(&args.loan_id)
        .ok_or_else(|| format!("loan '{}' not found in document", args.loan_id))?;

    let result = match resolve_with_path(record, &args.paths) {
        Some(found) => json!({
            "loan_id": args.loan_id,
            "path": found.path,
            "value": found.value,
        }),
        None => json!({
            "loan_id": args.loan_id,
            "path": Value::Null,
            "value": Value::Null,
        }),
    };
    Ok(json!({ "result": result }))
}

pub fn run_overrides(args: OverridesArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let tables = args.tables.load()?;

    let named = [
        ("tenant_ratings", &tables.tenant_ratings),
        ("deal_names", &tables.deal_names),
        ("issuer_names", &tables.issuer_names),
    ];
    let entries: Vec<Value> = named
        .iter()
        .flat_map(|(table, map)| {
            map.iter()
                .map(move |(key, value)| json!({"table": table, "key": key, "value": value}))
        })
        .collect();
    Ok(json!({ "result": entries }))
}
