pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;

use crate::OutputFormat;
use serde_json::Value;

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => json::print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

/// The tabular payload of a command result: summary rows, or a plain list.
pub fn result_rows(value: &Value) -> Option<&[Value]> {
    let result = value.get("result")?;
    match result {
        Value::Array(items) => Some(items.as_slice()),
        Value::Object(map) => map.get("rows")?.as_array().map(Vec::as_slice),
        _ => None,
    }
}

/// Render a cell. Nulls are blank, matching the summary's empty cells.
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}

/// Header row taken from the first object, in key order.
pub fn headers_of(rows: &[Value]) -> Vec<String> {
    match rows.first() {
        Some(Value::Object(first)) => first.keys().cloned().collect(),
        _ => Vec::new(),
    }
}

/// Cells of one row, aligned to `headers`.
pub fn row_cells(row: &Value, headers: &[String]) -> Vec<String> {
    headers
        .iter()
        .map(|h| row.get(h.as_str()).map(cell_text).unwrap_or_default())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_result_rows_from_summary_envelope() {
        let value = json!({"result": {"rows": [{"Loan ID": "n1"}], "diagnostics": []}});
        let rows = result_rows(&value).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(headers_of(rows), vec!["Loan ID".to_string()]);
    }

    #[test]
    fn test_result_rows_absent_for_field_results() {
        let value = json!({"result": {"loan_id": "n1", "path": null}});
        assert!(result_rows(&value).is_none());
    }

    #[test]
    fn test_row_cells_align_to_headers() {
        let headers = vec!["b".to_string(), "a".to_string(), "c".to_string()];
        let row = json!({"a": 1, "b": "x"});
        assert_eq!(row_cells(&row, &headers), vec!["x", "1", ""]);
    }
}
