use serde_json::Value;

use super::{cell_text, result_rows};

/// Print just the key answer from the output.
pub fn print_minimal(value: &Value) {
    for line in minimal_lines(value) {
        println!("{}", line);
    }
}

/// Summary rows give `loan id<TAB>deal name` per loan; field results give
/// the resolved value, falling back to the first field.
fn minimal_lines(value: &Value) -> Vec<String> {
    if let Some(rows) = result_rows(value) {
        return rows.iter().map(row_line).collect();
    }

    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    if let Value::Object(map) = result_obj {
        if let Some(val) = map.get("value") {
            return vec![cell_text(val)];
        }
        if let Some((key, val)) = map.iter().next() {
            return vec![format!("{}: {}", key, cell_text(val))];
        }
    }

    vec![cell_text(result_obj)]
}

fn row_line(row: &Value) -> String {
    let Some(id) = row.get("Loan ID") else {
        return cell_text(row);
    };
    match row.get("Deal Name").map(cell_text) {
        Some(deal) if !deal.is_empty() => format!("{}\t{}", cell_text(id), deal),
        _ => cell_text(id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_summary_rows_print_id_and_deal() {
        let value = json!({"result": {"rows": [
            {"Loan ID": "n2711_x3", "Deal Name": "BANK 2021-BNK36", "Purpose": "Refinance"},
            {"Loan ID": "n1", "Deal Name": "", "Purpose": ""}
        ]}});
        assert_eq!(
            minimal_lines(&value),
            vec!["n2711_x3\tBANK 2021-BNK36".to_string(), "n1".to_string()]
        );
    }

    #[test]
    fn test_resolved_value_prints_alone() {
        let value = json!({"result": {"loan_id": "n1", "path": "a.b", "value": "3.15%"}});
        assert_eq!(minimal_lines(&value), vec!["3.15%".to_string()]);
    }
}
