use serde_json::Value;
use tabled::{builder::Builder, Table};

use super::{cell_text, headers_of, result_rows, row_cells};

/// Format output as a table using the tabled crate.
pub fn print_table(value: &Value) {
    if let Some(rows) = result_rows(value) {
        print_array_table(rows);
        print_diagnostics(value);
        print_envelope_notes(value);
        return;
    }

    match value.get("result") {
        Some(Value::Object(result)) => {
            let mut builder = Builder::default();
            builder.push_record(["Field", "Value"]);
            for (key, val) in result {
                builder.push_record([key.clone(), cell_text(val)]);
            }
            println!("{}", Table::from(builder));
        }
        Some(other) => println!("{}", cell_text(other)),
        None => println!("{}", value),
    }
}

fn print_array_table(rows: &[Value]) {
    if rows.is_empty() {
        println!("(empty)");
        return;
    }

    let headers = headers_of(rows);
    let mut builder = Builder::default();
    builder.push_record(headers.clone());
    for row in rows {
        builder.push_record(row_cells(row, &headers));
    }
    println!("{}", Table::from(builder));
}

fn print_diagnostics(value: &Value) {
    let Some(Value::Array(diagnostics)) = value
        .get("result")
        .and_then(|r| r.get("diagnostics"))
    else {
        return;
    };
    if diagnostics.is_empty() {
        return;
    }
    println!("\nDiagnostics:");
    print_array_table(diagnostics);
}

fn print_envelope_notes(value: &Value) {
    if let Some(Value::Array(warnings)) = value.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings {
                if let Value::String(s) = w {
                    println!("  - {}", s);
                }
            }
        }
    }

    if let Some(Value::String(meth)) = value.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}
