use serde_json::Value;
use std::io;

use super::{cell_text, headers_of, result_rows, row_cells};

/// Write output as CSV to stdout.
///
/// Summary rows are written with their column headers; field results as
/// two-column `field,value` records.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    if let Some(rows) = result_rows(value) {
        write_rows(&mut wtr, rows);
    } else {
        let fields = match value.get("result") {
            Some(Value::Object(result)) => Some(result),
            _ => value.as_object(),
        };
        match fields {
            Some(map) => {
                let _ = wtr.write_record(["field", "value"]);
                for (key, val) in map {
                    let _ = wtr.write_record([key.as_str(), &cell_text(val)]);
                }
            }
            None => {
                let _ = wtr.write_record([&cell_text(value)]);
            }
        }
    }

    if let Err(e) = wtr.flush() {
        log::error!("CSV write error: {}", e);
    }
}

fn write_rows<W: io::Write>(wtr: &mut csv::Writer<W>, rows: &[Value]) {
    let headers = headers_of(rows);
    if headers.is_empty() {
        return;
    }
    let _ = wtr.write_record(&headers);
    for row in rows {
        let _ = wtr.write_record(row_cells(row, &headers));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rows_keep_column_order() {
        let rows = vec![
            json!({"Loan ID": "n1", "Deal Name": "BANK 2021-BNK36", "SQFT": "1,200"}),
            json!({"Loan ID": "n2", "Deal Name": "", "SQFT": ""}),
        ];
        let mut wtr = csv::Writer::from_writer(Vec::new());
        write_rows(&mut wtr, &rows);
        let bytes = wtr.into_inner().unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(
            text,
            "Loan ID,Deal Name,SQFT\nn1,BANK 2021-BNK36,\"1,200\"\nn2,,\n"
        );
    }
}
