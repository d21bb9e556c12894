use serde_json::Value;
use std::io::{self, Write};

/// Pretty-print the output envelope to stdout.
pub fn print_json(value: &Value) {
    let stdout = io::stdout();
    if let Err(e) = write_json(&mut stdout.lock(), value) {
        log::error!("cannot write JSON output: {}", e);
    }
}

/// Write `value` as pretty JSON followed by a newline, keeping key order.
fn write_json<W: Write>(out: &mut W, value: &Value) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}
