use std::io::{self, Read};

/// Piped loan document text, if any. A terminal or blank stdin gives `None`.
pub fn read_piped_text() -> Result<Option<String>, Box<dyn std::error::Error>> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    if buffer.trim().is_empty() {
        log::debug!("stdin is empty");
        return Ok(None);
    }
    Ok(Some(buffer))
}
