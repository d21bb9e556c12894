use std::fs;
use std::path::{Path, PathBuf};

/// Read the raw text of a loan document from disk.
///
/// Relative paths resolve against the working directory. Anything other than
/// a `.json` file is read anyway, with a warning.
pub fn read_document_text(path: &str) -> Result<(String, PathBuf), Box<dyn std::error::Error>> {
    let location = locate(path)?;
    if !has_json_extension(&location) {
        log::warn!(
            "{} does not have a .json extension; reading it as JSON",
            location.display()
        );
    }
    let text = fs::read_to_string(&location)
        .map_err(|e| format!("Cannot read loan document '{}': {}", location.display(), e))?;
    log::info!("read {} bytes from {}", text.len(), location.display());
    Ok((text, location))
}

fn locate(path: &str) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let p = Path::new(path);
    let location = if p.is_absolute() {
        p.to_path_buf()
    } else {
        std::env::current_dir()?.join(p)
    };
    if !location.is_file() {
        return Err(format!("Loan document not found: {}", location.display()).into());
    }
    Ok(location)
}

fn has_json_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}
