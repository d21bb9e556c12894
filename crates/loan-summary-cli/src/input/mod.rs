pub mod file;
pub mod stdin;

use loan_summary_core::LoanSummaryError;
use serde_json::Value;

const STDIN_SOURCE: &str = "<stdin>";

/// Load the loan document from `--input`, or from piped stdin.
pub fn load_document(path: Option<&str>) -> Result<Value, Box<dyn std::error::Error>> {
    let (text, source) = match path {
        Some(path) => {
            let (text, location) = file::read_document_text(path)?;
            (text, location.display().to_string())
        }
        None => match stdin::read_piped_text()? {
            Some(text) => (text, STDIN_SOURCE.to_string()),
            None => {
                return Err("--input file is required (or pipe the loan document on stdin)".into());
            }
        },
    };
    Ok(parse_document(&text, &source)?)
}

/// Parse document text and check it maps loan ids to loan records.
pub fn parse_document(text: &str, source: &str) -> Result<Value, LoanSummaryError> {
    if text.trim().is_empty() {
        log::warn!("{source}: loan document is empty");
    }
    let document: Value =
        serde_json::from_str(text).map_err(|e| LoanSummaryError::InvalidInput {
            field: source.to_string(),
            reason: format!("not valid JSON: {e}"),
        })?;
    check_document(&document, source)?;
    Ok(document)
}

fn check_document(document: &Value, source: &str) -> Result<(), LoanSummaryError> {
    let Some(loans) = document.as_object() else {
        return Err(LoanSummaryError::InvalidInput {
            field: source.to_string(),
            reason: "top level must be an object mapping loan ids to loan records".into(),
        });
    };
    if loans.is_empty() {
        log::warn!("{source}: document contains no loans");
    }
    for (loan_id, record) in loans {
        if !record.is_object() {
            log::warn!("{source}: loan '{loan_id}' is not an object; its row will be blank");
        }
    }
    log::debug!("{source}: {} loan(s)", loans.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_document_is_accepted() {
        let text = r#"{"n1": {"loan_purpose": "Acquisition"}, "n2": 7}"#;
        let doc = parse_document(text, "deal.json").unwrap();
        assert_eq!(doc.as_object().unwrap().len(), 2);
    }

    #[test]
    fn test_list_document_names_its_source() {
        let err = parse_document("[1, 2]", STDIN_SOURCE).unwrap_err();
        match err {
            LoanSummaryError::InvalidInput { field, .. } => assert_eq!(field, "<stdin>"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_malformed_json_is_invalid_input() {
        let err = parse_document("{\"n1\": ", "deal.json").unwrap_err();
        assert!(err.to_string().contains("not valid JSON"));
    }
}
