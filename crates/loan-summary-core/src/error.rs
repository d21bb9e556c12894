use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoanSummaryError {
    #[error("Invalid input: {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Insufficient data: {0}")]
    InsufficientData(String),
}
