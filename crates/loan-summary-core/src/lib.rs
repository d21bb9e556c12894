pub mod error;
pub mod extraction;
pub mod overrides;
pub mod summary;
pub mod types;

pub use error::LoanSummaryError;
pub use types::*;

/// Standard result type for all loan-summary operations
pub type LoanSummaryResult<T> = Result<T, LoanSummaryError>;
