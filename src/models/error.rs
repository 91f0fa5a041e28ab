//! Error type for the greeter Lambda.
//!
//! The greeting itself cannot fail; these errors come from the invocation
//! boundary and are turned into a `Diagnostic` before reaching the runtime.

use lambda_runtime::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// The event payload could not be read as a greeting request
    #[error("Failed to parse request: {0}")]
    InvalidInput(String),
    /// The greeting response could not be turned back into JSON
    #[error("Failed to serialize response: {0}")]
    Serialization(String),
}

impl AppError {
    /// Error type string reported to the Lambda runtime.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "InvalidInput",
            Self::Serialization(_) => "SerializationError",
        }
    }
}

impl From<AppError> for Diagnostic {
    fn from(error: AppError) -> Self {
        Self {
            error_type: error.error_type().to_string(),
            error_message: error.to_string(),
        }
    }
}
