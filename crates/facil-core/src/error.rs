use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Serialization error: {0}")]
    Serde(String),
    #[error("Unsupported schema version {found} (expected at most {supported})")]
    UnsupportedSchema { found: u32, supported: u32 },
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Insight provider failed: {0}")]
    Insight(String),
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        CoreError::Serde(err.to_string())
    }
}

impl From<facil_domain::TransactionValidationError> for CoreError {
    fn from(err: facil_domain::TransactionValidationError) -> Self {
        CoreError::Validation(err.to_string())
    }
}
