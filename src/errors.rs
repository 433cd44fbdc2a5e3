use facil_config::ConfigError;
use facil_core::CoreError;
use facil_domain::TransactionValidationError;
use thiserror::Error;

/// Unified error type for the application facade.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] TransactionValidationError),
}

pub type Result<T> = std::result::Result<T, AppError>;
