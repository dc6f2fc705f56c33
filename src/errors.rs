use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("No tokens found: code contained no recognized vocabulary")]
    NoTokensFound,

    #[error("No valid targets: every extracted token was filtered out")]
    NoValidTargets,

    #[error("Target not in code: {0}")]
    TargetNotInCode(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid table: {0}")]
    InvalidTable(String),

    #[error("Source error: {0}")]
    SourceError(String),
}

impl AppError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::NoTokensFound => "NO_TOKENS_FOUND",
            AppError::NoValidTargets => "NO_VALID_TARGETS",
            AppError::TargetNotInCode(_) => "TARGET_NOT_IN_CODE",
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::InvalidTable(_) => "INVALID_TABLE",
            AppError::SourceError(_) => "SOURCE_ERROR",
        }
    }

    /// Whether the caller can recover by retrying with a different code sample.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            AppError::NoTokensFound | AppError::NoValidTargets | AppError::TargetNotInCode(_)
        )
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: &'static str,
}

impl From<&AppError> for ErrorResponse {
    fn from(err: &AppError) -> Self {
        ErrorResponse {
            error: err.to_string(),
            code: err.error_code(),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidTable(format!("JSON deserialization error: {}", err))
    }
}

pub type AppResult<T> = Result<T, AppError>;
