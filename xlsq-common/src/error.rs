use std::sync::Arc;

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum XlsqError {
    #[error("JSON Parsing Error: {0}")]
    Json(#[from] Arc<serde_json::Error>),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Failed to open Excel file: {0}")]
    WorkbookOpen(String),

    #[error("Could not read sheet '{0}': {1}")]
    SheetRead(String, String),

    #[error("Sheet '{name}' not found. Available sheets: {available:?}")]
    SheetNotFound {
        name: String,
        available: Vec<String>,
    },

    #[error("Sheet index {index} out of range. Available sheets: 0-{last}")]
    SheetIndexOutOfRange { index: usize, last: usize },

    #[error("Workbook has no sheets")]
    EmptyWorkbook,

    #[error("Resource Not Found: {0}")]
    NotFound(String),

    #[error("DownloadError: Failed to download '{0}' from '{1}': {2}")]
    DownloadError(String, String, String),

    #[error("HttpError: {0}")]
    HttpError(String),

    #[error("Checksum Error: {0}")]
    ChecksumError(String),

    #[error("Validation Error: {0}")]
    ValidationError(String),

    #[error("Parsing Error in {0}: {1}")]
    ParseError(&'static str, String),

    #[error("Build environment setup failed: {0}")]
    BuildEnvError(String),

    #[error("Installation Error: {0}")]
    InstallError(String),

    #[error("Failed to execute command: {0}")]
    CommandExecError(String),

    #[error("Verification Failed: {0}")]
    VerificationFailed(String),

    #[error("IoError: {0}")]
    IoError(String),
}

impl From<std::io::Error> for XlsqError {
    fn from(err: std::io::Error) -> Self {
        XlsqError::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for XlsqError {
    fn from(err: serde_json::Error) -> Self {
        XlsqError::Json(Arc::new(err))
    }
}

pub type Result<T> = std::result::Result<T, XlsqError>;
