use thiserror::Error;

#[derive(Error, Debug)]
pub enum AllocatorError {
    #[error("Error opening catalog file {path}: {source}")]
    CatalogOpenError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid commission value '{value}' on line {line}")]
    InvalidCommissionError { line: usize, value: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Catalog,
    Output,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl AllocatorError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AllocatorError::CatalogOpenError { .. }
            | AllocatorError::InvalidCommissionError { .. } => ErrorCategory::Catalog,
            AllocatorError::IoError(_)
            | AllocatorError::CsvError(_)
            | AllocatorError::SerializationError(_) => ErrorCategory::Output,
            AllocatorError::ConfigError { .. } | AllocatorError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    /// 目錄載入錯誤不會中止程式，只會讓對應的目錄為空
    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Catalog => ErrorSeverity::Low,
            ErrorCategory::Output => ErrorSeverity::Critical,
            ErrorCategory::Configuration => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            AllocatorError::CatalogOpenError { .. } => {
                "Check that the file exists and is readable"
            }
            AllocatorError::InvalidCommissionError { .. } => {
                "Commission must be a whole number, e.g. \"Commission\": 5000,"
            }
            AllocatorError::IoError(_) | AllocatorError::CsvError(_) => {
                "Check that standard output is writable"
            }
            AllocatorError::SerializationError(_) => "Try the default text output format",
            AllocatorError::ConfigError { .. } | AllocatorError::InvalidConfigValueError { .. } => {
                "Run with --help to see the expected arguments"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AllocatorError::CatalogOpenError { path, .. } => {
                format!("Error opening catalog file: {}", path)
            }
            AllocatorError::InvalidCommissionError { line, value } => {
                format!("Commission '{}' on line {} is not a number", value, line)
            }
            AllocatorError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid {}: {}", field, reason)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AllocatorError>;
