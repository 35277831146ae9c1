use thiserror::Error;

#[derive(Error, Debug)]
pub enum SweepError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Encoding error: {0}")]
    EncodingError(#[from] std::string::FromUtf8Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Atomic replace failed: {0}")]
    PersistError(#[from] tempfile::PersistError),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },

    #[error("Configuration validation error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Config,
    Io,
    Processing,
}

impl SweepError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SweepError::IoError(_) | SweepError::PersistError(_) => ErrorCategory::Io,
            SweepError::EncodingError(_)
            | SweepError::SerializationError(_)
            | SweepError::ProcessingError { .. } => ErrorCategory::Processing,
            SweepError::ConfigError { .. }
            | SweepError::ConfigValidationError { .. }
            | SweepError::InvalidConfigValueError { .. }
            | SweepError::MissingConfigError { .. } => ErrorCategory::Config,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 寫入中斷可能留下半完成的批次
            SweepError::IoError(_) | SweepError::PersistError(_) => ErrorSeverity::Critical,
            SweepError::EncodingError(_)
            | SweepError::SerializationError(_)
            | SweepError::ProcessingError { .. } => ErrorSeverity::High,
            SweepError::ConfigError { .. }
            | SweepError::ConfigValidationError { .. }
            | SweepError::InvalidConfigValueError { .. }
            | SweepError::MissingConfigError { .. } => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            SweepError::IoError(_) => {
                "Check file permissions and available disk space".to_string()
            }
            SweepError::EncodingError(_) => {
                "Ensure the source files are valid UTF-8 text".to_string()
            }
            SweepError::SerializationError(_) => {
                "Check the report output options and retry".to_string()
            }
            SweepError::PersistError(_) => {
                "Check write permissions on the target directory".to_string()
            }
            SweepError::ProcessingError { .. } => {
                "Inspect the input file contents and retry".to_string()
            }
            SweepError::ConfigError { .. }
            | SweepError::ConfigValidationError { .. }
            | SweepError::InvalidConfigValueError { .. }
            | SweepError::MissingConfigError { .. } => {
                "Fix the configuration value and run again".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SweepError::IoError(e) => format!("File operation failed: {}", e),
            SweepError::EncodingError(_) => {
                "A source file is not valid UTF-8 text".to_string()
            }
            SweepError::PersistError(_) => {
                "Could not replace the original file safely".to_string()
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SweepError>;
