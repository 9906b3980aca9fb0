use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompareError {
    #[error("Invalid input '{field}': {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Invalid sort mode '{value}': expected 'top' or 'bottom'")]
    InvalidSortMode { value: String },

    #[error("Processing failure: {message}")]
    ProcessingFailure { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for '{field}' ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Storage,
    Internal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl CompareError {
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn processing(message: impl Into<String>) -> Self {
        Self::ProcessingFailure {
            message: message.into(),
        }
    }

    /// 呼叫端錯誤：請求被拒絕，不做任何計算
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput { .. } | Self::InvalidSortMode { .. } | Self::NotFound { .. }
        )
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } | Self::InvalidSortMode { .. } => ErrorCategory::Input,
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            Self::IoError(_) | Self::NotFound { .. } => ErrorCategory::Storage,
            Self::ProcessingFailure { .. } => ErrorCategory::Internal,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Storage => ErrorSeverity::Medium,
            ErrorCategory::Internal => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidInput { field, reason } => {
                format!("The upload '{}' could not be used: {}", field, reason)
            }
            Self::InvalidSortMode { value } => format!(
                "'{}' is not a valid sort order. Use 'top' or 'bottom'.",
                value
            ),
            Self::NotFound { resource } => format!("'{}' does not exist", resource),
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                format!("Configuration problem: {}", self)
            }
            Self::ProcessingFailure { .. } | Self::IoError(_) => {
                "The comparison could not be completed. Please try again later.".to_string()
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => "Upload both files as UTF-8 text and retry",
            Self::InvalidSortMode { .. } => "Set the sort order to 'top' or 'bottom'",
            Self::NotFound { .. } => "Check the download link returned by /compare",
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                "Check the configuration file and command line overrides"
            }
            Self::IoError(_) => "Check that the output directory exists and is writable",
            Self::ProcessingFailure { .. } => "Inspect the service logs for the underlying fault",
        }
    }
}

pub type Result<T> = std::result::Result<T, CompareError>;
