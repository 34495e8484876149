use thiserror::Error;

#[derive(Error, Debug)]
pub enum UtilError {
    #[error("Invalid argument `{argument}`: {reason}")]
    InvalidArgument { argument: String, reason: String },

    #[error("Arithmetic overflow in {operation}")]
    Overflow { operation: String },

    #[error("Date parsing failed: {0}")]
    DateParse(#[from] chrono::ParseError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value `{value}` for `{field}`: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Argument,
    Arithmetic,
    Parsing,
    Io,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl UtilError {
    pub fn invalid_argument(argument: &str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument: argument.to_string(),
            reason: reason.into(),
        }
    }

    pub fn overflow(operation: &str) -> Self {
        Self::Overflow {
            operation: operation.to_string(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidArgument { .. } => ErrorCategory::Argument,
            Self::Overflow { .. } => ErrorCategory::Arithmetic,
            Self::DateParse(_) | Self::SerializationError(_) => ErrorCategory::Parsing,
            Self::IoError(_) => ErrorCategory::Io,
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Argument | ErrorCategory::Parsing => ErrorSeverity::Medium,
            ErrorCategory::Arithmetic => ErrorSeverity::Low,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    /// Low-severity failures only affect the call that raised them.
    pub fn is_recoverable(&self) -> bool {
        self.severity() == ErrorSeverity::Low
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::InvalidArgument { argument, .. } => {
                format!("Check the value passed as `{}`", argument)
            }
            Self::Overflow { .. } => "Use a smaller input".to_string(),
            Self::DateParse(_) => "Make sure the date matches the expected format".to_string(),
            Self::IoError(_) => "Check that the file exists and is readable".to_string(),
            Self::SerializationError(_) => "Inspect the data being serialized".to_string(),
            Self::ConfigError { .. } => "Check the configuration file syntax".to_string(),
            Self::InvalidConfigValueError { field, .. } => {
                format!("Fix the `{}` entry in the configuration", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Argument => format!("Invalid input: {}", self),
            ErrorCategory::Arithmetic => format!("Result too large: {}", self),
            ErrorCategory::Parsing => format!("Could not parse input: {}", self),
            ErrorCategory::Io => format!("File access failed: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, UtilError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_message() {
        let err = UtilError::invalid_argument("n", "must be non-negative");
        assert_eq!(err.to_string(), "Invalid argument `n`: must be non-negative");
        assert_eq!(err.category(), ErrorCategory::Argument);
        assert!(err.user_friendly_message().starts_with("Invalid input"));
    }

    #[test]
    fn test_severity_ordering() {
        let io = UtilError::IoError(std::io::Error::other("boom"));
        let overflow = UtilError::overflow("factorial");
        assert!(io.severity() > overflow.severity());
    }

    #[test]
    fn test_only_overflow_is_recoverable() {
        assert!(UtilError::overflow("fibonacci sequence").is_recoverable());
        assert!(!UtilError::invalid_argument("sides", "must be positive").is_recoverable());
        assert!(!UtilError::IoError(std::io::Error::other("gone")).is_recoverable());
    }

    #[test]
    fn test_config_error_category() {
        let err = UtilError::ConfigError {
            message: "TOML parsing error: expected `]`".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.recovery_suggestion().contains("syntax"));
    }
}
