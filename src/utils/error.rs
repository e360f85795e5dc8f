use thiserror::Error;

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid configuration value for '{field}': {reason} (got '{value}')")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Validation error on '{field}': {reason}")]
    ValidationError { field: String, reason: String },

    #[error("Mail delivery failed: {message}")]
    DeliveryError { message: String, transient: bool },

    #[error("Mail delivery timed out after {seconds}s")]
    TimeoutError { seconds: u64 },

    #[error("Invalid email address '{value}': {reason}")]
    AddressError { value: String, reason: String },

    #[error("Failed to build email message: {message}")]
    MessageBuildError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Validation,
    Delivery,
    Network,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl RelayError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RelayError::ConfigError { .. }
            | RelayError::MissingConfigError { .. }
            | RelayError::InvalidConfigValueError { .. }
            | RelayError::ConfigValidationError { .. } => ErrorCategory::Configuration,
            RelayError::ValidationError { .. } => ErrorCategory::Validation,
            RelayError::DeliveryError { .. }
            | RelayError::AddressError { .. }
            | RelayError::MessageBuildError { .. } => ErrorCategory::Delivery,
            RelayError::HttpError(_) | RelayError::TimeoutError { .. } => ErrorCategory::Network,
            RelayError::IoError(_) | RelayError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Validation => ErrorSeverity::Low,
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Delivery if self.is_transient() => ErrorSeverity::Medium,
            ErrorCategory::Delivery => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 暫時性錯誤才值得重試 (網路中斷、逾時、SMTP 4xx)
    pub fn is_transient(&self) -> bool {
        match self {
            RelayError::DeliveryError { transient, .. } => *transient,
            RelayError::TimeoutError { .. } => true,
            RelayError::HttpError(e) => e.is_timeout() || e.is_connect(),
            _ => false,
        }
    }

    /// 投遞失敗: 在端點邊界被攔截並轉成 500
    pub fn is_delivery_failure(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::Delivery | ErrorCategory::Network
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            RelayError::MissingConfigError { field } => {
                format!("Required setting '{}' is not configured", field)
            }
            RelayError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            RelayError::ConfigError { message }
            | RelayError::ConfigValidationError { message, .. } => {
                format!("Configuration problem: {}", message)
            }
            RelayError::ValidationError { field, .. } => {
                format!("The '{}' field contains characters that are not allowed", field)
            }
            RelayError::TimeoutError { seconds } => {
                format!("The mail provider did not respond within {} seconds", seconds)
            }
            RelayError::HttpError(_) => "Could not reach the contact endpoint".to_string(),
            _ if self.is_delivery_failure() => "The message could not be delivered".to_string(),
            _ => "An internal error occurred".to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            RelayError::MissingConfigError { .. } => {
                "Set EMAIL_USER and EMAIL_PASS, or provide them in the [mail] table of the config file"
            }
            RelayError::InvalidConfigValueError { .. }
            | RelayError::ConfigError { .. }
            | RelayError::ConfigValidationError { .. } => {
                "Check the config file and environment variables against the documented defaults"
            }
            RelayError::ValidationError { .. } => {
                "Remove line breaks and control characters from the name and email fields"
            }
            RelayError::DeliveryError { transient: true, .. } | RelayError::TimeoutError { .. } => {
                "The provider may be temporarily unavailable; try again later"
            }
            RelayError::DeliveryError { transient: false, .. } => {
                "Verify the SMTP credentials (use an app password for Gmail) and host settings"
            }
            RelayError::AddressError { .. } => "Use a valid email address such as name@example.com",
            RelayError::MessageBuildError { .. } => "Check the recipient and sender addresses",
            RelayError::HttpError(_) => "Make sure the relay is running and the endpoint URL is correct",
            RelayError::IoError(_) | RelayError::SerializationError(_) => {
                "Inspect the server logs for details"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, RelayError>;
