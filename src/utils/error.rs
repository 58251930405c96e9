use thiserror::Error;

#[derive(Error, Debug)]
pub enum LmsError {
    #[error("{message}")]
    InvalidOperation { message: String },

    #[error("{message}")]
    InvalidArgument { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// 呼叫端傳入的參數不合法
    Input,
    Configuration,
    Io,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl LmsError {
    pub fn invalid_operation(message: impl Into<String>) -> Self {
        Self::InvalidOperation {
            message: message.into(),
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidOperation { .. } | Self::InvalidArgument { .. } => ErrorCategory::Input,
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::TomlError(_) => ErrorCategory::Configuration,
            Self::IoError(_) => ErrorCategory::Io,
            Self::CsvError(_) | Self::SerializationError(_) => ErrorCategory::Data,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    /// 呼叫端錯誤 (web 層會對應到 400 類回應)
    pub fn is_client_error(&self) -> bool {
        self.category() == ErrorCategory::Input
    }

    /// CLI 結束碼：參數錯誤為 2，其餘錯誤為 1
    pub fn exit_code(&self) -> i32 {
        if self.is_client_error() {
            2
        } else {
            1
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::InvalidOperation { .. } => {
                "Use one of the operators '+', '-', 'x' or '/' and a non-zero divisor"
            }
            Self::InvalidArgument { .. } => "Use a discount percentage between 0 and 100",
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                "Check the configuration file values"
            }
            Self::TomlError(_) => "Make sure the configuration file is valid TOML",
            Self::IoError(_) => "Check that the file exists and is readable/writable",
            Self::CsvError(_) => "Make sure the price list has a 'name,price' header",
            Self::SerializationError(_) => "Report this issue, output could not be serialized",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidOperation { message } => format!("Calculation failed: {}", message),
            Self::InvalidArgument { message } => format!("Discount failed: {}", message),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LmsError>;
