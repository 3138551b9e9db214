use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Backend responded with HTTP {status}")]
    HttpStatus { status: StatusCode, body: Vec<u8> },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid value for '{field}': {reason} (got '{value}')")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Backend,
    Configuration,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ClientError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn invalid_value(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// 後端回傳的 HTTP 狀態碼（僅限 `HttpStatus`）
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            Self::Network(e) => e.status(),
            _ => None,
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Network(_) => ErrorCategory::Network,
            Self::HttpStatus { .. } => ErrorCategory::Backend,
            Self::Serialization(_) => ErrorCategory::Data,
            Self::Io(_) | Self::Config { .. } | Self::InvalidConfigValue { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Serialization(_) => ErrorSeverity::Medium,
            Self::HttpStatus { status, .. } if status.is_client_error() => ErrorSeverity::Medium,
            Self::HttpStatus { .. } => ErrorSeverity::High,
            Self::Network(_) => ErrorSeverity::High,
            Self::Io(_) | Self::Config { .. } | Self::InvalidConfigValue { .. } => {
                ErrorSeverity::Critical
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::Network(e) if e.is_timeout() => {
                "The backend did not answer in time; check its load and try again".to_string()
            }
            Self::Network(_) => {
                "Check that the backend is running and the base URL is reachable".to_string()
            }
            Self::HttpStatus { status, .. } if status.is_server_error() => {
                "The backend failed while listing services; check its logs".to_string()
            }
            Self::HttpStatus { .. } => {
                "Check that the base URL points at a service-checker backend".to_string()
            }
            Self::Serialization(_) => {
                "The response body does not match the expected service list shape".to_string()
            }
            Self::Io(_) => "Check the config file path and its permissions".to_string(),
            Self::Config { .. } | Self::InvalidConfigValue { .. } => {
                "Fix the configuration value and run again".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::Network(_) => "無法連線到服務狀態後端".to_string(),
            Self::HttpStatus { status, .. } => format!("後端回傳錯誤狀態碼 {}", status.as_u16()),
            Self::Serialization(_) => "服務列表格式無法解析".to_string(),
            Self::Io(e) => format!("讀取設定檔失敗: {}", e),
            Self::Config { message } => format!("設定錯誤: {}", message),
            Self::InvalidConfigValue { field, reason, .. } => {
                format!("設定值 {} 無效: {}", field, reason)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
