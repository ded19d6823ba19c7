use thiserror::Error;

/// 單行比賽結果解析失敗的分類。
///
/// 兩種失敗都只影響該行：呼叫端跳過此行、累加錯誤計數後繼續處理。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid match format: {line}")]
    Format { line: String },

    #[error("Invalid score format in: {line} (score `{score}`)")]
    Score { line: String, score: String },
}

impl ParseError {
    pub fn kind(&self) -> &'static str {
        match self {
            ParseError::Format { .. } => "format",
            ParseError::Score { .. } => "score",
        }
    }
}

#[derive(Error, Debug)]
pub enum LeagueError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Input file not found: {path}")]
    InputNotFound { path: String },

    #[error("Permission denied accessing file: {path}")]
    PermissionDenied { path: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Serialization,
    Configuration,
    Processing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// 根據錯誤嚴重程度決定退出碼
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl LeagueError {
    /// 將 IO 錯誤依種類轉成帶有路徑的錯誤
    pub fn from_io(path: &str, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => LeagueError::InputNotFound {
                path: path.to_string(),
            },
            std::io::ErrorKind::PermissionDenied => LeagueError::PermissionDenied {
                path: path.to_string(),
            },
            _ => LeagueError::IoError(err),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            LeagueError::IoError(_)
            | LeagueError::InputNotFound { .. }
            | LeagueError::PermissionDenied { .. } => ErrorCategory::Io,
            LeagueError::SerializationError(_) | LeagueError::CsvError(_) => {
                ErrorCategory::Serialization
            }
            LeagueError::ConfigError { .. }
            | LeagueError::InvalidConfigValueError { .. }
            | LeagueError::ConfigValidationError { .. } => ErrorCategory::Configuration,
            LeagueError::ProcessingError { .. } | LeagueError::ValidationError { .. } => {
                ErrorCategory::Processing
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            LeagueError::IoError(_) => ErrorSeverity::Critical,
            LeagueError::InputNotFound { .. } | LeagueError::PermissionDenied { .. } => {
                ErrorSeverity::High
            }
            LeagueError::SerializationError(_) | LeagueError::CsvError(_) => ErrorSeverity::High,
            LeagueError::ConfigError { .. }
            | LeagueError::InvalidConfigValueError { .. }
            | LeagueError::ConfigValidationError { .. } => ErrorSeverity::High,
            LeagueError::ProcessingError { .. } => ErrorSeverity::Medium,
            LeagueError::ValidationError { .. } => ErrorSeverity::Medium,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            LeagueError::InputNotFound { path } => {
                format!("Check that '{}' exists, or pass '-' to read standard input", path)
            }
            LeagueError::PermissionDenied { path } => {
                format!("Check the permissions of '{}'", path)
            }
            LeagueError::IoError(_) => "Check disk space and file system health".to_string(),
            LeagueError::SerializationError(_) | LeagueError::CsvError(_) => {
                "Try a different output format with --format".to_string()
            }
            LeagueError::InvalidConfigValueError { field, .. }
            | LeagueError::ConfigValidationError { field, .. } => {
                format!("Fix the value of '{}' in the configuration", field)
            }
            LeagueError::ConfigError { .. } => "Review the configuration file".to_string(),
            LeagueError::ProcessingError { .. } | LeagueError::ValidationError { .. } => {
                "Check the input lines follow 'Team A 3, Team B 1'".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            LeagueError::InputNotFound { path } => {
                format!("Error: Input file '{}' not found.", path)
            }
            LeagueError::PermissionDenied { path } => {
                format!("Error: Permission denied accessing file '{}'.", path)
            }
            other => format!("Error: {}", other),
        }
    }
}

pub type Result<T> = std::result::Result<T, LeagueError>;
