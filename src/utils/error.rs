use thiserror::Error;

/// 取得單頁作品時的失敗。所有原因都走同一條「記錄後忽略」的路徑。
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("network request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("upstream responded with status {status}")]
    Status { status: u16 },

    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Fetch failed: {0}")]
    FetchError(#[from] FetchError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid command '{input}': {reason}")]
    CommandError { input: String, reason: String },
}

impl AppError {
    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            AppError::FetchError(_) => "Could not load artworks from the API".to_string(),
            AppError::IoError(e) => format!("I/O failure: {}", e),
            AppError::ConfigError { message } => format!("Configuration problem: {}", message),
            AppError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            AppError::CommandError { reason, .. } => reason.clone(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
