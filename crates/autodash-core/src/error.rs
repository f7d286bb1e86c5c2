use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("HTTP transport error: {0}")]
    Transport(String),

    #[error("API error: {}{}", .status, detail_suffix(.message))]
    Status { status: u16, message: Option<String> },

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl DashboardError {
    /// HTTP status code for errors raised by a non-success response
    pub fn status(&self) -> Option<u16> {
        match self {
            DashboardError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

fn detail_suffix(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|m| format!(" - {}", m))
        .unwrap_or_default()
}

pub type Result<T> = std::result::Result<T, DashboardError>;
