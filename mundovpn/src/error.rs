use mundovpn_common::ConnectionStatus;
use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API error {status}: {message}")]
    Api {
        status: StatusCode,
        message: String,
    },

    #[error("Assistant API key is not configured")]
    MissingApiKey,

    #[error("Assistant request timed out after {0}s")]
    Timeout(u64),

    #[error("Assistant is still answering the previous question")]
    AssistantBusy,

    #[error("Cannot {action} while {from}")]
    InvalidTransition {
        from: ConnectionStatus,
        action: &'static str,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            AppError::Network(_) => "Check your internet connection.".to_string(),
            AppError::Api { status, .. } => match *status {
                StatusCode::TOO_MANY_REQUESTS => {
                    "Too many requests. Please try again later.".to_string()
                }
                StatusCode::SERVICE_UNAVAILABLE => "Server is currently unavailable.".to_string(),
                _ => format!("Server error ({})", status),
            },
            AppError::AssistantBusy => "Please wait for the current answer.".to_string(),
            AppError::InvalidTransition { from, .. } => match from {
                ConnectionStatus::Connecting => "Still establishing the tunnel...".to_string(),
                _ => self.to_string(),
            },
            AppError::Io(_) | AppError::Serialization(_) => {
                "Could not save your data locally.".to_string()
            }
            _ => self.to_string(),
        }
    }
}
