use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Upstream API error: {0}")]
    Upstream(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Dataset error: {0}")]
    Dataset(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Get a sanitized error message safe for logging
    /// Filters out potentially sensitive information
    pub fn log_safe(&self) -> String {
        match self {
            // reqwest errors carry the request URL, which includes the apiKey parameter
            Error::Http(e) if e.is_timeout() => "External HTTP request timed out".to_string(),
            Error::Http(e) => match e.status() {
                Some(status) => format!("External HTTP request failed with status {status}"),
                None => "External HTTP request failed".to_string(),
            },

            Error::Upstream(msg) | Error::Internal(msg) => {
                let lower = msg.to_lowercase();
                if lower.contains("apikey") || lower.contains("secret") || lower.contains("token")
                {
                    "Error details redacted".to_string()
                } else {
                    self.to_string()
                }
            }

            Error::Csv(_) => "Dataset could not be parsed".to_string(),
            Error::Io(_) => "File system operation failed".to_string(),
            Error::InvalidUrl(_) => "Invalid URL provided".to_string(),

            Error::Dataset(_)
            | Error::Yaml(_)
            | Error::Config(_)
            | Error::NotFound(_)
            | Error::Validation(_) => self.to_string(),
        }
    }
}

// Implement IntoResponse for API error handling
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::error!("Request error: {}", self.log_safe());

        let (status, error_message) = match &self {
            Error::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            Error::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            Error::Http(_) | Error::Upstream(_) => (
                StatusCode::BAD_GATEWAY,
                "External service error".to_string(),
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}
