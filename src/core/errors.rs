use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SentimentError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Reqwest error: {0}")]
    Reqwest(Box<reqwest::Error>),

    #[error("HTTP error {status} from {url}")]
    Status { status: StatusCode, url: String },

    #[error("Service error: {0}")]
    Service(String),

    #[error("Invalid API base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("SentimentError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for SentimentError {
    fn from(error: std::io::Error) -> Self {
        SentimentError::Io(Box::new(error))
    }
}

impl From<reqwest::Error> for SentimentError {
    fn from(error: reqwest::Error) -> Self {
        SentimentError::Reqwest(Box::new(error))
    }
}
