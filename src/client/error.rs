use reqwest::StatusCode;
use thiserror::Error;

/// Failures talking to the translation service
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("{0}")]
    Request(#[from] reqwest::Error),
    #[error("server responded with HTTP {0}")]
    Status(StatusCode),
    #[error("malformed response: {0}")]
    Malformed(String),
    /// The service answered but declined; carries its message or a generic one
    #[error("{0}")]
    Rejected(String),
    #[error("server returned no audio")]
    EmptyAudio,
}
