use thiserror::Error;

use super::session::Operation;

/// Why a controller action did not complete. None of these are fatal.
#[derive(Debug, Error)]
pub enum ControllerError {
    /// Input rejected locally; no request was made
    #[error("{0}")]
    Validation(String),
    /// Network failure, non-success status or malformed reply
    #[error("{0}")]
    Transport(String),
    #[error("{0} already in progress")]
    Busy(Operation),
    /// Host capability missing; logged, never shown as a notice
    #[error("{0} is not available")]
    CapabilityUnavailable(&'static str),
    #[error("clipboard write failed: {0}")]
    Clipboard(String),
    #[error("could not save audio: {0}")]
    Save(String),
    /// The session was cleared while the request was in flight
    #[error("result discarded after the session was cleared")]
    Superseded,
}
