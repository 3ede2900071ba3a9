use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why the backend actor refused a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RejectCode {
    InvalidArgument,
    NotFound,
    InsufficientFunds,
    Unauthorized,
    TransferFailed,
    Internal,
}

impl RejectCode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InvalidArgument => "invalid_argument",
            Self::NotFound => "not_found",
            Self::InsufficientFunds => "insufficient_funds",
            Self::Unauthorized => "unauthorized",
            Self::TransferFailed => "transfer_failed",
            Self::Internal => "internal",
        }
    }
}

impl From<String> for RejectCode {
    fn from(value: String) -> Self {
        match value.as_str() {
            "invalid_argument" => Self::InvalidArgument,
            "not_found" => Self::NotFound,
            "insufficient_funds" => Self::InsufficientFunds,
            "unauthorized" => Self::Unauthorized,
            "transfer_failed" => Self::TransferFailed,
            _ => Self::Internal,
        }
    }
}

impl From<RejectCode> for String {
    fn from(value: RejectCode) -> Self {
        value.as_str().to_string()
    }
}

/// A rejection reported by the backend actor. Displays as the backend's own
/// message, untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{message}")]
pub struct ActorReject {
    pub code: RejectCode,
    pub message: String,
}

impl ActorReject {
    pub fn new(code: RejectCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}
