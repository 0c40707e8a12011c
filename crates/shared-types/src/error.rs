use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorization of backend-call failures.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum AppErrorKind {
    /// Connection-level failure or a non-2xx status from the backend.
    Transport,
    /// A 2xx response whose body could not be decoded.
    Decode,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::Transport => write!(f, "Transport"),
            AppErrorKind::Decode => write!(f, "Decode"),
        }
    }
}

/// Structured application error shared between the backend client and the UI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
}

impl AppError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::Transport,
            message: message.into(),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::Decode,
            message: message.into(),
        }
    }

    pub fn is_transport(&self) -> bool {
        self.kind == AppErrorKind::Transport
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}
