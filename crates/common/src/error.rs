//! Error types shared across Framewall crates.

use std::path::PathBuf;

/// Top-level error type for Framewall operations.
#[derive(Debug, thiserror::Error)]
pub enum FramewallError {
    #[error("Model error: {message}")]
    Model { message: String },

    #[error("Session error: {message}")]
    Session { message: String },

    #[error("Render error: {message}")]
    Render { message: String },

    #[error("Export error: {message}")]
    Export { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Unsupported operation: {message}")]
    Unsupported { message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using FramewallError.
pub type FramewallResult<T> = Result<T, FramewallError>;

impl FramewallError {
    pub fn model(msg: impl Into<String>) -> Self {
        Self::Model {
            message: msg.into(),
        }
    }

    pub fn session(msg: impl Into<String>) -> Self {
        Self::Session {
            message: msg.into(),
        }
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render {
            message: msg.into(),
        }
    }

    pub fn export(msg: impl Into<String>) -> Self {
        Self::Export {
            message: msg.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::Unsupported {
            message: msg.into(),
        }
    }

    /// Whether this error should abort the current user-facing operation
    /// (as opposed to conditions components absorb locally).
    pub fn is_user_visible(&self) -> bool {
        matches!(
            self,
            Self::Render { .. } | Self::Export { .. } | Self::FileNotFound { .. }
        )
    }
}
