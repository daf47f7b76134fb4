// src/error.rs
//! Error types for the Blikk client.
//!
//! Every failure path surfaces as a `BlikkError` variant that says what went
//! wrong and where. Nothing is retried here except the explicit rate-limit
//! signal, which never becomes an error at all.

use thiserror::Error;

/// Main error type for all client operations.
#[derive(Error, Debug)]
pub enum BlikkError {
    #[error("invalid base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Missing configuration: {0}")]
    MissingConfiguration(String),

    #[error("invalid filter options for {resource}")]
    InvalidFilter { resource: &'static str },

    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected status code {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("failed to get access token, status {status}: {body}")]
    Authentication { status: u16, body: String },

    #[error("failed to decode {resource} response: {source}")]
    Decode {
        resource: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Validation(#[from] crate::types::ValidationError),
}

impl BlikkError {
    /// Status code reported by the server, when the failure came from one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus { status, .. } | Self::Authentication { status, .. } => {
                Some(*status)
            }
            Self::Transport(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether the failure happened before any request left the process.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::InvalidBaseUrl { .. }
                | Self::MissingConfiguration(_)
                | Self::InvalidFilter { .. }
                | Self::Validation(_)
        )
    }
}

/// Result type alias for convenience
pub type Result<T, E = BlikkError> = std::result::Result<T, E>;
