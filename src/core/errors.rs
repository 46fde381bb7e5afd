//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised at the fetch boundary.
///
/// Every variant renders as a single human-readable message; the dashboard
/// surfaces that message verbatim in place of the derived views.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never produced a response (DNS, TLS, timeout, ...)
    #[error("could not reach {endpoint}: {message}")]
    Transport { endpoint: String, message: String },

    /// The server answered with a non-success status code
    #[error("failed to load {what} (HTTP {status})")]
    HttpStatus { what: String, status: u16 },

    /// The body carried `ok: false`
    #[error("{0}")]
    Application(String),

    /// The body was not the expected JSON envelope
    #[error("malformed response from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    /// No endpoint configured for the requested operation
    #[error("no {0} endpoint configured")]
    MissingEndpoint(&'static str),

    /// The HTTP client could not be built (TLS backend, proxy settings)
    #[error("could not initialize HTTP client: {0}")]
    Client(String),
}

impl FetchError {
    /// Application-level failure, falling back to a default message when the
    /// server did not provide one.
    pub fn application(message: Option<String>, fallback: &str) -> Self {
        Self::Application(
            message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| fallback.to_string()),
        )
    }

    /// Message shown to the user in place of the dashboard.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

/// Main error type for turnos-dashboard operations
#[derive(Debug, Error)]
pub enum Error {
    /// Remote data could not be loaded
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// A value expected to be a calendar date was not one
    #[error("Invalid date '{value}': expected YYYY-MM-DD")]
    InvalidDate { value: String },

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// TOML parse errors
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// Create a configuration error without file context
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            path: None,
        }
    }

    /// Create a configuration error tied to a file
    pub fn config_at(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::Config {
            message: message.into(),
            path: Some(path.into()),
        }
    }

    /// Create an invalid date error
    pub fn invalid_date(value: impl Into<String>) -> Self {
        Self::InvalidDate {
            value: value.into(),
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
