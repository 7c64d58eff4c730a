//! Error handling for domain search operations.
//!
//! This module defines the single error type shared by every stage of the
//! request/response pipeline, from configuration lookup to response parsing.

use std::fmt;

/// Main error type for domainr operations.
///
/// Two of these are recovered into a printed message by the caller
/// (`ApiError`, `MalformedResponse`); the rest end the invocation.
#[derive(Debug, Clone)]
pub enum DomainrError {
    /// Neither `mashape-key` nor `client_id` is configured
    NoCredentialConfigured {
        config_path: String,
    },

    /// Transport-level failures (connection, TLS, DNS, etc.)
    NetworkError {
        message: String,
        source: Option<String>,
    },

    /// The service answered with a non-200 status
    ApiError {
        status_code: u16,
        body: String,
    },

    /// A 200 response whose body does not have the expected shape
    MalformedResponse {
        message: String,
    },

    /// Configuration errors (unparsable TOML, etc.)
    ConfigError {
        message: String,
    },

    /// File I/O errors when reading configuration
    FileError {
        path: String,
        message: String,
    },
}

impl DomainrError {
    /// Create a new missing-credential error naming the config location.
    pub fn no_credential<P: Into<String>>(config_path: P) -> Self {
        Self::NoCredentialConfigured {
            config_path: config_path.into(),
        }
    }

    /// Create a new network error.
    pub fn network<M: Into<String>>(message: M) -> Self {
        Self::NetworkError {
            message: message.into(),
            source: None,
        }
    }

    /// Create a new network error with source information.
    pub fn network_with_source<M: Into<String>, S: Into<String>>(message: M, source: S) -> Self {
        Self::NetworkError {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Create a new API error from a status code and the raw response body.
    ///
    /// The body is kept verbatim (lossy UTF-8); it is never parsed.
    pub fn api(status_code: u16, body: &[u8]) -> Self {
        Self::ApiError {
            status_code,
            body: String::from_utf8_lossy(body).into_owned(),
        }
    }

    /// Create a new malformed-response error.
    pub fn malformed<M: Into<String>>(message: M) -> Self {
        Self::MalformedResponse {
            message: message.into(),
        }
    }

    /// Create a new configuration error.
    pub fn config<M: Into<String>>(message: M) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Create a new file error.
    pub fn file_error<P: Into<String>, M: Into<String>>(path: P, message: M) -> Self {
        Self::FileError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Whether the caller should print this error as a normal result and
    /// exit successfully, rather than terminate the process.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::ApiError { .. } | Self::MalformedResponse { .. })
    }
}

impl fmt::Display for DomainrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCredentialConfigured { config_path } => {
                write!(
                    f,
                    "No API key provided in config file at:\n{}\nSee the README for more info",
                    config_path
                )
            }
            Self::NetworkError { message, source } => {
                if let Some(source) = source {
                    write!(f, "Network error: {} (source: {})", message, source)
                } else {
                    write!(f, "Network error: {}", message)
                }
            }
            Self::ApiError { status_code, body } => {
                write!(f, "Error: Status {}; Response: {}", status_code, body)
            }
            Self::MalformedResponse { message } => {
                write!(f, "Error: Malformed response: {}", message)
            }
            Self::ConfigError { message } => {
                write!(f, "Configuration error: {}", message)
            }
            Self::FileError { path, message } => {
                write!(f, "File error at '{}': {}", path, message)
            }
        }
    }
}

impl std::error::Error for DomainrError {}

impl From<reqwest::Error> for DomainrError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::network_with_source("HTTP request timed out", err.to_string())
        } else if err.is_connect() {
            Self::network_with_source("Connection failed", err.to_string())
        } else {
            Self::network_with_source("HTTP request failed", err.to_string())
        }
    }
}

impl From<serde_json::Error> for DomainrError {
    fn from(err: serde_json::Error) -> Self {
        Self::malformed(format!("JSON parsing failed: {}", err))
    }
}
