//! Error types and exit codes for trains
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (no such route, malformed route list)

mod macros;

use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing route, malformed input (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during trains operations
#[derive(Error, Debug)]
pub enum TrainsError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("no such route: {from} -> {to}")]
    NoSuchRoute { from: String, to: String },

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl TrainsError {
    /// Create an error for a missing route between two cities
    pub fn no_such_route(from: impl Into<String>, to: impl Into<String>) -> Self {
        TrainsError::NoSuchRoute {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Create an error for an invalid value
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        TrainsError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// True for the domain "no such route" condition
    pub fn is_no_such_route(&self) -> bool {
        matches!(self, TrainsError::NoSuchRoute { .. })
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            TrainsError::UnknownFormat(_) | TrainsError::UsageError(_) => ExitCode::Usage,

            TrainsError::NoSuchRoute { .. } | TrainsError::InvalidValue { .. } => ExitCode::Data,

            TrainsError::Io(_)
            | TrainsError::Json(_)
            | TrainsError::Toml(_)
            | TrainsError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            TrainsError::UnknownFormat(_) => "unknown_format",
            TrainsError::UsageError(_) => "usage_error",
            TrainsError::NoSuchRoute { .. } => "no_such_route",
            TrainsError::InvalidValue { .. } => "invalid_value",
            TrainsError::Io(_) => "io_error",
            TrainsError::Json(_) => "json_error",
            TrainsError::Toml(_) => "toml_error",
            TrainsError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for trains operations
pub type Result<T> = std::result::Result<T, TrainsError>;
