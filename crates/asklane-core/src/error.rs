//! Error types and error code constants for asklane.
//!
//! Lookups in the query layer return `Option`; absence is rendered as a
//! not-found view, never treated as fatal. `AskError` is the unified error
//! type used by the CLI when a command cannot produce its output.
//!
//! ## Error Code Mapping
//!
//! - `2`: Invalid arguments (unknown sort mode, incomplete draft)
//! - `3`: Not found (identifier does not resolve)
//! - `4`: Data errors (dataset file, configuration file)
//! - `10`: Internal errors

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::store::DatasetError;

// ============================================================================
// Output Error Codes
// ============================================================================

/// Error codes for JSON output and process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum OutputErrorCode {
    /// Invalid arguments from caller.
    InvalidArguments = 2,
    /// Identifier does not resolve to an entity.
    NotFound = 3,
    /// Dataset or configuration could not be read or is invalid.
    DataError = 4,
    /// Internal errors (bugs, unexpected state).
    InternalError = 10,
}

impl OutputErrorCode {
    /// Get the numeric code value.
    pub fn code(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for OutputErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

// ============================================================================
// Entity kinds
// ============================================================================

/// Which kind of entity an identifier was meant to resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    User,
    Tag,
    Question,
    Answer,
    Comment,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::User => "user",
            EntityKind::Tag => "tag",
            EntityKind::Question => "question",
            EntityKind::Answer => "answer",
            EntityKind::Comment => "comment",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Unified Error Type
// ============================================================================

/// Unified error type for CLI output.
#[derive(Debug, Error)]
pub enum AskError {
    /// Identifier does not resolve to an entity.
    #[error("{kind} not found: {id}")]
    NotFound { kind: EntityKind, id: String },

    /// Invalid arguments from caller.
    #[error("invalid arguments: {message}")]
    InvalidArguments {
        message: String,
        details: Option<serde_json::Value>,
    },

    /// A dataset failed validation.
    #[error(transparent)]
    Dataset(#[from] DatasetError),

    /// Dataset file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Dataset file is not valid JSON for the model.
    #[error("failed to parse {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration error.
    #[error("configuration error: {message}")]
    Config { message: String },

    /// Internal error (bug or unexpected state).
    #[error("internal error: {message}")]
    Internal { message: String },
}

impl From<&AskError> for OutputErrorCode {
    fn from(err: &AskError) -> Self {
        match err {
            AskError::NotFound { .. } => OutputErrorCode::NotFound,
            AskError::InvalidArguments { .. } => OutputErrorCode::InvalidArguments,
            AskError::Dataset(_) => OutputErrorCode::DataError,
            AskError::Io { .. } => OutputErrorCode::DataError,
            AskError::Json { .. } => OutputErrorCode::DataError,
            AskError::Config { .. } => OutputErrorCode::DataError,
            AskError::Internal { .. } => OutputErrorCode::InternalError,
        }
    }
}

impl From<AskError> for OutputErrorCode {
    fn from(err: AskError) -> Self {
        OutputErrorCode::from(&err)
    }
}

// ============================================================================
// Convenience Constructors
// ============================================================================

impl AskError {
    /// Create a not-found error.
    pub fn not_found(kind: EntityKind, id: impl Into<String>) -> Self {
        AskError::NotFound {
            kind,
            id: id.into(),
        }
    }

    /// Create an invalid arguments error.
    pub fn invalid_args(message: impl Into<String>) -> Self {
        AskError::InvalidArguments {
            message: message.into(),
            details: None,
        }
    }

    /// Create an invalid arguments error with JSON details.
    pub fn invalid_args_with_details(
        message: impl Into<String>,
        details: serde_json::Value,
    ) -> Self {
        AskError::InvalidArguments {
            message: message.into(),
            details: Some(details),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        AskError::Config {
            message: message.into(),
        }
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        AskError::Internal {
            message: message.into(),
        }
    }

    /// Get the error code for this error.
    pub fn error_code(&self) -> OutputErrorCode {
        OutputErrorCode::from(self)
    }
}

// ============================================================================
// Tests
// ============================================================================
