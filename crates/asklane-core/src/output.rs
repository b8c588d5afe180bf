//! JSON output types and serialization for CLI responses.
//!
//! Every successful command emits a [`JsonResponse`] envelope:
//!
//! ```json
//! {"schema_version": "1", "command": "tags", "status": "ok", "data": {...}, "issues": []}
//! ```
//!
//! Failures emit an [`ErrorResponse`] instead:
//!
//! ```json
//! {"status": "error", "schema_version": "1", "error": {"code": 3, "message": "..."}}
//! ```
//!
//! Field order is fixed by the struct definitions, so the same input always
//! produces the same output.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::{AskError, OutputErrorCode};

/// Current schema version for all responses.
pub const SCHEMA_VERSION: &str = "1";

// ============================================================================
// Success envelope
// ============================================================================

/// JSON response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonResponse<T> {
    /// Schema version for forward compatibility
    pub schema_version: String,
    /// Command that generated this response
    pub command: String,
    /// Status: "ok" or "error"
    pub status: String,
    /// Command-specific payload
    pub data: T,
    /// Warnings about the data (unresolved references and the like)
    pub issues: Vec<JsonIssue>,
}

impl<T> JsonResponse<T> {
    /// Create a successful response
    pub fn ok(command: &str, data: T) -> Self {
        Self::ok_with_issues(command, data, vec![])
    }

    /// Create a successful response with issues
    pub fn ok_with_issues(command: &str, data: T, issues: Vec<JsonIssue>) -> Self {
        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            command: command.to_string(),
            status: "ok".to_string(),
            data,
            issues,
        }
    }
}

/// A non-fatal observation attached to a response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonIssue {
    /// Stable issue code (e.g., "W001")
    pub code: String,
    /// "warning" or "info"
    pub severity: String,
    /// Human-readable message
    pub message: String,
}

impl JsonIssue {
    /// Create a warning.
    pub fn warning(code: &str, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            severity: "warning".to_string(),
            message: message.into(),
        }
    }
}

// ============================================================================
// Error envelope
// ============================================================================

/// Error details for JSON output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Numeric error code, also the process exit status.
    pub code: u8,
    /// Human-readable message.
    pub message: String,
    /// Error-specific structured data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorInfo {
    /// Create from an AskError.
    pub fn from_error(err: &AskError) -> Self {
        let code = OutputErrorCode::from(err).code();
        let message = err.to_string();

        let details = match err {
            AskError::NotFound { kind, id } => Some(json!({ "kind": kind, "id": id })),
            AskError::InvalidArguments { details, .. } => details.clone(),
            AskError::Dataset(dataset) => {
                let violations: Vec<String> =
                    dataset.violations.iter().map(ToString::to_string).collect();
                Some(json!({ "violations": violations }))
            }
            AskError::Io { path, .. } | AskError::Json { path, .. } => {
                Some(json!({ "path": path }))
            }
            AskError::Config { .. } | AskError::Internal { .. } => None,
        };

        ErrorInfo {
            code,
            message,
            details,
        }
    }
}

/// Error response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Status: "error".
    pub status: String,
    /// Schema version for compatibility.
    pub schema_version: String,
    /// Error information.
    pub error: ErrorInfo,
}

impl ErrorResponse {
    /// Create an error response from an AskError.
    pub fn from_error(err: &AskError) -> Self {
        ErrorResponse {
            status: "error".to_string(),
            schema_version: SCHEMA_VERSION.to_string(),
            error: ErrorInfo::from_error(err),
        }
    }
}

// ============================================================================
// Emission
// ============================================================================

/// Emit a response as pretty-printed JSON to a writer.
pub fn emit_response<T: Serialize>(response: &T, writer: &mut impl Write) -> io::Result<()> {
    let json = serde_json::to_string_pretty(response)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    writeln!(writer, "{}", json)
}

// ============================================================================
// Tests
// ============================================================================
