//! Standard response envelope and its constructors.
//!
//! # Responsibility
//! - Provide one envelope shape for success, error, validation,
//!   not-found, unauthorized and forbidden outcomes.
//! - Emit a structured log event for every error-class envelope.
//!
//! # Invariants
//! - `success=true` envelopes carry data and no error status code.
//! - `success=false` envelopes carry a human-readable message.

use log::{info, warn};
use serde::Serialize;

/// Standard API response wrapper for all endpoints.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    /// Indicates whether the operation succeeded.
    pub success: bool,
    /// Human-readable message describing the result.
    pub message: String,
    /// The actual data payload; absent on error or no-content results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// HTTP-style status code hint for the surrounding transport layer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    /// Individual error messages; empty when successful.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl<T> ApiResponse<T> {
    /// Creates a success envelope with data.
    pub fn success(data: T, message: Option<&str>) -> Self {
        Self {
            success: true,
            message: message
                .unwrap_or("Operation completed successfully")
                .to_string(),
            data: Some(data),
            status_code: None,
            errors: Vec::new(),
        }
    }

    /// Creates a success envelope without a payload (no-content results).
    pub fn success_no_content(message: Option<&str>) -> Self {
        Self {
            success: true,
            message: message
                .unwrap_or("Operation completed successfully")
                .to_string(),
            data: None,
            status_code: None,
            errors: Vec::new(),
        }
    }

    /// Creates an error envelope with a message and optional status code.
    pub fn error(message: &str, status_code: Option<u16>) -> Self {
        warn!(
            "event=error_envelope module=response status=error status_code={} message={}",
            status_code.map_or_else(|| "none".to_string(), |code| code.to_string()),
            message
        );

        Self {
            success: false,
            message: message.to_string(),
            data: None,
            status_code,
            errors: Vec::new(),
        }
    }

    /// Creates a validation-error envelope from individual messages.
    ///
    /// A single error becomes the envelope message directly; multiple errors
    /// are joined behind a `Validation failed:` prefix.
    pub fn validation_error(errors: &[String]) -> Self {
        let message = match errors {
            [single] => single.clone(),
            _ => format!("Validation failed: {}", errors.join("; ")),
        };

        warn!(
            "event=validation_envelope module=response status=error error_count={} message={}",
            errors.len(),
            message
        );

        Self {
            success: false,
            message,
            data: None,
            status_code: Some(400),
            errors: errors.to_vec(),
        }
    }

    /// Creates a not-found envelope echoing the missing identifier.
    pub fn not_found(resource_name: &str, identifier: Option<&str>) -> Self {
        let message = match identifier {
            Some(identifier) => {
                format!("{resource_name} with identifier '{identifier}' was not found")
            }
            None => format!("{resource_name} was not found"),
        };

        info!(
            "event=not_found_envelope module=response status=ok message={}",
            message
        );

        Self {
            success: false,
            message,
            data: None,
            status_code: Some(404),
            errors: Vec::new(),
        }
    }

    /// Creates an unauthorized envelope.
    pub fn unauthorized(message: Option<&str>) -> Self {
        let message =
            message.unwrap_or("Unauthorized access. Please ensure you are authenticated.");

        warn!(
            "event=unauthorized_envelope module=response status=error message={}",
            message
        );

        Self {
            success: false,
            message: message.to_string(),
            data: None,
            status_code: Some(401),
            errors: Vec::new(),
        }
    }

    /// Creates a forbidden envelope.
    pub fn forbidden(message: Option<&str>) -> Self {
        let message = message
            .unwrap_or("Access forbidden. You do not have permission to access this resource.");

        warn!(
            "event=forbidden_envelope module=response status=error message={}",
            message
        );

        Self {
            success: false,
            message: message.to_string(),
            data: None,
            status_code: Some(403),
            errors: Vec::new(),
        }
    }
}
