//! Response envelopes for the contact endpoint.
//!
//! The contact API uses a `{ "success": ... }` envelope. Use these types
//! instead of ad-hoc `serde_json::json!` blocks to get compile-time type
//! safety and consistent serialization.

use portfolio_core::ValidationErrors;
use serde::Serialize;

/// 200 body: the submission was dispatched.
#[derive(Debug, Serialize)]
pub struct ContactAccepted {
    pub success: bool,
    pub message: &'static str,
}

impl ContactAccepted {
    pub fn new() -> Self {
        Self {
            success: true,
            message: "Message sent successfully.",
        }
    }
}

impl Default for ContactAccepted {
    fn default() -> Self {
        Self::new()
    }
}

/// 400 body: validation failed, with per-field messages.
#[derive(Debug, Serialize)]
pub struct ContactRejected {
    pub success: bool,
    pub errors: ValidationErrors,
}

impl ContactRejected {
    pub fn new(errors: ValidationErrors) -> Self {
        Self {
            success: false,
            errors,
        }
    }
}

/// 500 body: dispatch failed after validation passed.
///
/// Transport and configuration details are logged server-side and never
/// surfaced here.
#[derive(Debug, Serialize)]
pub struct ContactFailed {
    pub success: bool,
    pub error: &'static str,
}

impl ContactFailed {
    pub fn new() -> Self {
        Self {
            success: false,
            error: "Failed to send your message. Please try again later.",
        }
    }
}

impl Default for ContactFailed {
    fn default() -> Self {
        Self::new()
    }
}
