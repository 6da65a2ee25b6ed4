//! Response envelope returned by the book endpoint

use serde::{Deserialize, Serialize};

/// `{ "success": bool, "message": string }`
///
/// The shape is inferred from the only client of the endpoint; anything else
/// is reported as a malformed envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionResult {
    pub success: bool,
    pub message: String,
}

impl SubmissionResult {
    pub fn accepted(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}
