//! # Block Errors
//!
//! [`BlockError`] covers everything the model can report: JSON encoding and
//! decoding failures, and the outcome of an explicit validation pass.

use crate::validate::Violations;
use std::borrow::Cow;

#[bkit_derive::bkit_error]
pub enum BlockError {
    /// Failure while encoding or decoding JSON.
    #[error("JSON error{}: {source}", fmt_context(.context))]
    Json { source: serde_json::Error, context: Option<Cow<'static, str>> },

    /// The payload breaks one or more documented API limits.
    ///
    /// Only produced when a caller asks for validation.
    #[error("Validation failed{}: {violations}", fmt_context(.context))]
    Validation { violations: Violations, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues.
    #[error("Internal error{}: {message}", fmt_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl BlockError {
    /// Returns the collected violations when this is a validation failure.
    #[must_use]
    pub fn violations(&self) -> Option<&Violations> {
        match self {
            Self::Validation { violations, .. } => Some(violations),
            _ => None,
        }
    }
}
