//! JSON encoding and decoding.
//!
//! Unset optional fields never reach the output, so every encoded payload is
//! already in the shape the API expects. Decoding rejects unknown `type`
//! discriminants with the list of types the position accepts.

use crate::error::{BlockError, BlockErrorExt};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::trace;

/// Serializes to compact JSON.
///
/// # Errors
/// Returns [`BlockError::Json`] if serialization fails.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, BlockError> {
    let json = serde_json::to_string(value).context("Failed to encode payload")?;
    trace!(bytes = json.len(), "encoded payload");
    Ok(json)
}

/// Serializes to indented JSON.
///
/// # Errors
/// Returns [`BlockError::Json`] if serialization fails.
pub fn to_json_pretty<T: Serialize + ?Sized>(value: &T) -> Result<String, BlockError> {
    let json = serde_json::to_string_pretty(value).context("Failed to encode payload")?;
    trace!(bytes = json.len(), "encoded payload (pretty)");
    Ok(json)
}

/// Serializes to a [`serde_json::Value`] tree.
///
/// # Errors
/// Returns [`BlockError::Json`] if serialization fails.
pub fn to_value<T: Serialize + ?Sized>(value: &T) -> Result<serde_json::Value, BlockError> {
    serde_json::to_value(value).context("Failed to encode payload")
}

/// Deserializes any model from JSON text.
///
/// # Errors
/// Returns [`BlockError::Json`] for malformed JSON, unknown discriminants or
/// missing required fields.
pub fn from_json<T: DeserializeOwned>(json: &str) -> Result<T, BlockError> {
    trace!(bytes = json.len(), target_type = std::any::type_name::<T>(), "decoding payload");
    serde_json::from_str(json).context("Failed to decode payload")
}

impl crate::surface::Payload {
    /// Decodes a payload, detecting its surface from the JSON shape.
    ///
    /// # Errors
    /// Returns [`BlockError::Json`] when the text is not a valid payload.
    pub fn from_json(json: &str) -> Result<Self, BlockError> {
        from_json(json)
    }

    /// Encodes the payload, compact or indented.
    ///
    /// # Errors
    /// Returns [`BlockError::Json`] if serialization fails.
    pub fn to_json(&self, pretty: bool) -> Result<String, BlockError> {
        if pretty { to_json_pretty(self) } else { to_json(self) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composition::PlainText;

    #[test]
    fn decode_errors_carry_context() {
        let err = from_json::<PlainText>("{").expect_err("truncated input");
        assert!(matches!(err, BlockError::Json { .. }));
        assert!(err.to_string().starts_with("JSON error (Failed to decode payload)"), "{err}");
    }
}
