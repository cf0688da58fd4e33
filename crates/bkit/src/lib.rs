//! Facade crate for the Block Kit toolkit.
//! Re-exports the model, domain and kernel crates and wires configuration into
//! the two operations every tool needs: checking and rendering payloads.
//! Keep this crate thin: it should compose other crates, not implement model logic.
//!
//! ## Usage
//! ```rust
//! use bkit::blocks::prelude::*;
//! use bkit::domain::config::BkitConfig;
//!
//! let config = BkitConfig::default();
//! let payload = Payload::from(Message::builder().text("Deploy finished").build());
//!
//! bkit::check(&payload, &config).unwrap();
//! let json = bkit::render(&payload, &config).unwrap();
//! assert!(json.contains("Deploy finished"));
//! ```

pub use bkit_blocks as blocks;
pub use bkit_domain as domain;
pub use bkit_kernel as kernel;

use bkit_blocks::validate::{Validate, Violations};
use bkit_blocks::{BlockError, BlockErrorExt};
use bkit_domain::config::BkitConfig;
use serde::Serialize;
use tracing::{debug, info};

/// Validates `payload` under the configured limits.
///
/// Succeeds without looking at the payload when validation is disabled.
///
/// # Errors
/// Returns [`BlockError::Validation`] listing every violation.
pub fn check<T: Validate + ?Sized>(payload: &T, config: &BkitConfig) -> Result<(), BlockError> {
    if !config.validation.enabled {
        debug!("Validation disabled by configuration");
        return Ok(());
    }
    payload.validate_with(&config.validation.limits).context("Payload check")
}

/// Collects violations under the configured limits, empty when validation is disabled.
#[must_use]
pub fn violations<T: Validate + ?Sized>(payload: &T, config: &BkitConfig) -> Violations {
    if config.validation.enabled {
        payload.violations(&config.validation.limits)
    } else {
        Violations::default()
    }
}

/// Encodes `value` using the configured output style.
///
/// # Errors
/// Returns [`BlockError::Json`] if serialization fails.
pub fn render<T: Serialize + ?Sized>(value: &T, config: &BkitConfig) -> Result<String, BlockError> {
    let json = if config.output.pretty {
        bkit_blocks::to_json_pretty(value)?
    } else {
        bkit_blocks::to_json(value)?
    };
    info!(bytes = json.len(), pretty = config.output.pretty, "Rendered payload");
    Ok(json)
}
