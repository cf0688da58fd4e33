pub mod check;
pub mod demo;
pub mod fmt;
pub mod kinds;

use anyhow::{Context, Result};
use bkit::blocks::surface::Payload;
use std::io::Read;
use std::path::Path;
use std::{fs, io};
use tracing::debug;

/// Reads and decodes a payload from a file, or from stdin when `path` is `-`.
///
/// # Errors
/// Returns an error if the input cannot be read or is not a valid payload.
pub fn read_payload(path: &Path) -> Result<Payload> {
    let raw = if path == Path::new("-") {
        let mut raw = String::new();
        io::stdin().read_to_string(&mut raw).context("Failed to read payload from stdin")?;
        raw
    } else {
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?
    };

    let payload = Payload::from_json(&raw)
        .with_context(|| format!("{} is not a valid payload", path.display()))?;
    debug!(kind = payload.kind(), blocks = payload.blocks().len(), "Decoded payload");
    Ok(payload)
}
