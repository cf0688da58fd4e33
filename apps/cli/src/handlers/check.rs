use super::read_payload;
use anyhow::{Result, bail};
use bkit::domain::config::BkitConfig;
use std::path::Path;

/// Validates a payload file and prints every violation found.
///
/// # Result
/// Returns `Ok(())` when the payload is within limits or validation is disabled.
///
/// # Errors
/// Returns an error if the file cannot be decoded or any violation is found.
pub fn check_file(path: &Path, config: &BkitConfig) -> Result<()> {
    let payload = read_payload(path)?;

    if !config.validation.enabled {
        println!("⚠️ {}: validation disabled, decoded {} only", path.display(), payload.kind());
        return Ok(());
    }

    let violations = bkit::violations(&payload, config);
    if violations.is_empty() {
        println!(
            "✅ {}: valid {} with {} block(s)",
            path.display(),
            payload.kind(),
            payload.blocks().len()
        );
        return Ok(());
    }

    for violation in &violations {
        eprintln!("  {violation}");
    }
    bail!("{} violation(s) found in {}", violations.len(), path.display())
}
