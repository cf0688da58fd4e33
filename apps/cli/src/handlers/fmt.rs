use super::read_payload;
use anyhow::Result;
use bkit::domain::config::BkitConfig;
use std::path::Path;

/// Re-emits a payload in canonical form: fixed field order, unset fields dropped.
///
/// # Errors
/// Returns an error if the file cannot be decoded or encoded.
pub fn format_file(path: &Path, compact: bool, config: &BkitConfig) -> Result<()> {
    let payload = read_payload(path)?;

    let mut config = config.clone();
    if compact {
        config.output.pretty = false;
    }

    println!("{}", bkit::render(&payload, &config)?);
    Ok(())
}
