use crate::limits::Limits;
use serde::{Deserialize, Serialize};

/// Top-level configuration shared by the tools built on the model.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BkitConfig {
    pub validation: ValidationConfig,
    pub output: OutputConfig,
}

/// Opt-in validation knobs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// When `false`, payloads are emitted as built and limits are never checked.
    pub enabled: bool,
    pub limits: Limits,
}

/// JSON output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub pretty: bool,
}

// --- Default ---

impl Default for ValidationConfig {
    fn default() -> Self {
        Self { enabled: true, limits: Limits::default() }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}
