use config::{Config, Environment, File, Map};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::Path;
use tracing::{debug, info};

/// Prefix for environment overrides, e.g. `BKIT__OUTPUT__PRETTY=false`.
pub const ENV_PREFIX: &str = "BKIT";

/// Custom error type for config loading.
#[bkit_derive::bkit_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", fmt_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads configuration by layering a file and environment overrides over the
/// target type's serde defaults.
///
/// 1. **Defaults**: whatever `T` produces for missing keys (`#[serde(default)]`).
/// 2. **File**: when `path` is given, the file must exist. The format follows the
///    extension (`.toml`, `.json`, `.yaml`, ...).
/// 3. **Environment**: variables prefixed with `BKIT__`; nested keys use double
///    underscores (`BKIT__VALIDATION__LIMITS__ACTIONS_ELEMENTS=25`).
///
/// # Errors
/// Returns [`ConfigError::Config`] if the file is missing or malformed, or if the
/// merged values do not match `T`.
///
/// # Example
/// ```rust
/// use bkit_kernel::config::load_config;
/// use bkit_kernel::domain::config::BkitConfig;
///
/// let cfg: BkitConfig = load_config(None::<&str>).unwrap();
/// assert!(cfg.validation.enabled);
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_layered(path.as_ref().map(AsRef::<Path>::as_ref), None)
}

fn load_layered<T>(path: Option<&Path>, env: Option<Map<String, String>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let mut builder = Config::builder();

    if let Some(path) = path {
        info!("Loading config from {}", path.display());
        builder = builder.add_source(File::from(path).required(true));
    } else {
        debug!("No config file given, using defaults and environment");
    }

    let environment = Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .try_parsing(true)
        .source(env);

    builder
        .add_source(environment)
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")
}
