//! Kernel utilities shared by the Block Kit tools.
//! Keep this crate lightweight; today it only owns configuration loading.
//!
//! ## Config loading
//! ```rust,no_run
//! use bkit_kernel::config::load_config;
//! use bkit_kernel::domain::config::BkitConfig;
//!
//! let cfg: BkitConfig = load_config(Some("bkit.toml")).unwrap_or_default();
//! assert!(cfg.validation.limits.action_id > 0);
//! ```
#[cfg(not(target_arch = "wasm32"))]
pub mod config;

pub use bkit_domain as domain;
