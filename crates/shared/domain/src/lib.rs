//! # Domain Data
//!
//! Plain data shared by every Block Kit crate: the limits the Slack API documents,
//! the configuration tree, and the container capability flags.
//! Keep it lean: no I/O and no model types, just data and simple helpers.

pub mod capability;
pub mod config;
pub mod constants;
pub mod limits;
