//! CLI command handlers for ship.
//!
//! # Commands
//!
//! - [`feature`] - Cut and push a feature branch
//! - [`prs`] - Open pull requests against the target bases
//! - [`config`] - Manage the API key and show configuration

mod config;
mod feature;
mod prs;

pub use config::{config_command, configured_source, save_key};
pub use feature::feature_command;
pub use prs::prs_command;
