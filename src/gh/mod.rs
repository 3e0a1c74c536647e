//! GitHub CLI integration for PR operations.
//!
//! - [`types`] - The PR request and its title format
//! - [`pr`] - PR creation and gh prerequisite checks

mod pr;
mod types;

pub use pr::{create_pull_request, is_gh_authenticated, is_gh_installed};
pub use types::{format_pr_title, PrRequest};
