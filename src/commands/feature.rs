//! Feature command handler.
//!
//! Cuts a new feature branch from the trunk and pushes it upstream.

use crate::backend::SystemBackend;
use crate::config::load_config;
use crate::error::Result;
use crate::prompt;
use crate::workflow::start_feature;

/// Create and push a feature branch.
///
/// Prompts for the branch name when none is given. Fails with
/// `ShipError::SequenceAborted` naming the step that went wrong.
pub fn feature_command(name: Option<&str>) -> Result<()> {
    let config = load_config()?;

    let name = match name {
        Some(name) => name.to_string(),
        None => prompt::ask_line("Enter branch name:")?,
    };

    start_feature(&SystemBackend, &config.trunk, &name)
}
