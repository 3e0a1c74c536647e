//! PRs command handler.
//!
//! Opens one pull request per target base from the head branch.

use std::io;

use crate::backend::{Backend, SystemBackend};
use crate::config::load_config;
use crate::credentials::system_credentials;
use crate::describe::DescriptionGenerator;
use crate::dispatch::Dispatcher;
use crate::error::{Result, ShipError};
use crate::gh;
use crate::output::print_warning;
use crate::workflow::create_prs;

/// Open PRs from `head` (default: the current branch).
///
/// With `target`, only that base is used; otherwise the configured
/// `base_branches`. Individual PR failures are reported, not returned.
pub fn prs_command(head: Option<&str>, target: Option<&str>) -> Result<()> {
    let config = load_config()?;

    if !gh::is_gh_installed() {
        return Err(ShipError::Prerequisite(
            "GitHub CLI (gh) not installed. Install from https://cli.github.com".to_string(),
        ));
    }
    if !gh::is_gh_authenticated() {
        print_warning("Not authenticated with GitHub CLI. Run 'gh auth login' if PR creation fails.");
    }

    let backend = SystemBackend;
    let head = match head {
        Some(head) => head.to_string(),
        None => backend.current_branch()?,
    };

    let credentials = system_credentials();
    let describer =
        DescriptionGenerator::gemini(&credentials, config.model.clone(), config.request_timeout());

    let stdin = io::stdin();
    let mut dispatcher = Dispatcher::new(&backend, &describer, stdin.lock(), io::stdout());

    create_prs(&mut dispatcher, &head, target, &config.base_branches);
    Ok(())
}
