//! PR creation.

use std::process::Command;

use tracing::{debug, info};

use crate::error::{Result, ShipError};
use crate::git::combined_output;

use super::types::PrRequest;

/// Check if the GitHub CLI (gh) is installed and available in PATH
pub fn is_gh_installed() -> bool {
    Command::new("gh")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// Check if the user is authenticated with GitHub CLI
pub fn is_gh_authenticated() -> bool {
    Command::new("gh")
        .args(["auth", "status"])
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// Open a pull request with `gh pr create`.
///
/// Returns gh's raw output on success (normally the PR URL). On failure the
/// raw output is carried in `ShipError::SubmissionFailed`.
pub fn create_pull_request(request: &PrRequest) -> Result<String> {
    debug!(base = %request.base, head = %request.head, "running gh pr create");

    let output = Command::new("gh")
        .args([
            "pr",
            "create",
            "--base",
            &request.base,
            "--head",
            &request.head,
            "--title",
            &request.title,
            "--body",
            &request.body,
        ])
        .output()
        .map_err(|e| ShipError::SubmissionFailed(format!("failed to run gh: {}", e)))?;

    let combined = combined_output(&output);

    if !output.status.success() {
        return Err(ShipError::SubmissionFailed(combined));
    }

    info!(base = %request.base, head = %request.head, "pull request created");
    Ok(combined)
}
