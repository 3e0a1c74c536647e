use std::process::{Command, Output};

use tracing::debug;

use crate::error::{Result, ShipError};

/// The only remote ship talks to.
pub const REMOTE: &str = "origin";

/// Get the current branch name
///
/// A detached HEAD has no branch and is a `ShipError::Prerequisite`.
pub fn current_branch() -> Result<String> {
    let output = run_git(&["branch", "--show-current"])?;
    parse_current_branch(&output)
}

fn parse_current_branch(stdout: &str) -> Result<String> {
    let branch = stdout.trim();
    if branch.is_empty() {
        return Err(ShipError::Prerequisite(
            "Not on a branch (detached HEAD). Check out a branch or pass one to `ship prs`."
                .to_string(),
        ));
    }
    Ok(branch.to_string())
}

/// Checkout an existing branch
pub fn checkout(branch: &str) -> Result<String> {
    run_git(&["checkout", branch])
}

/// Pull the latest state of `branch` from origin
pub fn pull(branch: &str) -> Result<String> {
    run_git(&["pull", REMOTE, branch])
}

/// Create and checkout a new branch from the current HEAD
pub fn create_branch(branch: &str) -> Result<String> {
    run_git(&["checkout", "-b", branch])
}

/// Push a branch to origin and set it as the upstream
pub fn push_upstream(branch: &str) -> Result<String> {
    run_git(&["push", "--set-upstream", REMOTE, branch])
}

/// List the one-line summaries of commits on `head` that are not on `base`.
///
/// Order is whatever `git log` produces (newest first) and is preserved.
/// An empty range is not an error.
pub fn get_commits(base: &str, head: &str) -> Result<Vec<String>> {
    let range = format!("{}..{}", base, head);
    debug!(%range, "listing commits");

    let output = Command::new("git")
        .args(["log", "--oneline", &range])
        .output()
        .map_err(|e| ShipError::RangeQueryFailed {
            base: base.to_string(),
            head: head.to_string(),
            reason: e.to_string(),
        })?;

    if !output.status.success() {
        return Err(ShipError::RangeQueryFailed {
            base: base.to_string(),
            head: head.to_string(),
            reason: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(parse_oneline_log(&String::from_utf8_lossy(&output.stdout)))
}

/// Split `git log --oneline` output into commit summaries.
pub fn parse_oneline_log(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .map(|line| line.trim_end())
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Run git, returning combined stdout and stderr on success.
fn run_git(args: &[&str]) -> Result<String> {
    let command = format!("git {}", args.join(" "));
    debug!(%command, "running");

    let output = Command::new("git").args(args).output()?;
    let combined = combined_output(&output);

    if !output.status.success() {
        return Err(ShipError::Command {
            command,
            output: combined,
        });
    }

    Ok(combined)
}

/// Stdout followed by stderr, the way a terminal would have shown them.
pub(crate) fn combined_output(output: &Output) -> String {
    let mut text = String::from_utf8_lossy(&output.stdout).to_string();
    text.push_str(&String::from_utf8_lossy(&output.stderr));
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_oneline_log_preserves_order() {
        let stdout = "d4e5f6 add test\na1b2c3 fix bug\n";
        assert_eq!(
            parse_oneline_log(stdout),
            vec!["d4e5f6 add test".to_string(), "a1b2c3 fix bug".to_string()]
        );
    }

    #[test]
    fn test_parse_oneline_log_empty_output_is_empty_list() {
        assert!(parse_oneline_log("").is_empty());
        assert!(parse_oneline_log("\n").is_empty());
    }

    #[test]
    fn test_parse_oneline_log_skips_blank_lines() {
        let stdout = "a1b2c3 fix bug\n\n  \nd4e5f6 add test";
        assert_eq!(parse_oneline_log(stdout).len(), 2);
    }

    #[test]
    fn test_parse_current_branch() {
        assert_eq!(parse_current_branch("mikun/login\n").unwrap(), "mikun/login");
    }

    #[test]
    fn test_parse_current_branch_detached_head_is_prerequisite_error() {
        assert!(matches!(
            parse_current_branch(""),
            Err(ShipError::Prerequisite(_))
        ));
        assert!(matches!(
            parse_current_branch("\n"),
            Err(ShipError::Prerequisite(_))
        ));
    }

    #[test]
    fn test_get_commits_unknown_ref_is_range_query_failure() {
        // Outside a repo and with bogus refs alike, git exits non-zero.
        let result = get_commits(
            "ship-test-no-such-base-ref",
            "ship-test-no-such-head-ref",
        );
        match result {
            Err(ShipError::RangeQueryFailed { base, head, .. }) => {
                assert_eq!(base, "ship-test-no-such-base-ref");
                assert_eq!(head, "ship-test-no-such-head-ref");
            }
            other => panic!("expected RangeQueryFailed, got {:?}", other),
        }
    }
}
