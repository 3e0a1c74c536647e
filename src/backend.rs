//! The external operations the workflow depends on.
//!
//! Everything that shells out to git or gh goes through [`Backend`], so the
//! dispatcher and the feature sequence can be driven by in-memory fakes.

use crate::error::Result;
use crate::gh::{self, PrRequest};
use crate::git;

/// Version-control and code-hosting operations used by the workflow.
///
/// Operations that mutate the repository return the raw command output so it
/// can be shown to the operator verbatim.
pub trait Backend {
    fn current_branch(&self) -> Result<String>;

    /// Check out the trunk branch.
    fn check_out(&self, trunk: &str) -> Result<String>;

    /// Pull the latest trunk from origin.
    fn pull(&self, trunk: &str) -> Result<String>;

    /// Create and check out a new branch from HEAD.
    fn create_branch(&self, name: &str) -> Result<String>;

    /// Push a branch to origin with upstream tracking.
    fn push_upstream(&self, name: &str) -> Result<String>;

    /// Commits on `head` that are not on `base`, in log order.
    fn get_commits(&self, base: &str, head: &str) -> Result<Vec<String>>;

    fn create_pr(&self, request: &PrRequest) -> Result<String>;
}

/// Production backend running the `git` and `gh` executables.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBackend;

impl Backend for SystemBackend {
    fn current_branch(&self) -> Result<String> {
        git::current_branch()
    }

    fn check_out(&self, trunk: &str) -> Result<String> {
        git::checkout(trunk)
    }

    fn pull(&self, trunk: &str) -> Result<String> {
        git::pull(trunk)
    }

    fn create_branch(&self, name: &str) -> Result<String> {
        git::create_branch(name)
    }

    fn push_upstream(&self, name: &str) -> Result<String> {
        git::push_upstream(name)
    }

    fn get_commits(&self, base: &str, head: &str) -> Result<Vec<String>> {
        git::get_commits(base, head)
    }

    fn create_pr(&self, request: &PrRequest) -> Result<String> {
        gh::create_pull_request(request)
    }
}
