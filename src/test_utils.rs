//! Test utilities shared across modules.
//!
//! Provides an in-memory [`Backend`] and a mutex for tests that touch the
//! process environment.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use crate::backend::Backend;
use crate::error::{Result, ShipError};
use crate::gh::PrRequest;

/// Mutex to serialize tests that read or change process environment variables.
///
/// ```ignore
/// use crate::test_utils::ENV_MUTEX;
///
/// #[test]
/// fn test_that_sets_env() {
///     let _lock = ENV_MUTEX.lock().unwrap();
///     // ... test code that sets GEMINI_API_KEY ...
/// }
/// ```
pub static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Backend double that records every call and fails on request.
#[derive(Debug, Default)]
pub struct FakeBackend {
    pub branch: String,
    /// Commit lists keyed by `(base, head)`; missing pairs are empty.
    pub commits: HashMap<(String, String), Vec<String>>,
    /// Bases whose commit query fails.
    pub failing_ranges: HashSet<String>,
    /// Bases whose PR creation fails.
    pub failing_prs: HashSet<String>,
    /// Operation name that fails: "checkout", "pull", "create_branch" or "push".
    pub failing_step: Option<&'static str>,
    pub calls: RefCell<Vec<String>>,
    pub created: RefCell<Vec<PrRequest>>,
}

impl FakeBackend {
    pub fn on_branch(branch: &str) -> Self {
        Self {
            branch: branch.to_string(),
            ..Default::default()
        }
    }

    pub fn with_commits(mut self, base: &str, head: &str, commits: &[&str]) -> Self {
        self.commits.insert(
            (base.to_string(), head.to_string()),
            commits.iter().map(|c| c.to_string()).collect(),
        );
        self
    }

    pub fn failing_pr_for(mut self, base: &str) -> Self {
        self.failing_prs.insert(base.to_string());
        self
    }

    pub fn failing_range_for(mut self, base: &str) -> Self {
        self.failing_ranges.insert(base.to_string());
        self
    }

    pub fn failing_at(mut self, step: &'static str) -> Self {
        self.failing_step = Some(step);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn step(&self, name: &'static str, call: String) -> Result<String> {
        self.calls.borrow_mut().push(call.clone());
        if self.failing_step == Some(name) {
            return Err(ShipError::Command {
                command: call,
                output: format!("fatal: {} failed", name),
            });
        }
        Ok(format!("ok: {}", call))
    }
}

impl Backend for FakeBackend {
    fn current_branch(&self) -> Result<String> {
        Ok(self.branch.clone())
    }

    fn check_out(&self, trunk: &str) -> Result<String> {
        self.step("checkout", format!("checkout {}", trunk))
    }

    fn pull(&self, trunk: &str) -> Result<String> {
        self.step("pull", format!("pull {}", trunk))
    }

    fn create_branch(&self, name: &str) -> Result<String> {
        self.step("create_branch", format!("create_branch {}", name))
    }

    fn push_upstream(&self, name: &str) -> Result<String> {
        self.step("push", format!("push {}", name))
    }

    fn get_commits(&self, base: &str, head: &str) -> Result<Vec<String>> {
        self.calls
            .borrow_mut()
            .push(format!("get_commits {}..{}", base, head));
        if self.failing_ranges.contains(base) {
            return Err(ShipError::RangeQueryFailed {
                base: base.to_string(),
                head: head.to_string(),
                reason: "unknown revision".to_string(),
            });
        }
        Ok(self
            .commits
            .get(&(base.to_string(), head.to_string()))
            .cloned()
            .unwrap_or_default())
    }

    fn create_pr(&self, request: &PrRequest) -> Result<String> {
        self.calls
            .borrow_mut()
            .push(format!("create_pr {}<-{}", request.base, request.head));
        if self.failing_prs.contains(&request.base) {
            return Err(ShipError::SubmissionFailed(
                "GraphQL: No commits between branches".to_string(),
            ));
        }
        self.created.borrow_mut().push(request.clone());
        Ok(format!("https://github.com/acme/app/pull/{}", self.created.borrow().len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_mutex_can_be_acquired() {
        let lock = ENV_MUTEX.lock();
        assert!(lock.is_ok());
    }

    #[test]
    fn test_fake_backend_missing_range_is_empty() {
        let backend = FakeBackend::on_branch("feature/x");
        assert!(backend.get_commits("main", "feature/x").unwrap().is_empty());
    }
}
