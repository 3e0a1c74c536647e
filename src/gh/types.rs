//! Core types for GitHub PR operations.

/// A pull request ready to be handed to `gh pr create`.
///
/// Only built once the commit range for the pair is known to be non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrRequest {
    /// Branch the PR merges into
    pub base: String,
    /// Branch holding the changes
    pub head: String,
    pub title: String,
    pub body: String,
}

impl PrRequest {
    /// Build a request with the standard `Merge {head} into {base}` title.
    pub fn new(base: &str, head: &str, body: String) -> Self {
        Self {
            base: base.to_string(),
            head: head.to_string(),
            title: format_pr_title(base, head),
            body,
        }
    }
}

/// Format the title used for every PR ship opens.
pub fn format_pr_title(base: &str, head: &str) -> String {
    format!("Merge {} into {}", head, base)
}
