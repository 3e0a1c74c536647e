//! One pull request, from commit lookup to `gh pr create`.
//!
//! ```text
//! FetchingCommits ─┬─ empty ──────────────────────────────▶ NoCommits
//!                  ├─ error ──────────────────────────────▶ CommitsUnavailable
//!                  └─ Generating ─▶ Reviewing ─┬─ cancel ─▶ Cancelled
//!                                              └─ Submitting ─┬─▶ Created
//!                                                             └─▶ SubmissionFailed
//! ```

use std::io::{BufRead, Write};

use tracing::{info, warn};

use crate::backend::Backend;
use crate::describe::DescriptionGenerator;
use crate::gh::PrRequest;
use crate::output::{
    print_commits_found, print_creating_pr, print_dispatch_outcome, print_fetching_commits,
    print_generating_description, print_submitting_pr,
};
use crate::progress::WaitSpinner;
use crate::review::review_description;

/// Terminal state of one dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Head has nothing base lacks; no PR was opened.
    NoCommits,
    /// The commit range could not be listed, with the reason.
    CommitsUnavailable(String),
    /// The operator declined the description.
    Cancelled,
    /// gh's raw output, normally the PR URL.
    Created(String),
    /// gh's raw error output.
    SubmissionFailed(String),
}

impl DispatchOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            DispatchOutcome::CommitsUnavailable(_) | DispatchOutcome::SubmissionFailed(_)
        )
    }
}

/// Runs the PR state machine for base/head pairs.
///
/// Review prompts read from `input` and write to `out`.
pub struct Dispatcher<'a, R, W> {
    backend: &'a dyn Backend,
    describer: &'a DescriptionGenerator<'a>,
    input: R,
    out: W,
}

impl<'a, R: BufRead, W: Write> Dispatcher<'a, R, W> {
    pub fn new(
        backend: &'a dyn Backend,
        describer: &'a DescriptionGenerator<'a>,
        input: R,
        out: W,
    ) -> Self {
        Self {
            backend,
            describer,
            input,
            out,
        }
    }

    /// Open a PR merging `head` into `base`. Never fails; the outcome is
    /// printed and returned.
    pub fn dispatch(&mut self, base: &str, head: &str) -> DispatchOutcome {
        print_creating_pr(base, head);
        let outcome = self.run(base, head);
        info!(%base, %head, ?outcome, "dispatch finished");
        print_dispatch_outcome(base, head, &outcome);
        outcome
    }

    fn run(&mut self, base: &str, head: &str) -> DispatchOutcome {
        print_fetching_commits();
        let commits = match self.backend.get_commits(base, head) {
            Ok(commits) => commits,
            Err(e) => return DispatchOutcome::CommitsUnavailable(e.to_string()),
        };

        if commits.is_empty() {
            return DispatchOutcome::NoCommits;
        }
        print_commits_found(commits.len());

        print_generating_description();
        let spinner = WaitSpinner::new("Waiting for description");
        let description = self.describer.generate(&commits);
        spinner.finish();

        let body = match review_description(&description, &mut self.input, &mut self.out) {
            Ok(outcome) => match outcome.into_body() {
                Some(body) => body,
                None => return DispatchOutcome::Cancelled,
            },
            Err(e) => {
                warn!(error = %e, "could not read review answer, treating as cancel");
                return DispatchOutcome::Cancelled;
            }
        };

        let request = PrRequest::new(base, head, body);
        print_submitting_pr();
        match self.backend.create_pr(&request) {
            Ok(output) => DispatchOutcome::Created(output),
            Err(e) => DispatchOutcome::SubmissionFailed(e.raw_output()),
        }
    }
}
