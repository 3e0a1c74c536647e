//! Top-level sequences: PR fan-out and feature branch creation.

use std::fmt;
use std::io::{BufRead, Write};

use tracing::info;

use crate::backend::Backend;
use crate::dispatch::{DispatchOutcome, Dispatcher};
use crate::error::{Result, ShipError};
use crate::output::{
    print_fanout_start, print_fanout_summary, print_feature_complete, print_feature_start,
    print_feature_step,
};

/// Base branches a PR is opened against when no target is given.
pub const DEFAULT_BASE_BRANCHES: [&str; 3] = ["main", "stage", "dev"];

/// The targets for a fan-out: the explicit one, or every default in order.
pub fn resolve_targets(target: Option<&str>, defaults: &[String]) -> Vec<String> {
    match target {
        Some(target) => vec![target.to_string()],
        None => defaults.to_vec(),
    }
}

/// Open one PR per target base, in order.
///
/// A failed target never stops the ones after it.
pub fn create_prs<R: BufRead, W: Write>(
    dispatcher: &mut Dispatcher<'_, R, W>,
    head: &str,
    target: Option<&str>,
    defaults: &[String],
) -> Vec<(String, DispatchOutcome)> {
    let targets = resolve_targets(target, defaults);
    print_fanout_start(head, &targets);

    let results: Vec<(String, DispatchOutcome)> = targets
        .into_iter()
        .map(|base| {
            let outcome = dispatcher.dispatch(&base, head);
            (base, outcome)
        })
        .collect();

    print_fanout_summary(&results);
    results
}

/// A step of the feature branch sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureStep {
    CheckoutTrunk,
    PullTrunk,
    CreateBranch,
    Push,
}

impl FeatureStep {
    /// Execution order.
    pub const SEQUENCE: [FeatureStep; 4] = [
        FeatureStep::CheckoutTrunk,
        FeatureStep::PullTrunk,
        FeatureStep::CreateBranch,
        FeatureStep::Push,
    ];

    pub fn progress_label(&self) -> &'static str {
        match self {
            FeatureStep::CheckoutTrunk => "Checking out trunk",
            FeatureStep::PullTrunk => "Pulling latest trunk",
            FeatureStep::CreateBranch => "Creating feature branch",
            FeatureStep::Push => "Pushing branch to origin",
        }
    }
}

impl fmt::Display for FeatureStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            FeatureStep::CheckoutTrunk => "checking out trunk branch",
            FeatureStep::PullTrunk => "pulling trunk branch",
            FeatureStep::CreateBranch => "creating feature branch",
            FeatureStep::Push => "pushing branch to origin",
        };
        write!(f, "{}", text)
    }
}

/// Cut `name` from the latest `trunk` and push it upstream.
///
/// Stops at the first failing step. Steps already done are left as they are.
pub fn start_feature(backend: &dyn Backend, trunk: &str, name: &str) -> Result<()> {
    let name = name.trim();
    if name.is_empty() || name.chars().any(char::is_whitespace) {
        return Err(ShipError::InvalidBranchName(name.to_string()));
    }

    print_feature_start(name, trunk);

    for step in FeatureStep::SEQUENCE {
        print_feature_step(step);
        let result = match step {
            FeatureStep::CheckoutTrunk => backend.check_out(trunk),
            FeatureStep::PullTrunk => backend.pull(trunk),
            FeatureStep::CreateBranch => backend.create_branch(name),
            FeatureStep::Push => backend.push_upstream(name),
        };
        if let Err(e) = result {
            return Err(ShipError::SequenceAborted {
                step,
                output: e.raw_output().trim_end().to_string(),
            });
        }
        info!(%step, "step complete");
    }

    print_feature_complete();
    Ok(())
}
