//! Pull request dispatch output.

use crate::dispatch::DispatchOutcome;

use super::colors::*;

/// Print the head branch and targets before fanning out.
pub fn print_fanout_start(head: &str, targets: &[String]) {
    println!("{CYAN}Head branch:{RESET} {BOLD}{}{RESET}", head);
    println!("{CYAN}Targets:{RESET} {}", targets.join(", "));
}

/// Print the header for one base/head pair.
pub fn print_creating_pr(base: &str, head: &str) {
    println!();
    println!(
        "{BOLD}Creating pull request:{RESET} {CYAN}{}{RESET} <- {CYAN}{}{RESET}",
        base, head
    );
}

pub fn print_fetching_commits() {
    println!("{GRAY}Fetching commits...{RESET}");
}

/// Print how many commits the PR will contain.
pub fn print_commits_found(count: usize) {
    println!(
        "Found {} commit{}",
        count,
        if count == 1 { "" } else { "s" }
    );
}

pub fn print_generating_description() {
    println!("{GRAY}Generating PR description...{RESET}");
}

pub fn print_submitting_pr() {
    println!("\n🚀 Creating PR...");
}

/// Print the status line for a finished dispatch.
pub fn print_dispatch_outcome(base: &str, head: &str, outcome: &DispatchOutcome) {
    match outcome {
        DispatchOutcome::NoCommits => println!(
            "{GRAY}No commits found between {} and {}. Skipping PR creation.{RESET}",
            base, head
        ),
        DispatchOutcome::CommitsUnavailable(reason) => {
            println!("{RED}Error getting commits:{RESET} {}", reason)
        }
        DispatchOutcome::Cancelled => println!("{YELLOW}PR creation cancelled{RESET}"),
        DispatchOutcome::Created(output) => {
            println!("{GREEN}{BOLD}✓ PR created successfully!{RESET}");
            println!("{}", output.trim_end());
        }
        DispatchOutcome::SubmissionFailed(output) => {
            println!("{RED}{BOLD}Error creating PR:{RESET} {}", output.trim_end())
        }
    }
}

/// Print one line per target after the fan-out.
pub fn print_fanout_summary(results: &[(String, DispatchOutcome)]) {
    println!();
    println!("{BOLD}All PRs processed{RESET}");
    for (base, outcome) in results {
        let (color, label) = match outcome {
            DispatchOutcome::Created(_) => (GREEN, "created"),
            DispatchOutcome::NoCommits => (GRAY, "skipped (no commits)"),
            DispatchOutcome::Cancelled => (YELLOW, "cancelled"),
            DispatchOutcome::CommitsUnavailable(_) => (RED, "failed (commits unavailable)"),
            DispatchOutcome::SubmissionFailed(_) => (RED, "failed"),
        };
        println!("  {}{:<8}{RESET} {}", color, base, label);
    }

    let failed = failure_count(results);
    if failed > 0 {
        println!("{RED}{} of {} targets failed{RESET}", failed, results.len());
    }
}

/// Targets whose commits could not be listed or whose PR was rejected.
fn failure_count(results: &[(String, DispatchOutcome)]) -> usize {
    results.iter().filter(|(_, outcome)| outcome.is_failure()).count()
}
