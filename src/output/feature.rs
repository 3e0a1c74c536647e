//! Feature branch workflow output.

use crate::workflow::FeatureStep;

use super::colors::*;

pub fn print_feature_start(branch: &str, trunk: &str) {
    println!(
        "{BOLD}Starting feature workflow:{RESET} {CYAN}{}{RESET} (from {})",
        branch, trunk
    );
    println!();
}

/// Print a progress line for a step about to run.
pub fn print_feature_step(step: FeatureStep) {
    println!("{GRAY}{}...{RESET}", step.progress_label());
}

/// Print the success message and the next-step hint.
pub fn print_feature_complete() {
    println!("{GREEN}{BOLD}✓ Branch created and pushed{RESET}");
    println!();
    println!("Make your changes, commit, and push. Then run:");
    println!("  {CYAN}ship prs{RESET}");
}
