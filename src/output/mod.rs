//! Terminal output formatting for ship.
//!
//! - [`messages`] - Error, warning, and info messages
//! - [`pr`] - Pull request dispatch output
//! - [`feature`] - Feature branch workflow output
//! - [`key`] - API key management output

pub mod feature;
pub mod key;
pub mod messages;
pub mod pr;

/// ANSI color codes for terminal output.
pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const RED: &str = "\x1b[31m";
    pub const GRAY: &str = "\x1b[90m";
}

pub use colors::*;

pub use feature::{print_feature_complete, print_feature_start, print_feature_step};
pub use key::{print_key_removed, print_key_saved, print_key_status};
pub use messages::{print_error, print_info, print_warning};
pub use pr::{
    print_commits_found, print_creating_pr, print_dispatch_outcome, print_fanout_start,
    print_fanout_summary, print_fetching_commits, print_generating_description,
    print_submitting_pr,
};
