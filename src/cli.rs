//! Command-line definition.
//!
//! Lives in the library so the completion generator sees the same commands
//! as the binary.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "ship")]
#[command(
    version,
    about = "Cut feature branches and open pull requests with AI-written descriptions",
    after_help = "EXAMPLES:
    ship feature mikun/my-feature       # branch from main and push
    ship -f mikun/my-feature            # same, short form
    ship prs                            # PR the current branch to main, stage, dev
    ship prs mikun/my-feature           # PR the given branch to main, stage, dev
    ship prs -s stage                   # PR the current branch to stage only
    ship prs mikun/my-feature -s stage  # PR the given branch to stage only
    ship config set-key                 # save your Gemini API key
    ship config status                  # check key configuration"
)]
pub struct Cli {
    /// Show debug logs on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Start a new feature branch from the trunk and push it
    #[command(short_flag = 'f')]
    Feature {
        /// Name of the branch to create (prompted for when omitted)
        name: Option<String>,
    },

    /// Create pull requests from a branch to the target bases
    #[command(after_help = "TARGETS:
    Without -s, PRs are opened against each entry of `base_branches` in
    ~/.config/ship/config.toml (default: main, stage, dev), in order.
    A branch with no commits over a base is skipped for that base.")]
    Prs {
        /// Head branch (defaults to the current branch)
        head: Option<String>,

        /// Open a PR against this branch only
        #[arg(short = 's', long = "single", value_name = "TARGET")]
        single: Option<String>,
    },

    /// Manage the Gemini API key and configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommand,
    },

    /// Output shell completion script to stdout (hidden utility command)
    #[command(hide = true)]
    Completions {
        /// Shell type to generate completions for (bash, zsh, or fish)
        shell: String,
    },
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigCommand {
    /// Securely store your Gemini API key
    SetKey,
    /// Remove the stored API key
    RemoveKey,
    /// Check whether an API key is configured
    Status,
    /// Show the effective configuration
    Show,
}
