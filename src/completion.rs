//! Shell completion scripts for ship.

use crate::cli::Cli;
use crate::error::{Result, ShipError};
use clap::CommandFactory;
use clap_complete::{generate, Shell};

/// Shells with completion support.
pub const SUPPORTED_SHELLS: &[&str] = &["bash", "zsh", "fish"];

/// Supported shell types for completion scripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellType {
    Bash,
    Zsh,
    Fish,
}

impl ShellType {
    /// Parse a shell name such as `zsh` or a path such as `/bin/zsh`.
    pub fn from_name(name: &str) -> Result<Self> {
        let shell_name = name.rsplit('/').next().unwrap_or(name);
        match shell_name {
            "bash" => Ok(ShellType::Bash),
            "zsh" => Ok(ShellType::Zsh),
            "fish" => Ok(ShellType::Fish),
            other => Err(ShipError::Config(format!("Unsupported shell: {}", other))),
        }
    }

    /// Convert to the `clap_complete::Shell` type.
    pub fn to_clap_shell(self) -> Shell {
        match self {
            ShellType::Bash => Shell::Bash,
            ShellType::Zsh => Shell::Zsh,
            ShellType::Fish => Shell::Fish,
        }
    }
}

/// Generate a completion script for the specified shell.
pub fn generate_completion_script(shell: ShellType) -> String {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    generate(shell.to_clap_shell(), &mut cmd, "ship", &mut buf);
    String::from_utf8(buf).unwrap_or_default()
}

/// Print the completion script to stdout.
pub fn print_completion_script(shell: ShellType) {
    print!("{}", generate_completion_script(shell));
}
