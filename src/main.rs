//! ship CLI entry point.
//!
//! Parses command-line arguments and dispatches to the appropriate command handler.

use clap::Parser;
use ship::cli::{Cli, Commands};
use ship::commands::{config_command, feature_command, prs_command};
use ship::completion::{print_completion_script, ShellType, SUPPORTED_SHELLS};
use ship::logging::init_tracing;
use ship::output::print_error;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match &cli.command {
        Commands::Feature { name } => feature_command(name.as_deref()),
        Commands::Prs { head, single } => prs_command(head.as_deref(), single.as_deref()),
        Commands::Config { action } => config_command(*action),
        Commands::Completions { shell } => match ShellType::from_name(shell) {
            Ok(shell_type) => {
                print_completion_script(shell_type);
                Ok(())
            }
            Err(e) => {
                print_error(&format!(
                    "{}\nSupported shells: {}",
                    e,
                    SUPPORTED_SHELLS.join(", ")
                ));
                std::process::exit(1);
            }
        },
    };

    if let Err(e) = result {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
