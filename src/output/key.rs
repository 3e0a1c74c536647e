//! API key management output.

use crate::credentials::CredentialSourceKind;

use super::colors::*;

pub fn print_key_saved() {
    println!("{GREEN}API key saved securely{RESET}");
}

pub fn print_key_removed() {
    println!("{GREEN}API key removed{RESET}");
}

/// Print where the API key is configured, if anywhere.
pub fn print_key_status(source: Option<CredentialSourceKind>) {
    match source {
        Some(source) => println!("{GREEN}✓{RESET} Gemini API key is configured ({})", source),
        None => {
            println!("{YELLOW}✗ No Gemini API key configured{RESET}");
            println!(
                "{GRAY}Run 'ship config set-key' or set GEMINI_API_KEY. Without a key, PR descriptions list the commits.{RESET}"
            );
        }
    }
}
