//! Config command handler.
//!
//! Stores, removes, and reports the Gemini API key, and shows the config file.

use crate::cli::ConfigCommand;
use crate::config::{config_path, load_config};
use crate::credentials::{
    system_credentials, Credential, CredentialSource, CredentialSourceKind, CredentialStore,
    KeyringStore, API_KEY_ENV,
};
use crate::error::{Result, ShipError};
use crate::output::{
    print_info, print_key_removed, print_key_saved, print_key_status, BOLD, CYAN, GRAY, RESET,
};
use crate::prompt;

/// Run a `ship config` subcommand.
pub fn config_command(action: ConfigCommand) -> Result<()> {
    match action {
        ConfigCommand::SetKey => set_key_command(&KeyringStore),
        ConfigCommand::RemoveKey => remove_key_command(&KeyringStore),
        ConfigCommand::Status => {
            print_key_status(configured_source(&system_credentials()));
            Ok(())
        }
        ConfigCommand::Show => show_config_command(),
    }
}

/// Prompt for the key (masked) and save it to the credential store.
fn set_key_command(store: &dyn CredentialStore) -> Result<()> {
    let key = prompt::read_secret("Enter your Gemini API key:")?;

    let confirmation = if prompt::confirm("Re-enter the key to confirm?", false) {
        Some(prompt::read_secret("Re-enter your API key:")?)
    } else {
        None
    };

    save_key(store, &key, confirmation.as_deref())?;
    print_key_saved();
    Ok(())
}

/// Validate and store a key. A given confirmation must match exactly.
pub fn save_key(store: &dyn CredentialStore, key: &str, confirmation: Option<&str>) -> Result<()> {
    let key = key.trim();
    if key.is_empty() {
        return Err(ShipError::Credential("API key cannot be empty".to_string()));
    }

    if let Some(confirmation) = confirmation {
        if confirmation.trim() != key {
            return Err(ShipError::Credential("Keys do not match".to_string()));
        }
    }

    store.save(key).map_err(|e| {
        ShipError::Credential(format!(
            "Could not save API key securely (keyring unavailable): {}",
            e
        ))
    })
}

/// Delete the stored key after confirmation.
fn remove_key_command(store: &dyn CredentialStore) -> Result<()> {
    if store.get()?.is_none() {
        print_info("No API key stored in the keyring");
        if std::env::var(API_KEY_ENV).is_ok_and(|v| !v.trim().is_empty()) {
            println!("{GRAY}{} is set in the environment; unset it there.{RESET}", API_KEY_ENV);
        }
        return Ok(());
    }

    if !prompt::confirm("Are you sure you want to remove your API key?", false) {
        println!("Cancelled");
        return Ok(());
    }

    store.delete()?;
    print_key_removed();
    Ok(())
}

/// Where the key would be read from right now, if anywhere.
pub fn configured_source(source: &dyn CredentialSource) -> Option<CredentialSourceKind> {
    match source.resolve() {
        Credential::Present { source, .. } => Some(source),
        Credential::Absent => None,
    }
}

/// Print the effective configuration and where it lives.
fn show_config_command() -> Result<()> {
    let path = config_path()?;
    let config = load_config()?;

    println!("{BOLD}# Config{RESET}");
    println!("{GRAY}# {}{RESET}", path.display());
    println!();
    println!("{CYAN}trunk{RESET} = {:?}", config.trunk);
    println!("{CYAN}base_branches{RESET} = {:?}", config.base_branches);
    println!("{CYAN}model{RESET} = {:?}", config.model);
    println!("{CYAN}request_timeout_secs{RESET} = {}", config.request_timeout_secs);
    Ok(())
}
