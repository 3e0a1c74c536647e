//! Generation API key lookup and storage.
//!
//! The key is resolved from the `GEMINI_API_KEY` environment variable first and
//! then from the operating system's credential store. ship never writes the
//! key anywhere except the credential store, and only on `config set-key`.

use std::env;
use std::fmt;

use tracing::debug;

use crate::error::{Result, ShipError};

/// Environment variable that overrides the stored key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

const SERVICE_NAME: &str = "ship-cli";
const ACCOUNT_NAME: &str = "gemini-api-key";

/// Where a resolved key came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSourceKind {
    Environment,
    Keyring,
}

impl fmt::Display for CredentialSourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialSourceKind::Environment => write!(f, "environment variable"),
            CredentialSourceKind::Keyring => write!(f, "keyring"),
        }
    }
}

/// A resolved API key, or the explicit absence of one.
#[derive(Clone, PartialEq, Eq)]
pub enum Credential {
    Present {
        key: String,
        source: CredentialSourceKind,
    },
    Absent,
}

// Keep the key out of logs and panic messages.
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credential::Present { source, .. } => f
                .debug_struct("Present")
                .field("key", &"<redacted>")
                .field("source", source)
                .finish(),
            Credential::Absent => write!(f, "Absent"),
        }
    }
}

/// Anything that can produce the current credential.
pub trait CredentialSource {
    fn resolve(&self) -> Credential;
}

/// Persistent secret storage for the API key.
pub trait CredentialStore {
    /// The stored key, `None` when nothing is stored.
    fn get(&self) -> Result<Option<String>>;
    fn save(&self, key: &str) -> Result<()>;
    fn delete(&self) -> Result<()>;
}

/// Credential store backed by the platform keychain.
#[derive(Debug, Default, Clone, Copy)]
pub struct KeyringStore;

impl KeyringStore {
    fn entry(&self) -> Result<keyring::Entry> {
        keyring::Entry::new(SERVICE_NAME, ACCOUNT_NAME)
            .map_err(|e| ShipError::Credential(e.to_string()))
    }
}

impl CredentialStore for KeyringStore {
    fn get(&self) -> Result<Option<String>> {
        match self.entry()?.get_password() {
            Ok(key) => Ok(Some(key)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(ShipError::Credential(e.to_string())),
        }
    }

    fn save(&self, key: &str) -> Result<()> {
        self.entry()?
            .set_password(key)
            .map_err(|e| ShipError::Credential(e.to_string()))
    }

    fn delete(&self) -> Result<()> {
        self.entry()?
            .delete_credential()
            .map_err(|e| ShipError::Credential(e.to_string()))
    }
}

/// Resolves `GEMINI_API_KEY` first, then the given store.
#[derive(Debug, Default, Clone)]
pub struct EnvOrStore<S> {
    store: S,
}

impl<S: CredentialStore> EnvOrStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

impl<S: CredentialStore> CredentialSource for EnvOrStore<S> {
    fn resolve(&self) -> Credential {
        let env_key = env::var(API_KEY_ENV).ok();
        let stored = || match self.store.get() {
            Ok(key) => key,
            Err(e) => {
                debug!(error = %e, "credential store unavailable");
                None
            }
        };
        resolve_credential(env_key, stored)
    }
}

/// Production credential source.
pub fn system_credentials() -> EnvOrStore<KeyringStore> {
    EnvOrStore::new(KeyringStore)
}

/// Apply the environment-over-store precedence.
///
/// An empty value at either source counts as not configured there. The store
/// is only consulted when the environment has no usable key.
pub fn resolve_credential<F>(env_key: Option<String>, stored: F) -> Credential
where
    F: FnOnce() -> Option<String>,
{
    if let Some(key) = env_key.filter(|k| !k.trim().is_empty()) {
        return Credential::Present {
            key,
            source: CredentialSourceKind::Environment,
        };
    }

    match stored().filter(|k| !k.trim().is_empty()) {
        Some(key) => Credential::Present {
            key,
            source: CredentialSourceKind::Keyring,
        },
        None => Credential::Absent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::ENV_MUTEX;
    use std::cell::RefCell;

    #[derive(Default)]
    struct MemoryStore {
        key: RefCell<Option<String>>,
    }

    impl CredentialStore for MemoryStore {
        fn get(&self) -> Result<Option<String>> {
            Ok(self.key.borrow().clone())
        }

        fn save(&self, key: &str) -> Result<()> {
            *self.key.borrow_mut() = Some(key.to_string());
            Ok(())
        }

        fn delete(&self) -> Result<()> {
            *self.key.borrow_mut() = None;
            Ok(())
        }
    }

    struct BrokenStore;

    impl CredentialStore for BrokenStore {
        fn get(&self) -> Result<Option<String>> {
            Err(ShipError::Credential("no secret service".to_string()))
        }

        fn save(&self, _key: &str) -> Result<()> {
            Err(ShipError::Credential("no secret service".to_string()))
        }

        fn delete(&self) -> Result<()> {
            Err(ShipError::Credential("no secret service".to_string()))
        }
    }

    #[test]
    fn test_environment_overrides_store() {
        let credential = resolve_credential(Some("env-key".to_string()), || {
            Some("stored-key".to_string())
        });
        assert_eq!(
            credential,
            Credential::Present {
                key: "env-key".to_string(),
                source: CredentialSourceKind::Environment,
            }
        );
    }

    #[test]
    fn test_store_used_when_environment_missing() {
        let credential = resolve_credential(None, || Some("stored-key".to_string()));
        assert_eq!(
            credential,
            Credential::Present {
                key: "stored-key".to_string(),
                source: CredentialSourceKind::Keyring,
            }
        );
    }

    #[test]
    fn test_empty_environment_value_falls_through_to_store() {
        let credential = resolve_credential(Some("  ".to_string()), || {
            Some("stored-key".to_string())
        });
        assert!(matches!(
            credential,
            Credential::Present {
                source: CredentialSourceKind::Keyring,
                ..
            }
        ));
    }

    #[test]
    fn test_nothing_configured_is_absent() {
        assert_eq!(resolve_credential(None, || None), Credential::Absent);
        assert_eq!(
            resolve_credential(Some(String::new()), || Some(String::new())),
            Credential::Absent
        );
    }

    #[test]
    fn test_store_not_consulted_when_environment_set() {
        let consulted = RefCell::new(false);
        resolve_credential(Some("env-key".to_string()), || {
            *consulted.borrow_mut() = true;
            None
        });
        assert!(!*consulted.borrow());
    }

    #[test]
    fn test_debug_redacts_key() {
        let credential = Credential::Present {
            key: "super-secret".to_string(),
            source: CredentialSourceKind::Keyring,
        };
        let debug = format!("{:?}", credential);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("redacted"));
    }

    #[test]
    fn test_env_or_store_reads_saved_key() {
        let _lock = ENV_MUTEX.lock().unwrap();
        let previous = env::var(API_KEY_ENV).ok();
        env::remove_var(API_KEY_ENV);

        let store = MemoryStore::default();
        store.save("saved").unwrap();
        let source = EnvOrStore::new(store);
        assert_eq!(
            source.resolve(),
            Credential::Present {
                key: "saved".to_string(),
                source: CredentialSourceKind::Keyring,
            }
        );

        source.store.delete().unwrap();
        assert_eq!(source.resolve(), Credential::Absent);

        if let Some(value) = previous {
            env::set_var(API_KEY_ENV, value);
        }
    }

    #[test]
    fn test_broken_store_resolves_to_absent() {
        let _lock = ENV_MUTEX.lock().unwrap();
        let previous = env::var(API_KEY_ENV).ok();
        env::remove_var(API_KEY_ENV);

        let source = EnvOrStore::new(BrokenStore);
        assert_eq!(source.resolve(), Credential::Absent);

        if let Some(value) = previous {
            env::set_var(API_KEY_ENV, value);
        }
    }
}
