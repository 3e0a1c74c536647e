use crate::error::{Result, ShipError};
use crate::llm::DEFAULT_MODEL;
use crate::workflow::DEFAULT_BASE_BRANCHES;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// The base config directory name under ~/.config/
const CONFIG_DIR_NAME: &str = "ship";

/// The filename for the configuration file.
const CONFIG_FILENAME: &str = "config.toml";

// ============================================================================
// Configuration
// ============================================================================

/// User preferences for the branch and PR workflow.
///
/// Every field has a default, so a partial file (or none at all) works.
///
/// # Example
///
/// ```toml
/// trunk = "main"
/// base_branches = ["main", "stage", "dev"]
/// model = "gemini-2.5-flash"
/// request_timeout_secs = 60
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Branch that feature branches are cut from.
    #[serde(default = "default_trunk")]
    pub trunk: String,

    /// Bases `ship prs` opens PRs against when no `-s` target is given,
    /// in the order they are processed.
    #[serde(default = "default_base_branches")]
    pub base_branches: Vec<String>,

    /// Gemini model used for PR descriptions.
    #[serde(default = "default_model")]
    pub model: String,

    /// Timeout for the description request. On expiry the commit list is used.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_trunk() -> String {
    "main".to_string()
}

fn default_base_branches() -> Vec<String> {
    DEFAULT_BASE_BRANCHES.iter().map(|b| b.to_string()).collect()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_request_timeout_secs() -> u64 {
    60
}

impl Default for Config {
    fn default() -> Self {
        Self {
            trunk: default_trunk(),
            base_branches: default_base_branches(),
            model: default_model(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl Config {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

// ============================================================================
// Config Validation
// ============================================================================

/// Check a loaded configuration for values the workflow cannot use.
///
/// # Validation Rules
///
/// - `trunk` must not be blank
/// - `base_branches` must list at least one branch, none of them blank
/// - `request_timeout_secs` must be greater than zero
pub fn validate_config(config: &Config) -> Result<()> {
    if config.trunk.trim().is_empty() {
        return Err(ShipError::Config("`trunk` must not be empty".to_string()));
    }

    if config.base_branches.is_empty() {
        return Err(ShipError::Config(
            "`base_branches` must list at least one branch".to_string(),
        ));
    }

    if config.base_branches.iter().any(|b| b.trim().is_empty()) {
        return Err(ShipError::Config(
            "`base_branches` must not contain empty names".to_string(),
        ));
    }

    if config.request_timeout_secs == 0 {
        return Err(ShipError::Config(
            "`request_timeout_secs` must be greater than zero".to_string(),
        ));
    }

    Ok(())
}

// ============================================================================
// Config File Management
// ============================================================================

/// Default config file content with explanatory comments.
const DEFAULT_CONFIG_WITH_COMMENTS: &str = r#"# ship configuration

# Branch that `ship feature` cuts new branches from.
trunk = "main"

# Branches `ship prs` opens pull requests against, in order.
# `ship prs -s <branch>` targets a single branch instead.
base_branches = ["main", "stage", "dev"]

# Gemini model used to write PR descriptions.
# Without an API key (see `ship config set-key`) the commit list is used.
model = "gemini-2.5-flash"

# Seconds to wait for a description before falling back to the commit list.
request_timeout_secs = 60
"#;

/// Get the ship config directory path (~/.config/ship/).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| ShipError::Config("Could not determine home directory".to_string()))?;
    Ok(home.join(".config").join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (~/.config/ship/config.toml).
pub fn config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILENAME))
}

/// Load the configuration from `~/.config/ship/config.toml`.
///
/// If the file doesn't exist, it is created with default values and comments.
pub fn load_config() -> Result<Config> {
    load_config_at(&config_path()?)
}

/// Load and validate the configuration at `path`, creating a commented
/// default file when it is missing.
pub fn load_config_at(path: &Path) -> Result<Config> {
    if !path.exists() {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, DEFAULT_CONFIG_WITH_COMMENTS)?;
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content).map_err(|e| {
        ShipError::Config(format!(
            "Failed to parse config file at {:?}: {}",
            path, e
        ))
    })?;

    validate_config(&config)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_dir_returns_path_ending_with_ship() {
        let result = config_dir().unwrap();
        assert!(result.ends_with("ship"));
        assert!(result.parent().unwrap().ends_with(".config"));
    }

    #[test]
    fn test_default_config_values() {
        let config = Config::default();
        assert_eq!(config.trunk, "main");
        assert_eq!(config.base_branches, vec!["main", "stage", "dev"]);
        assert_eq!(config.model, "gemini-2.5-flash");
        assert_eq!(config.request_timeout(), Duration::from_secs(60));
    }

    #[test]
    fn test_default_config_text_parses_to_defaults() {
        let parsed: Config = toml::from_str(DEFAULT_CONFIG_WITH_COMMENTS).unwrap();
        assert_eq!(parsed, Config::default());
    }

    #[test]
    fn test_missing_file_is_created_with_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(".config").join("ship").join("config.toml");
        assert!(!path.exists());

        let config = load_config_at(&path).unwrap();

        assert_eq!(config, Config::default());
        assert!(path.exists());
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("# ship configuration"));
    }

    #[test]
    fn test_partial_file_fills_missing_keys() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "trunk = \"develop\"\n").unwrap();

        let config = load_config_at(&path).unwrap();

        assert_eq!(config.trunk, "develop");
        assert_eq!(config.base_branches, default_base_branches());
        assert_eq!(config.model, DEFAULT_MODEL);
    }

    #[test]
    fn test_custom_base_branches_keep_order() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "base_branches = [\"release\", \"main\"]\n").unwrap();

        let config = load_config_at(&path).unwrap();

        assert_eq!(config.base_branches, vec!["release", "main"]);
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "trunk = [unterminated").unwrap();

        let err = load_config_at(&path).unwrap_err();
        assert!(matches!(err, ShipError::Config(_)));
    }

    #[test]
    fn test_validate_rejects_empty_base_list() {
        let config = Config {
            base_branches: vec![],
            ..Default::default()
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_rejects_blank_entries() {
        let config = Config {
            base_branches: vec!["main".to_string(), " ".to_string()],
            ..Default::default()
        };
        assert!(validate_config(&config).is_err());

        let config = Config {
            trunk: String::new(),
            ..Default::default()
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = Config {
            request_timeout_secs: 0,
            ..Default::default()
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(validate_config(&Config::default()).is_ok());
    }
}
