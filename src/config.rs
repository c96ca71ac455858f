use crate::error::{CasegenError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// The base config directory name under ~/.config/
const CONFIG_DIR_NAME: &str = "casegen";

/// The filename for the configuration file.
const CONFIG_FILENAME: &str = "config.toml";

/// Environment variables that override the config file.
pub const ENV_BASE_URL: &str = "JIRA_BASE_URL";
pub const ENV_USERNAME: &str = "JIRA_USERNAME";
pub const ENV_API_TOKEN: &str = "JIRA_API_TOKEN";

/// JIRA connection settings.
///
/// All fields are optional: with nothing configured, issue fetches return a
/// mock payload instead of hitting the network. Settings resolve in two
/// layers: the config file at `~/.config/casegen/config.toml`, then the
/// `JIRA_BASE_URL` / `JIRA_USERNAME` / `JIRA_API_TOKEN` environment
/// variables, which take precedence field by field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JiraSettings {
    /// Base URL of the JIRA instance, e.g. `https://example.atlassian.net`.
    #[serde(default)]
    pub base_url: Option<String>,

    /// Account email/username for basic auth.
    #[serde(default)]
    pub username: Option<String>,

    /// API token paired with the username.
    #[serde(default)]
    pub api_token: Option<String>,
}

impl JiraSettings {
    /// True when all three settings are present and non-empty.
    pub fn is_configured(&self) -> bool {
        [&self.base_url, &self.username, &self.api_token]
            .iter()
            .all(|v| v.as_deref().is_some_and(|s| !s.trim().is_empty()))
    }

    /// Overlay environment variables on top of these settings.
    ///
    /// Empty environment values are ignored rather than clearing a
    /// file-provided setting.
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(v) = non_empty_env(ENV_BASE_URL) {
            self.base_url = Some(v);
        }
        if let Some(v) = non_empty_env(ENV_USERNAME) {
            self.username = Some(v);
        }
        if let Some(v) = non_empty_env(ENV_API_TOKEN) {
            self.api_token = Some(v);
        }
        self
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Default config file content with explanatory comments.
///
/// Written when creating a new config file so users can fill in their JIRA
/// settings without reading documentation.
const DEFAULT_CONFIG_WITH_COMMENTS: &str = r#"# casegen configuration
# JIRA connection settings for the `fetch` and `prepare --issue` commands.
# Leave everything commented out to work offline with mock issues.
# Each value can also be set via the JIRA_BASE_URL, JIRA_USERNAME and
# JIRA_API_TOKEN environment variables, which take precedence.

# Base URL of your JIRA instance
# base_url = "https://example.atlassian.net"

# Account email used for API basic auth
# username = "you@example.com"

# API token paired with the username
# api_token = "your-token"
"#;

/// Get the casegen config directory path (~/.config/casegen/).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| CasegenError::Config("Could not determine home directory".to_string()))?;
    Ok(home.join(".config").join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (~/.config/casegen/config.toml).
pub fn config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILENAME))
}

/// Load settings from the config file, creating a commented template on
/// first use, then apply environment overrides.
pub fn load_settings() -> Result<JiraSettings> {
    Ok(load_file_settings()?.with_env_overrides())
}

/// Load settings from the config file only (no environment overrides).
///
/// If the config file doesn't exist, it is created with commented defaults
/// and empty settings are returned.
pub fn load_file_settings() -> Result<JiraSettings> {
    let path = config_path()?;
    if !path.exists() {
        fs::create_dir_all(config_dir()?)?;
        fs::write(&path, DEFAULT_CONFIG_WITH_COMMENTS)?;
        return Ok(JiraSettings::default());
    }
    read_settings_file(&path)
}

/// Parse a settings file at an explicit path.
fn read_settings_file(path: &Path) -> Result<JiraSettings> {
    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| {
        CasegenError::Config(format!("Failed to parse config file at {:?}: {}", path, e))
    })
}

/// Load settings from a config file under a custom base directory.
///
/// Testable variant of [`load_file_settings`]: `<base>/.config/casegen/config.toml`.
#[cfg(test)]
fn load_file_settings_at(base: &Path) -> Result<JiraSettings> {
    let dir = base.join(".config").join(CONFIG_DIR_NAME);
    let path = dir.join(CONFIG_FILENAME);
    if !path.exists() {
        fs::create_dir_all(&dir)?;
        fs::write(&path, DEFAULT_CONFIG_WITH_COMMENTS)?;
        return Ok(JiraSettings::default());
    }
    read_settings_file(&path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_dir_ends_with_casegen() {
        let dir = config_dir().unwrap();
        assert!(dir.ends_with("casegen"));
        assert!(dir.parent().unwrap().ends_with(".config"));
    }

    #[test]
    fn test_config_path_ends_with_config_toml() {
        let path = config_path().unwrap();
        assert!(path.ends_with("config.toml"));
    }

    #[test]
    fn test_first_load_creates_commented_template() {
        let temp = TempDir::new().unwrap();
        let settings = load_file_settings_at(temp.path()).unwrap();

        assert_eq!(settings, JiraSettings::default());
        let written = temp
            .path()
            .join(".config")
            .join("casegen")
            .join("config.toml");
        assert!(written.exists());
        let content = fs::read_to_string(written).unwrap();
        assert!(content.contains("base_url"));
        assert!(content.contains("JIRA_API_TOKEN"));
    }

    #[test]
    fn test_load_reads_existing_file() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(".config").join("casegen");
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("config.toml"),
            "base_url = \"https://jira.example.com/\"\nusername = \"me@example.com\"\napi_token = \"tok\"\n",
        )
        .unwrap();

        let settings = load_file_settings_at(temp.path()).unwrap();
        assert_eq!(
            settings.base_url.as_deref(),
            Some("https://jira.example.com/")
        );
        assert_eq!(settings.username.as_deref(), Some("me@example.com"));
        assert!(settings.is_configured());
    }

    #[test]
    fn test_partial_file_parses_with_missing_fields() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(".config").join("casegen");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.toml"), "base_url = \"https://j\"\n").unwrap();

        let settings = load_file_settings_at(temp.path()).unwrap();
        assert!(settings.base_url.is_some());
        assert!(settings.username.is_none());
        assert!(!settings.is_configured());
    }

    #[test]
    fn test_invalid_toml_is_a_config_error() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(".config").join("casegen");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.toml"), "base_url = [not toml").unwrap();

        let result = load_file_settings_at(temp.path());
        assert!(matches!(result, Err(CasegenError::Config(_))));
    }

    #[test]
    fn test_is_configured_requires_all_three_fields() {
        let mut settings = JiraSettings {
            base_url: Some("https://j".into()),
            username: Some("u".into()),
            api_token: None,
        };
        assert!(!settings.is_configured());

        settings.api_token = Some("t".into());
        assert!(settings.is_configured());
    }

    #[test]
    fn test_is_configured_rejects_blank_values() {
        let settings = JiraSettings {
            base_url: Some("https://j".into()),
            username: Some("   ".into()),
            api_token: Some("t".into()),
        };
        assert!(!settings.is_configured());
    }
}
