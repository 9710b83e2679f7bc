use crate::{Error, Result};
use contribgrid_providers::{DEFAULT_GITHUB_GRAPHQL_URL, GitHubClient, GitHubConfig};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";
pub const CONFIG_ENV_VAR: &str = "CONTRIBGRID_CONFIG";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Resolve the config file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. CONTRIBGRID_CONFIG environment variable (with tilde expansion)
/// 3. XDG config directory (recommended default)
/// 4. ~/.contribgrid/config.toml (fallback for systems without XDG)
pub fn resolve_config_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("contribgrid").join("config.toml"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".contribgrid").join("config.toml"));
    }

    Err(Error::Config(
        "Could not determine config path: no HOME directory or XDG config directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(stripped);
        }
    }
    PathBuf::from(path)
}

/// On-disk configuration (`config.toml`). Every field is optional.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub github_token: Option<String>,
    #[serde(default)]
    pub api_url: Option<String>,
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Validate and merge with overrides.
    ///
    /// `env_token` takes precedence over `github_token`; `api_url_override`
    /// over `api_url`.
    pub fn resolve(
        self,
        env_token: Option<String>,
        api_url_override: Option<String>,
    ) -> Result<Settings> {
        let token = env_token
            .filter(|t| !t.trim().is_empty())
            .or(self.github_token)
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or_else(|| {
                Error::Config(format!(
                    "No GitHub token provided. Set {} or github_token in the config file.",
                    TOKEN_ENV_VAR
                ))
            })?;

        if token.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(Error::Config(
                "GitHub token must not contain whitespace".to_string(),
            ));
        }

        let api_url = api_url_override
            .or(self.api_url)
            .unwrap_or_else(|| DEFAULT_GITHUB_GRAPHQL_URL.to_string());
        if !(api_url.starts_with("https://") || api_url.starts_with("http://")) {
            return Err(Error::Config(format!(
                "api_url must be an http(s) URL, got '{}'",
                api_url
            )));
        }

        let timeout_secs = self.request_timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);
        if timeout_secs == 0 {
            return Err(Error::Config(
                "request_timeout_secs must be greater than zero".to_string(),
            ));
        }

        Ok(Settings {
            token,
            api_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

/// Validated settings the fetch path runs with.
#[derive(Clone, PartialEq, Eq)]
pub struct Settings {
    token: String,
    pub api_url: String,
    pub timeout: Duration,
}

impl Settings {
    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn github_config(&self) -> GitHubConfig {
        GitHubConfig::new(self.token.clone())
            .with_api_url(self.api_url.clone())
            .with_timeout(self.timeout)
    }

    pub fn client(&self) -> Result<GitHubClient> {
        Ok(GitHubClient::new(self.github_config())?)
    }
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("token", &"<redacted>")
            .field("api_url", &self.api_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}
