//! Configuration file and environment overrides.
//!
//! The file lives at `<config dir>/projdesk/config.toml` unless `--config`
//! names another one. A missing file means defaults. After the file is read,
//! `PROJDESK_API_URL`, `PROJDESK_TOKEN`, and `PROJDESK_USER_ID` override the
//! matching settings.

use std::path::PathBuf;

use projdesk_app::PageOptions;
use projdesk_client::ClientConfig;
use projdesk_client::paths::DEFAULT_VERIFY_PATH;
use projdesk_core::UserId;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Name of the directory under the platform config dir.
pub const PROJECT_NAME: &str = "projdesk";

/// Overrides `api.base_url`.
pub const ENV_API_URL: &str = "PROJDESK_API_URL";
/// Overrides `session.token`.
pub const ENV_TOKEN: &str = "PROJDESK_TOKEN";
/// Overrides `session.user_id`.
pub const ENV_USER_ID: &str = "PROJDESK_USER_ID";

/// How the CLI establishes who the user is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Fixed user identity, used when no token is configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,

    /// Bearer token checked against the verification endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Path of the verification endpoint, relative to `api.base_url`.
    pub verify_path: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            user_id: None,
            token: None,
            verify_path: DEFAULT_VERIFY_PATH.to_string(),
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjdeskConfig {
    /// Projects service connection
    pub api: ClientConfig,
    /// Session resolution
    pub session: SessionConfig,
    /// Page behaviour
    pub ui: PageOptions,
}

impl ProjdeskConfig {
    /// Default config file location, if the platform has a config dir.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(PROJECT_NAME).join("config.toml"))
    }

    /// The explicit path if given, else the default location.
    pub fn resolve_config_path(config_path: Option<&str>) -> Option<PathBuf> {
        match config_path {
            Some(path) => Some(PathBuf::from(path)),
            None => Self::default_config_path(),
        }
    }

    /// Reads the config file (if any) and applies environment overrides.
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let mut config = Self::load_file(config_path)?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Reads the config file without environment overrides.
    ///
    /// A missing file yields the defaults; an unreadable or malformed one is
    /// an error.
    pub fn load_file(config_path: Option<&str>) -> Result<Self> {
        let Some(path) = Self::resolve_config_path(config_path) else {
            tracing::debug!("No config directory on this platform; using defaults");
            return Ok(Self::default());
        };

        if !path.exists() {
            tracing::debug!(path = %path.display(), "Config file not found; using defaults");
            return Ok(Self::default());
        }

        let content =
            std::fs::read_to_string(&path).map_err(|e| Error::io_with_path(e, &path))?;
        let config = Self::from_toml_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))?;
        tracing::debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }

    /// Parses a TOML document.
    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Applies overrides looked up by environment variable name.
    ///
    /// Empty values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(url) = lookup(ENV_API_URL) {
            self.api.base_url = url;
        }
        if let Some(token) = lookup(ENV_TOKEN) {
            self.session.token = Some(token);
        }
        if let Some(raw) = lookup(ENV_USER_ID) {
            let id = raw
                .parse::<UserId>()
                .map_err(|e| Error::config(format!("{ENV_USER_ID}={raw:?} is not a user id: {e}")))?;
            self.session.user_id = Some(id);
        }
        Ok(())
    }

    /// Serializes to pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }
}
