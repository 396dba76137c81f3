//! Configuration file management.
//!
//! Handles reading, creating, and migrating the `~/.zmon-cli.yaml`
//! configuration file. A `password` found in the file is moved into the
//! secret store and stripped from disk; the file is rewritten at most
//! once per invocation (first load after an init or a migration).

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::cli::output;
use crate::core::constants::SECRET_SERVICE;
use crate::core::credentials::{Prompter, SecretStore};
use crate::error::{ConfigError, Result};

/// TLS verification override: a plain bool, or a path to a CA bundle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum TlsVerify {
    Flag(bool),
    CaBundle(String),
}

/// Client configuration stored in `~/.zmon-cli.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Base URL of the ZMON API, e.g. `https://zmon.example.org/api/v1`.
    #[serde(default)]
    pub url: String,

    /// Username for basic auth. Ignored when `token` is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,

    /// Fixed bearer token. Takes precedence over `user`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// TLS verification override. `false` disables certificate checks,
    /// a string is used as a CA bundle path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verify: Option<TlsVerify>,

    /// Legacy plaintext password. Read for migration only, never written
    /// back to disk.
    #[serde(default, skip_serializing)]
    pub password: Option<String>,

    /// Unknown fields are preserved across rewrites.
    #[serde(default, flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl Config {
    /// Load the configuration from `path`, creating it interactively if
    /// it does not exist.
    ///
    /// A `password` field found in an existing file is migrated into the
    /// secret store under (`"zmon-cli"`, user) and the file is rewritten
    /// without it. The migration is idempotent: once the password is
    /// gone, subsequent loads never rewrite the file.
    pub fn load(path: &Path, store: &dyn SecretStore, prompter: &dyn Prompter) -> Result<Self> {
        let config = if path.exists() {
            Self::load_existing(path, store)?
        } else {
            Self::init(path, prompter)?
        };

        config.validate(path)?;
        Ok(config)
    }

    /// Parse an existing config file without migration or prompting.
    pub fn load_file(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading config");

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
            path: path.display().to_string(),
            source,
        })?;
        let mut config: Self =
            serde_yaml::from_str(&contents).map_err(|source| ConfigError::Malformed {
                path: path.display().to_string(),
                source,
            })?;
        config.url = config.url.trim_end_matches('/').to_string();
        Ok(config)
    }

    fn load_existing(path: &Path, store: &dyn SecretStore) -> Result<Self> {
        let mut config = Self::load_file(path)?;

        if let Some(password) = config.password.take() {
            match &config.user {
                Some(user) => {
                    debug!(user = %user, "migrating plaintext password into secret store");
                    store.set(SECRET_SERVICE, user, &password)?;
                }
                None => output::warn("ignoring 'password' in config: no 'user' set"),
            }
            config.save(path)?;
        }

        Ok(config)
    }

    fn init(path: &Path, prompter: &dyn Prompter) -> Result<Self> {
        output::warn(&format!(
            "No configuration file found at [{}]",
            path.display()
        ));

        let url = prompter.prompt_text("ZMON Base URL (e.g. https://zmon.example.org/api/v1)", None)?;
        let user = prompter.prompt_text("ZMON username", Some(&whoami::username()))?;

        let config = Self {
            url: url.trim_end_matches('/').to_string(),
            user: Some(user),
            ..Self::default()
        };
        config.save(path)?;
        Ok(config)
    }

    /// Write the configuration to `path` as YAML. The `password` field is
    /// never serialized.
    pub fn save(&self, path: &Path) -> Result<()> {
        debug!(path = %path.display(), "saving config");

        let contents = serde_yaml::to_string(self)?;
        std::fs::write(path, contents).map_err(|source| {
            ConfigError::WriteFailed {
                path: path.display().to_string(),
                source,
            }
            .into()
        })
    }

    fn validate(&self, path: &Path) -> Result<()> {
        if self.url.is_empty() {
            return Err(ConfigError::MissingUrl {
                path: path.display().to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// The configured user, or `"unknown"`. Used to stamp
    /// `last_modified_by` on definitions.
    pub fn user_or_unknown(&self) -> &str {
        self.user.as_deref().unwrap_or("unknown")
    }

    /// Scheme + host portion of the API URL, with a trailing slash.
    /// Used to build links into the web frontend.
    pub fn base_url(&self) -> String {
        match Url::parse(&self.url) {
            Ok(mut url) => {
                url.set_path("/");
                url.set_query(None);
                url.set_fragment(None);
                url.to_string()
            }
            Err(_) => format!("{}/", self.url.trim_end_matches('/')),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_keeps_scheme_and_host_only() {
        let config = Config {
            url: "https://localhost:8443/example/api/v123".to_string(),
            ..Config::default()
        };
        assert_eq!(config.base_url(), "https://localhost:8443/");
    }

    #[test]
    fn verify_accepts_bool_and_path() {
        let config: Config = serde_yaml::from_str("url: http://x\nverify: false\n").unwrap();
        assert_eq!(config.verify, Some(TlsVerify::Flag(false)));

        let config: Config =
            serde_yaml::from_str("url: http://x\nverify: /etc/ssl/ca.pem\n").unwrap();
        assert_eq!(
            config.verify,
            Some(TlsVerify::CaBundle("/etc/ssl/ca.pem".to_string()))
        );
    }
}
