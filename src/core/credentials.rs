//! Credential resolution.
//!
//! A configured bearer token always wins and never touches the secret
//! store. Otherwise the password for the configured user is looked up in
//! the secret store, falling back to a hidden interactive prompt whose
//! answer is cached for subsequent runs.

use std::sync::{Arc, Mutex};

use dialoguer::{Confirm, Input, Password};
use tracing::debug;

use crate::core::config::Config;
use crate::core::constants::SECRET_SERVICE;
use crate::error::{AuthError, ConfigError, Error, Result};

/// A resolved credential for the remote API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credential {
    /// Bearer token presented in an `Authorization` header.
    Token(String),
    /// Username/password pair presented via HTTP Basic auth.
    Basic { user: String, password: String },
}

/// Persistent secret store addressed by (service, account).
pub trait SecretStore {
    fn get(&self, service: &str, account: &str) -> Result<Option<String>>;
    fn set(&self, service: &str, account: &str, secret: &str) -> Result<()>;
}

/// Interactive prompting capability, kept behind a trait so tests can
/// script answers instead of driving a real terminal.
pub trait Prompter {
    fn prompt_text(&self, label: &str, default: Option<&str>) -> Result<String>;
    fn prompt_password(&self, user: &str) -> Result<String>;
    fn confirm(&self, label: &str) -> Result<bool>;
}

/// Secret store backed by the OS keyring.
pub struct KeyringStore;

fn store_error(e: keyring::Error) -> Error {
    AuthError::SecretStore(e.to_string()).into()
}

impl SecretStore for KeyringStore {
    fn get(&self, service: &str, account: &str) -> Result<Option<String>> {
        let entry = keyring::Entry::new(service, account).map_err(store_error)?;
        match entry.get_password() {
            Ok(password) => Ok(Some(password)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(store_error(e)),
        }
    }

    fn set(&self, service: &str, account: &str, secret: &str) -> Result<()> {
        let entry = keyring::Entry::new(service, account).map_err(store_error)?;
        entry.set_password(secret).map_err(store_error)
    }
}

/// In-memory secret store for tests.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<std::collections::BTreeMap<(String, String), String>>,
    writes: Mutex<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_secret(service: &str, account: &str, secret: &str) -> Self {
        let store = Self::default();
        store
            .entries
            .lock()
            .unwrap()
            .insert((service.to_string(), account.to_string()), secret.to_string());
        store
    }

    /// Secret currently held for (service, account), if any.
    pub fn secret(&self, service: &str, account: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap()
            .get(&(service.to_string(), account.to_string()))
            .cloned()
    }

    /// Number of `set` calls since creation.
    pub fn write_count(&self) -> usize {
        *self.writes.lock().unwrap()
    }
}

impl SecretStore for MemoryStore {
    fn get(&self, service: &str, account: &str) -> Result<Option<String>> {
        Ok(self.secret(service, account))
    }

    fn set(&self, service: &str, account: &str, secret: &str) -> Result<()> {
        self.entries
            .lock()
            .unwrap()
            .insert((service.to_string(), account.to_string()), secret.to_string());
        *self.writes.lock().unwrap() += 1;
        Ok(())
    }
}

/// Prompter backed by the terminal via dialoguer.
pub struct TermPrompter;

/// Refuse to prompt when stdin is not a terminal, instead of hanging on
/// piped input.
fn ensure_terminal() -> Result<()> {
    use std::io::IsTerminal;

    if std::io::stdin().is_terminal() {
        Ok(())
    } else {
        Err(std::io::Error::new(
            std::io::ErrorKind::Other,
            "interactive prompt requires a terminal",
        )
        .into())
    }
}

impl Prompter for TermPrompter {
    fn prompt_text(&self, label: &str, default: Option<&str>) -> Result<String> {
        ensure_terminal()?;
        let mut input = Input::<String>::new().with_prompt(label);
        if let Some(default) = default {
            input = input.default(default.to_string());
        }
        Ok(input.interact_text()?)
    }

    fn prompt_password(&self, user: &str) -> Result<String> {
        ensure_terminal()?;
        Ok(Password::new()
            .with_prompt(format!("Password for {}", user))
            .interact()?)
    }

    fn confirm(&self, label: &str) -> Result<bool> {
        ensure_terminal()?;
        Ok(Confirm::new()
            .with_prompt(label)
            .default(false)
            .interact()?)
    }
}

/// Resolves credentials from the config, the secret store, and the user.
pub struct CredentialResolver {
    store: Arc<dyn SecretStore>,
    prompter: Arc<dyn Prompter>,
}

impl CredentialResolver {
    pub fn new(store: Arc<dyn SecretStore>, prompter: Arc<dyn Prompter>) -> Self {
        Self { store, prompter }
    }

    /// Resolve a credential for the configured user.
    ///
    /// A configured token is returned as-is without consulting the secret
    /// store. With neither token nor user configured this is a
    /// `ConfigError`.
    pub fn resolve(&self, config: &Config) -> Result<Credential> {
        if let Some(token) = &config.token {
            debug!("using configured token");
            return Ok(Credential::Token(token.clone()));
        }

        let user = match &config.user {
            Some(user) => user,
            None => return Err(ConfigError::NoCredentials.into()),
        };

        let password = match self.store.get(SECRET_SERVICE, user)? {
            Some(password) => {
                debug!(user = %user, "password found in secret store");
                password
            }
            None => self.query_password(user)?,
        };

        Ok(Credential::Basic {
            user: user.clone(),
            password,
        })
    }

    /// Re-prompt for the password after a 401, bypassing the secret-store
    /// cache and overwriting the cached value.
    pub fn reprompt(&self, config: &Config) -> Result<Credential> {
        let user = match (&config.token, &config.user) {
            (Some(_), _) | (_, None) => return Err(AuthError::TokenRejected.into()),
            (None, Some(user)) => user,
        };

        let password = self.query_password(user)?;
        Ok(Credential::Basic {
            user: user.clone(),
            password,
        })
    }

    fn query_password(&self, user: &str) -> Result<String> {
        let password = self.prompter.prompt_password(user)?;
        self.store.set(SECRET_SERVICE, user, &password)?;
        Ok(password)
    }
}
