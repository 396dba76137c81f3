//! Authenticated request execution.
//!
//! A [`Session`] is built once per invocation and holds the loaded
//! config, the lazily resolved credential, and the HTTP transport. On a
//! 401 it re-prompts for the password and retries exactly once; a second
//! 401 is fatal. Any other non-2xx response is an [`HttpError`].

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use reqwest::header::CONTENT_TYPE;
use tracing::{debug, warn};

use crate::core::config::{Config, TlsVerify};
use crate::core::credentials::{
    Credential, CredentialResolver, KeyringStore, Prompter, SecretStore, TermPrompter,
};
use crate::error::{AuthError, HttpError, Result};

/// HTTP methods used by the ZMON API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Put,
    Post,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Method::Get => "GET",
            Method::Put => "PUT",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        };
        f.write_str(name)
    }
}

/// Status and body of an HTTP response.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub body: String,
}

impl Response {
    /// Parse the body as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// Wire-level transport, kept behind a trait so tests can script
/// responses without a network.
pub trait Transport {
    fn send(
        &self,
        method: Method,
        url: &str,
        credential: &Credential,
        body: Option<&str>,
    ) -> Result<Response>;
}

/// Transport backed by a blocking reqwest client.
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    /// Build a client honoring the TLS verification override from the
    /// config. Disabling verification is an explicit, user-controlled
    /// trust downgrade, never the default.
    pub fn new(verify: Option<&TlsVerify>) -> Result<Self> {
        let mut builder = reqwest::blocking::Client::builder();

        match verify {
            None | Some(TlsVerify::Flag(true)) => {}
            Some(TlsVerify::Flag(false)) => {
                warn!("TLS certificate verification disabled by config");
                builder = builder.danger_accept_invalid_certs(true);
            }
            Some(TlsVerify::CaBundle(path)) => {
                let pem = std::fs::read(path)?;
                builder = builder.add_root_certificate(reqwest::Certificate::from_pem(&pem)?);
            }
        }

        Ok(Self {
            client: builder.build()?,
        })
    }
}

impl Transport for HttpTransport {
    fn send(
        &self,
        method: Method,
        url: &str,
        credential: &Credential,
        body: Option<&str>,
    ) -> Result<Response> {
        let mut request = match method {
            Method::Get => self.client.get(url),
            Method::Put => self.client.put(url),
            Method::Post => self.client.post(url),
            Method::Delete => self.client.delete(url),
        };

        request = match credential {
            Credential::Token(token) => request.bearer_auth(token),
            Credential::Basic { user, password } => request.basic_auth(user, Some(password)),
        };

        if let Some(body) = body {
            request = request
                .header(CONTENT_TYPE, "application/json")
                .body(body.to_string());
        }

        let response = request.send()?;
        Ok(Response {
            status: response.status().as_u16(),
            body: response.text()?,
        })
    }
}

/// An authenticated session against the ZMON API.
pub struct Session {
    config: Config,
    resolver: CredentialResolver,
    transport: Arc<dyn Transport>,
    credential: Option<Credential>,
}

impl Session {
    /// Open a session with the real keyring, terminal prompter, and HTTP
    /// transport. Loads (or interactively creates) the config file.
    pub fn open(config_file: &Path) -> Result<Self> {
        let store: Arc<dyn SecretStore> = Arc::new(KeyringStore);
        let prompter: Arc<dyn Prompter> = Arc::new(TermPrompter);

        let config = Config::load(config_file, store.as_ref(), prompter.as_ref())?;
        let transport = Arc::new(HttpTransport::new(config.verify.as_ref())?);

        Ok(Self::new(
            config,
            CredentialResolver::new(store, prompter),
            transport,
        ))
    }

    /// Assemble a session from parts; used by tests with fakes.
    pub fn new(
        config: Config,
        resolver: CredentialResolver,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            config,
            resolver,
            transport,
            credential: None,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Execute a request against `config.url + path`.
    ///
    /// 401 triggers exactly one credential re-prompt and retry; a second
    /// 401 propagates as an auth failure. Other non-2xx statuses raise an
    /// [`HttpError`] carrying status and body. 2xx responses are returned
    /// unmodified.
    pub fn execute(&mut self, method: Method, path: &str, body: Option<&str>) -> Result<Response> {
        let url = format!("{}{}", self.config.url, path);
        let mut retried = false;

        loop {
            let credential = match &self.credential {
                Some(credential) => credential.clone(),
                None => {
                    let credential = self.resolver.resolve(&self.config)?;
                    self.credential = Some(credential.clone());
                    credential
                }
            };

            debug!(%method, url = %url, "sending request");
            let response = self.transport.send(method, &url, &credential, body)?;
            debug!(status = response.status, "response received");

            if response.status == 401 {
                if retried {
                    return Err(AuthError::Unauthorized.into());
                }
                warn!("authorization failed, re-prompting for credentials");
                retried = true;
                self.credential = Some(self.resolver.reprompt(&self.config)?);
                continue;
            }

            if !(200..300).contains(&response.status) {
                return Err(HttpError {
                    status: response.status,
                    body: response.body,
                }
                .into());
            }

            return Ok(response);
        }
    }

    pub fn get(&mut self, path: &str) -> Result<Response> {
        self.execute(Method::Get, path, None)
    }

    pub fn put(&mut self, path: &str, body: &str) -> Result<Response> {
        self.execute(Method::Put, path, Some(body))
    }

    pub fn post(&mut self, path: &str, body: &str) -> Result<Response> {
        self.execute(Method::Post, path, Some(body))
    }

    pub fn delete(&mut self, path: &str) -> Result<Response> {
        self.execute(Method::Delete, path, None)
    }
}
