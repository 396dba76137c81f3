//! Error types for the ZMON CLI.
//!
//! Errors are grouped by concern: configuration, authentication, HTTP
//! responses, and document format. `main` maps each group to a distinct
//! exit code.

use thiserror::Error;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("authentication error: {0}")]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Http(#[from] HttpError),

    #[error("invalid definition: {0}")]
    Format(#[from] FormatError),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration file problems.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("key 'url' is missing in {path}")]
    MissingUrl { path: String },

    #[error("no credentials configured: set 'token' or 'user' in the config file")]
    NoCredentials,

    #[error("cannot read {path}: {source}")]
    ReadFailed {
        path: String,
        source: std::io::Error,
    },

    #[error("cannot write {path}: {source}")]
    WriteFailed {
        path: String,
        source: std::io::Error,
    },

    #[error("malformed configuration in {path}: {source}")]
    Malformed {
        path: String,
        source: serde_yaml::Error,
    },
}

/// Credential resolution and authorization failures.
#[derive(Error, Debug)]
pub enum AuthError {
    /// The server rejected a bearer token. There is no password to
    /// re-prompt for, so this is fatal.
    #[error("server rejected the configured token (HTTP 401)")]
    TokenRejected,

    /// A second 401 after re-prompting for the password.
    #[error("authorization failed after retry (HTTP 401)")]
    Unauthorized,

    #[error("secret store unavailable: {0}")]
    SecretStore(String),
}

/// A non-2xx, non-retryable HTTP response.
#[derive(Error, Debug)]
#[error("server returned HTTP {status}: {body}")]
pub struct HttpError {
    pub status: u16,
    pub body: String,
}

/// Malformed or incomplete input documents, detected before any
/// network call is made.
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("'{0}' missing in definition")]
    MissingField(&'static str),

    #[error("'{0}' is empty in definition")]
    EmptyField(&'static str),

    #[error("document must be a mapping")]
    NotAMapping,

    #[error("malformed document: {0}")]
    Malformed(String),
}

impl Error {
    /// Exit code for this error kind.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Config(_) => 2,
            Error::Auth(_) => 3,
            Error::Http(_) => 4,
            Error::Format(_) => 5,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
