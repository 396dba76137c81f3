//! Tests for credential resolution and request execution.

mod support;

use std::sync::Arc;

use support::{ScriptedPrompter, StubTransport};
use zmon_cli::core::config::Config;
use zmon_cli::core::credentials::{
    Credential, CredentialResolver, MemoryStore, SecretStore,
};
use zmon_cli::core::session::{Method, Session};
use zmon_cli::error::{AuthError, ConfigError, Error};

/// Secret store that fails the test when touched.
struct PanicStore;

impl SecretStore for PanicStore {
    fn get(&self, _service: &str, _account: &str) -> zmon_cli::error::Result<Option<String>> {
        panic!("secret store must not be consulted");
    }

    fn set(&self, _service: &str, _account: &str, _secret: &str) -> zmon_cli::error::Result<()> {
        panic!("secret store must not be written");
    }
}

fn token_config() -> Config {
    Config {
        url: "https://zmon.example.org/api/v1".to_string(),
        token: Some("abc".to_string()),
        ..Config::default()
    }
}

fn user_config() -> Config {
    Config {
        url: "https://zmon.example.org/api/v1".to_string(),
        user: Some("alice".to_string()),
        ..Config::default()
    }
}

#[test]
fn token_credential_skips_secret_store() {
    let resolver = CredentialResolver::new(Arc::new(PanicStore), Arc::new(ScriptedPrompter::new()));

    let credential = resolver.resolve(&token_config()).unwrap();
    assert_eq!(credential, Credential::Token("abc".to_string()));
}

#[test]
fn missing_token_and_user_is_a_config_error() {
    let resolver =
        CredentialResolver::new(Arc::new(MemoryStore::new()), Arc::new(ScriptedPrompter::new()));

    let config = Config {
        url: "https://zmon.example.org".to_string(),
        ..Config::default()
    };
    let err = resolver.resolve(&config).unwrap_err();
    assert!(matches!(err, Error::Config(ConfigError::NoCredentials)));
}

#[test]
fn cached_password_avoids_prompting() {
    let store = Arc::new(MemoryStore::with_secret("zmon-cli", "alice", "s3cret"));
    let prompter = Arc::new(ScriptedPrompter::new());
    let resolver = CredentialResolver::new(store, prompter.clone());

    let credential = resolver.resolve(&user_config()).unwrap();
    assert_eq!(
        credential,
        Credential::Basic {
            user: "alice".to_string(),
            password: "s3cret".to_string(),
        }
    );
    assert!(prompter.password_prompts().is_empty());
}

#[test]
fn uncached_password_is_prompted_and_cached() {
    let store = Arc::new(MemoryStore::new());
    let prompter = Arc::new(ScriptedPrompter::new());
    prompter.push_password("hunter2");
    let resolver = CredentialResolver::new(store.clone(), prompter.clone());

    let credential = resolver.resolve(&user_config()).unwrap();
    assert_eq!(
        credential,
        Credential::Basic {
            user: "alice".to_string(),
            password: "hunter2".to_string(),
        }
    );
    assert_eq!(prompter.password_prompts(), vec!["alice".to_string()]);
    assert_eq!(store.secret("zmon-cli", "alice"), Some("hunter2".to_string()));
}

#[test]
fn retries_once_on_401_and_returns_second_response() {
    let store = Arc::new(MemoryStore::with_secret("zmon-cli", "alice", "old"));
    let prompter = Arc::new(ScriptedPrompter::new());
    prompter.push_password("new");
    let transport = Arc::new(StubTransport::new(&[(401, ""), (200, "done")]));

    let resolver = CredentialResolver::new(store.clone(), prompter.clone());
    let mut session = Session::new(user_config(), resolver, transport.clone());

    let response = session.execute(Method::Get, "/status", None).unwrap();
    assert_eq!(response.status, 200);
    assert_eq!(response.body, "done");

    // Transport called twice: once with the cached password, once with
    // the re-prompted one.
    let calls = transport.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(
        calls[0].2,
        Credential::Basic {
            user: "alice".to_string(),
            password: "old".to_string(),
        }
    );
    assert_eq!(
        calls[1].2,
        Credential::Basic {
            user: "alice".to_string(),
            password: "new".to_string(),
        }
    );

    // Re-prompt bypassed the cache and overwrote it.
    assert_eq!(prompter.password_prompts(), vec!["alice".to_string()]);
    assert_eq!(store.secret("zmon-cli", "alice"), Some("new".to_string()));
}

#[test]
fn second_401_is_fatal() {
    let store = Arc::new(MemoryStore::with_secret("zmon-cli", "alice", "old"));
    let prompter = Arc::new(ScriptedPrompter::new());
    prompter.push_password("still-wrong");
    let transport = Arc::new(StubTransport::new(&[(401, ""), (401, "")]));

    let resolver = CredentialResolver::new(store, prompter);
    let mut session = Session::new(user_config(), resolver, transport.clone());

    let err = session.execute(Method::Get, "/status", None).unwrap_err();
    assert!(matches!(err, Error::Auth(AuthError::Unauthorized)));
    assert_eq!(transport.call_count(), 2);
}

#[test]
fn rejected_token_cannot_be_reprompted() {
    let transport = Arc::new(StubTransport::new(&[(401, "")]));
    let resolver =
        CredentialResolver::new(Arc::new(PanicStore), Arc::new(ScriptedPrompter::new()));
    let mut session = Session::new(token_config(), resolver, transport.clone());

    let err = session.execute(Method::Get, "/status", None).unwrap_err();
    assert!(matches!(err, Error::Auth(AuthError::TokenRejected)));
    assert_eq!(transport.call_count(), 1);
}

#[test]
fn non_401_failure_carries_status_and_body_without_retry() {
    let transport = Arc::new(StubTransport::new(&[(403, "forbidden")]));
    let resolver =
        CredentialResolver::new(Arc::new(PanicStore), Arc::new(ScriptedPrompter::new()));
    let mut session = Session::new(token_config(), resolver, transport.clone());

    let err = session.execute(Method::Get, "/entities/", None).unwrap_err();
    match err {
        Error::Http(e) => {
            assert_eq!(e.status, 403);
            assert_eq!(e.body, "forbidden");
        }
        other => panic!("expected HttpError, got {:?}", other),
    }
    assert_eq!(transport.call_count(), 1);
}

#[test]
fn url_is_config_url_plus_path() {
    let transport = Arc::new(StubTransport::new(&[(200, "{}")]));
    let resolver =
        CredentialResolver::new(Arc::new(PanicStore), Arc::new(ScriptedPrompter::new()));
    let mut session = Session::new(token_config(), resolver, transport.clone());

    session.execute(Method::Get, "/status", None).unwrap();
    assert_eq!(
        transport.calls()[0].1,
        "https://zmon.example.org/api/v1/status"
    );
}
