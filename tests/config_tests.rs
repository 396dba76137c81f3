//! Tests for configuration loading, creation, and password migration.

mod support;

use std::fs;

use support::ScriptedPrompter;
use tempfile::TempDir;
use zmon_cli::core::config::{Config, TlsVerify};
use zmon_cli::core::credentials::MemoryStore;
use zmon_cli::error::{ConfigError, Error};

#[test]
fn missing_file_is_created_from_prompts() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("zmon-cli.yaml");

    let store = MemoryStore::new();
    let prompter = ScriptedPrompter::new();
    prompter.push_text("https://zmon.example.org/api/v1");
    prompter.push_text("alice");

    let config = Config::load(&path, &store, &prompter).unwrap();
    assert_eq!(config.url, "https://zmon.example.org/api/v1");
    assert_eq!(config.user.as_deref(), Some("alice"));

    let on_disk = fs::read_to_string(&path).unwrap();
    assert!(on_disk.contains("url:"));
    assert!(on_disk.contains("alice"));
    assert!(!on_disk.contains("password"));
}

#[test]
fn password_is_migrated_into_secret_store_once() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("zmon-cli.yaml");
    fs::write(
        &path,
        "url: https://zmon.example.org/api/v1\nuser: alice\npassword: secret\n",
    )
    .unwrap();

    let store = MemoryStore::new();
    let prompter = ScriptedPrompter::new();

    let config = Config::load(&path, &store, &prompter).unwrap();
    assert_eq!(config.password, None);
    assert_eq!(store.secret("zmon-cli", "alice"), Some("secret".to_string()));
    assert_eq!(store.write_count(), 1);

    let rewritten = fs::read_to_string(&path).unwrap();
    assert!(!rewritten.contains("password"));
    assert!(rewritten.contains("alice"));

    // Second load performs no migration and no rewrite.
    let config = Config::load(&path, &store, &prompter).unwrap();
    assert_eq!(config.password, None);
    assert_eq!(store.write_count(), 1);
    assert_eq!(fs::read_to_string(&path).unwrap(), rewritten);
}

#[test]
fn unknown_fields_survive_the_migration_rewrite() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("zmon-cli.yaml");
    fs::write(
        &path,
        "url: https://zmon.example.org\nuser: alice\npassword: secret\nteam: platform\n",
    )
    .unwrap();

    let store = MemoryStore::new();
    Config::load(&path, &store, &ScriptedPrompter::new()).unwrap();

    let rewritten = fs::read_to_string(&path).unwrap();
    assert!(rewritten.contains("team: platform"));
    assert!(!rewritten.contains("password"));
}

#[test]
fn missing_url_fails_with_config_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("zmon-cli.yaml");
    fs::write(&path, "user: alice\n").unwrap();

    let err = Config::load(&path, &MemoryStore::new(), &ScriptedPrompter::new()).unwrap_err();
    assert!(matches!(err, Error::Config(ConfigError::MissingUrl { .. })));
}

#[test]
fn trailing_slash_is_trimmed_from_url() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("zmon-cli.yaml");
    fs::write(&path, "url: https://zmon.example.org/api/v1/\ntoken: abc\n").unwrap();

    let config = Config::load(&path, &MemoryStore::new(), &ScriptedPrompter::new()).unwrap();
    assert_eq!(config.url, "https://zmon.example.org/api/v1");
}

#[test]
fn verify_override_is_parsed() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("zmon-cli.yaml");
    fs::write(&path, "url: https://zmon.example.org\ntoken: abc\nverify: false\n").unwrap();

    let config = Config::load(&path, &MemoryStore::new(), &ScriptedPrompter::new()).unwrap();
    assert_eq!(config.verify, Some(TlsVerify::Flag(false)));
}
