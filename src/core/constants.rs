//! Constants used throughout the ZMON CLI.
//!
//! Centralizes magic strings and configuration values.

/// Default configuration file location (tilde-expanded at startup).
pub const DEFAULT_CONFIG_FILE: &str = "~/.zmon-cli.yaml";

/// Service name under which passwords are cached in the secret store.
pub const SECRET_SERVICE: &str = "zmon-cli";

/// Fields rendered as literal YAML blocks instead of inline scalars.
pub const LITERAL_FIELDS: &[&str] = &["command", "condition", "description"];

/// Display order for document fields. Fields not listed here sort
/// lexically after the listed ones.
pub const FIELD_ORDER: &[&str] = &[
    "id",
    "check_definition_id",
    "type",
    "name",
    "team",
    "owning_team",
    "responsible_team",
    "description",
    "condition",
    "command",
    "interval",
    "entities",
    "entities_exclude",
    "status",
    "last_modified_by",
];
