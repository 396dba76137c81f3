//! Command-line interface.

pub mod alerts;
pub mod checks;
pub mod completions;
pub mod configure;
pub mod dashboard;
pub mod entities;
pub mod groups;
pub mod members;
pub mod output;
pub mod status;

use std::path::Path;

use clap::{Parser, Subcommand};

use crate::core::constants::DEFAULT_CONFIG_FILE;

/// ZMON command line client.
#[derive(Parser)]
#[command(
    name = "zmon",
    about = "Command line client for the ZMON monitoring service",
    version
)]
pub struct Cli {
    /// Use alternative config file
    #[arg(
        short = 'c',
        long,
        global = true,
        value_name = "PATH",
        default_value = DEFAULT_CONFIG_FILE
    )]
    pub config_file: String,

    /// Verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Write the config file (base URL and optional token)
    Configure,

    /// Manage alert definitions
    #[command(name = "alert-definitions", visible_alias = "alert")]
    AlertDefinitions {
        #[command(subcommand)]
        action: AlertAction,
    },

    /// Manage check definitions
    #[command(name = "check-definitions", visible_alias = "check")]
    CheckDefinitions {
        #[command(subcommand)]
        action: CheckAction,
    },

    /// Manage entities (lists all entities without a subcommand)
    Entities {
        #[command(subcommand)]
        action: Option<EntityAction>,

        /// Use alternative output format
        #[arg(short = 'o', long, value_enum, default_value = "text", global = true)]
        output: OutputFormat,
    },

    /// Manage dashboards
    Dashboard {
        #[command(subcommand)]
        action: DashboardAction,
    },

    /// Manage contact groups (lists all groups without a subcommand)
    Groups {
        #[command(subcommand)]
        action: Option<GroupAction>,
    },

    /// Manage group membership
    Members {
        #[command(subcommand)]
        action: MemberAction,
    },

    /// Check system status
    Status,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Alert definition subcommands.
#[derive(Subcommand)]
pub enum AlertAction {
    /// Initialize a new alert definition YAML file
    Init {
        /// Output file path
        file: String,
    },
    /// Get a single alert definition
    Get {
        /// Alert definition id
        alert_id: i64,
    },
    /// Create a single alert definition
    Create {
        /// YAML file with the alert definition
        file: String,
    },
    /// Update a single alert definition
    Update {
        /// YAML file with the alert definition
        file: String,
    },
}

/// Check definition subcommands.
#[derive(Subcommand)]
pub enum CheckAction {
    /// Initialize a new check definition YAML file
    Init {
        /// Output file path
        file: String,
    },
    /// Get a single check definition
    Get {
        /// Check definition id
        check_id: i64,
    },
    /// Update a single check definition
    Update {
        /// YAML file with the check definition
        file: String,
    },
}

/// Entity subcommands.
#[derive(Subcommand)]
pub enum EntityAction {
    /// Push one or more entities (file path or inline JSON)
    Push {
        /// YAML/JSON file, or an inline JSON document
        entity: String,
    },
    /// Get a single entity by id
    Get {
        /// Entity id
        entity_id: String,
    },
    /// Delete a single entity by id
    Delete {
        /// Entity id
        entity_id: String,
    },
    /// List entities filtered by a certain key
    Filter {
        /// Entity attribute to filter on
        key: String,
        /// Required attribute value
        value: String,
    },
}

/// Dashboard subcommands.
#[derive(Subcommand)]
pub enum DashboardAction {
    /// Get a single dashboard
    Get {
        /// Dashboard id
        dashboard_id: i64,
    },
    /// Create or update a dashboard from a YAML file
    Update {
        /// YAML file with the dashboard
        file: String,
    },
}

/// Contact group subcommands.
#[derive(Subcommand)]
pub enum GroupAction {
    /// Switch the active user of a group
    Switch {
        /// Group name
        group: String,
        /// User name
        user: String,
    },
}

/// Group member subcommands.
#[derive(Subcommand)]
pub enum MemberAction {
    /// Add a member to a group
    Add {
        /// Group name
        group: String,
        /// User name
        user: String,
    },
    /// Remove a member from a group
    Remove {
        /// Group name
        group: String,
        /// User name
        user: String,
    },
    /// Add a phone number to a member
    AddPhone {
        /// Member email
        email: String,
        /// Phone number
        phone: String,
    },
    /// Remove a phone number from a member
    RemovePhone {
        /// Member email
        email: String,
        /// Phone number
        phone: String,
    },
    /// Change a member's display name
    ChangeName {
        /// Member email
        email: String,
        /// New name
        name: String,
    },
}

/// Output formats for entity listings.
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Tsv,
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub fn execute(command: Command, config_file: &Path) -> crate::error::Result<()> {
    use Command::*;

    match command {
        Configure => configure::execute(config_file),
        AlertDefinitions { action } => match action {
            AlertAction::Init { file } => alerts::init(&file),
            AlertAction::Get { alert_id } => alerts::get(config_file, alert_id),
            AlertAction::Create { file } => alerts::create(config_file, &file),
            AlertAction::Update { file } => alerts::update(config_file, &file),
        },
        CheckDefinitions { action } => match action {
            CheckAction::Init { file } => checks::init(&file),
            CheckAction::Get { check_id } => checks::get(config_file, check_id),
            CheckAction::Update { file } => checks::update(config_file, &file),
        },
        Entities { action, output } => match action {
            None => entities::list(config_file, output, None),
            Some(EntityAction::Filter { key, value }) => {
                entities::list(config_file, output, Some((key, value)))
            }
            Some(EntityAction::Push { entity }) => entities::push(config_file, &entity),
            Some(EntityAction::Get { entity_id }) => entities::get(config_file, &entity_id),
            Some(EntityAction::Delete { entity_id }) => entities::delete(config_file, &entity_id),
        },
        Dashboard { action } => match action {
            DashboardAction::Get { dashboard_id } => dashboard::get(config_file, dashboard_id),
            DashboardAction::Update { file } => dashboard::update(config_file, &file),
        },
        Groups { action } => match action {
            None => groups::list(config_file),
            Some(GroupAction::Switch { group, user }) => {
                groups::switch_active(config_file, &group, &user)
            }
        },
        Members { action } => match action {
            MemberAction::Add { group, user } => members::add(config_file, &group, &user),
            MemberAction::Remove { group, user } => members::remove(config_file, &group, &user),
            MemberAction::AddPhone { email, phone } => {
                members::add_phone(config_file, &email, &phone)
            }
            MemberAction::RemovePhone { email, phone } => {
                members::remove_phone(config_file, &email, &phone)
            }
            MemberAction::ChangeName { email, name } => {
                members::change_name(config_file, &email, &name)
            }
        },
        Status => status::execute(config_file),
        Completions { shell } => completions::execute(shell),
    }
}
