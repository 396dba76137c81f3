//! Alert definition commands.

use std::path::Path;

use dialoguer::Input;
use tracing::info;

use crate::cli::output;
use crate::core::codec;
use crate::core::document::AlertDefinition;
use crate::core::session::Session;
use crate::error::{FormatError, Result};

/// Initialize a new alert definition YAML file.
///
/// The template intentionally contains empty placeholder fields for the
/// user to fill in.
pub fn init(file: &str) -> Result<()> {
    let name: String = Input::new()
        .with_prompt("Alert name")
        .default("Example Alert".to_string())
        .interact_text()?;
    let check_id: String = Input::<String>::new()
        .with_prompt("Check ID")
        .interact_text()?;
    let team: String = Input::new()
        .with_prompt("(Responsible-) Team")
        .default("Example Team".to_string())
        .interact_text()?;

    let template = format!(
        r#"check_definition_id: {check_id}
id:
status: ACTIVE
name: "{name}"
description: "Example Alert Description"
team: "{team}"
responsible_team: "{team}"
condition: |
  >100
entities:
entities_exclude:
priority: 2
tags:
parent_id:
parameters:
"#
    );

    std::fs::write(file, template)?;
    output::success(&format!("created {}", file));
    Ok(())
}

/// Get a single alert definition and print it as YAML.
pub fn get(config_file: &Path, alert_id: i64) -> Result<()> {
    let mut session = Session::open(config_file)?;
    let response = session.get(&format!("/alert-definitions/{}", alert_id))?;

    let mut document = codec::decode(&response.body)?;
    codec::strip_nulls(&mut document);
    print!("{}", codec::encode(&document)?);
    Ok(())
}

/// Create a single alert definition.
pub fn create(config_file: &Path, file: &str) -> Result<()> {
    let mut session = Session::open(config_file)?;

    let contents = std::fs::read_to_string(file)?;
    let document = codec::decode(&contents)?;
    let alert = AlertDefinition::for_create(document, session.config().user_or_unknown())?;

    info!("creating alert definition from {}", file);
    output::action("Creating alert definition.. ");

    let response = session.post("/alert-definitions", &alert.to_json()?)?;
    let id = response.json()?["id"].to_string();
    output::ok(&output::link(&format!(
        "{}#/alert-details/{}",
        session.config().base_url(),
        id
    )));
    Ok(())
}

/// Update a single alert definition.
pub fn update(config_file: &Path, file: &str) -> Result<()> {
    let mut session = Session::open(config_file)?;

    let contents = std::fs::read_to_string(file)?;
    let document = codec::decode(&contents)?;
    let alert = AlertDefinition::for_update(document, session.config().user_or_unknown())?;

    let alert_id = alert.id().ok_or(FormatError::MissingField("id"))?;

    info!("updating alert definition {}", alert_id);
    output::action("Updating alert definition.. ");

    let response = session.put(&format!("/alert-definitions/{}", alert_id), &alert.to_json()?)?;
    let id = response.json()?["id"].to_string();
    output::ok(&output::link(&format!(
        "{}#/alert-details/{}",
        session.config().base_url(),
        id
    )));
    Ok(())
}
