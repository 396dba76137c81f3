//! Check definition commands.

use std::path::Path;

use dialoguer::Input;
use serde_yaml::{Mapping, Value};
use tracing::info;

use crate::cli::output;
use crate::core::codec;
use crate::core::document::CheckDefinition;
use crate::core::session::Session;
use crate::error::Result;

/// Initialize a new check definition YAML file.
pub fn init(file: &str) -> Result<()> {
    let name: String = Input::new()
        .with_prompt("Check definition name")
        .default("Example Check".to_string())
        .interact_text()?;
    let owning_team: String = Input::new()
        .with_prompt("Team owning this check definition (i.e. your team)")
        .default("Example Team".to_string())
        .interact_text()?;

    let mut entity = Mapping::new();
    entity.insert(Value::from("type"), Value::from("GLOBAL"));

    let mut document = Mapping::new();
    document.insert(Value::from("name"), Value::from(name));
    document.insert(Value::from("owning_team"), Value::from(owning_team));
    document.insert(
        Value::from("description"),
        Value::from(
            "Example ZMON check definition which returns a HTTP status code.\n\
             You can write multiple lines here, including unicode ☺",
        ),
    );
    document.insert(
        Value::from("command"),
        Value::from(
            "# GET request on example.org and return HTTP status code\n\
             http('http://example.org/', timeout=5).code()",
        ),
    );
    document.insert(Value::from("interval"), Value::from(60));
    document.insert(
        Value::from("entities"),
        Value::Sequence(vec![Value::Mapping(entity)]),
    );
    document.insert(Value::from("status"), Value::from("ACTIVE"));

    std::fs::write(file, codec::encode(&document)?)?;
    output::success(&format!("created {}", file));
    Ok(())
}

/// Get a single check definition and print it as YAML.
pub fn get(config_file: &Path, check_id: i64) -> Result<()> {
    let mut session = Session::open(config_file)?;
    print_check(&mut session, check_id)
}

/// Fetch and print one check definition. An empty body counts as "not
/// found"; HTTP failures propagate to the caller, which reports them.
pub fn print_check(session: &mut Session, check_id: i64) -> Result<()> {
    let response = session.get(&format!("/check-definitions/{}", check_id))?;
    if response.body.is_empty() {
        output::action(&format!("retrieving check {} ... ", check_id));
        output::error("not found");
        return Ok(());
    }

    let mut document = codec::decode(&response.body)?;
    codec::strip_nulls(&mut document);
    print!("{}", codec::encode(&document)?);
    Ok(())
}

/// Update a single check definition.
pub fn update(config_file: &Path, file: &str) -> Result<()> {
    let mut session = Session::open(config_file)?;

    let contents = std::fs::read_to_string(file)?;
    let document = codec::decode(&contents)?;
    let check = CheckDefinition::from_document(document, session.config().user_or_unknown())?;

    info!("updating check definition from {}", file);
    output::action("Updating check definition... ");

    let response = session.post("/check-definitions", &check.to_json()?)?;
    let id = response.json()?["id"].to_string();
    output::ok(&output::link(&format!(
        "{}#/check-definitions/view/{}",
        session.config().base_url(),
        id
    )));
    Ok(())
}
