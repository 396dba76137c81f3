//! Entity commands.

use std::path::Path;

use serde_yaml::Value as YamlValue;
use tracing::info;
use url::form_urlencoded;

use crate::cli::output;
use crate::cli::OutputFormat;
use crate::core::codec;
use crate::core::document::Entity;
use crate::core::session::Session;
use crate::error::{Error, Result};

/// Percent-encode a value for use in a path or query
/// (application/x-www-form-urlencoded, space becomes `+`).
fn urlencode(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

fn display_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// List entities, optionally filtered by one attribute.
pub fn list(config_file: &Path, format: OutputFormat, filter: Option<(String, String)>) -> Result<()> {
    let mut session = Session::open(config_file)?;

    let path = match &filter {
        Some((key, value)) => {
            let query = serde_json::json!({ key: value }).to_string();
            format!("/entities/?query={}", urlencode(&query))
        }
        None => "/entities/".to_string(),
    };

    let entities = session.get(&path)?.json()?;
    let items = entities.as_array().cloned().unwrap_or_default();

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    let mut rows: Vec<Vec<String>> = items
        .iter()
        .filter_map(|entity| entity.as_object())
        .map(|entity| {
            let id = entity.get("id").map(display_value).unwrap_or_default();
            let entity_type = entity.get("type").map(display_value).unwrap_or_default();

            let mut keys: Vec<&String> = entity
                .keys()
                .filter(|k| *k != "id" && *k != "type")
                .collect();
            keys.sort();
            let data = keys
                .into_iter()
                .map(|k| format!("{}={}", k, display_value(&entity[k])))
                .collect::<Vec<_>>()
                .join(" ");

            vec![id, entity_type, data]
        })
        .collect();
    rows.sort();

    match format {
        OutputFormat::Tsv => output::print_tsv(&["id", "type", "data"], &rows),
        _ => output::print_table(&["id", "type", "data"], &rows),
    }
    Ok(())
}

/// Push one or more entities from a file or an inline JSON document.
pub fn push(config_file: &Path, entity: &str) -> Result<()> {
    let mut session = Session::open(config_file)?;

    let is_file = (entity.ends_with(".json") || entity.ends_with(".yaml"))
        && Path::new(entity).exists();
    let contents = if is_file {
        std::fs::read_to_string(entity)?
    } else {
        // JSON is a subset of YAML, so the same parser handles both
        entity.to_string()
    };

    let parsed = codec::parse(&contents)?;
    let documents = match parsed {
        YamlValue::Sequence(items) => items,
        single => vec![single],
    };

    for document in documents {
        let mapping = match document {
            YamlValue::Mapping(mapping) => mapping,
            _ => {
                output::error("entity must be a mapping");
                continue;
            }
        };

        let entity = match Entity::from_document(mapping) {
            Ok(entity) => entity,
            Err(e) => {
                output::error(&e.to_string());
                continue;
            }
        };

        info!("pushing entity {}", entity.id());
        output::action(&format!("creating entity... {} ", entity.id()));

        match session.put("/entities/", &entity.to_json()?) {
            Ok(_) => output::ok(""),
            Err(Error::Http(e)) => output::error(&e.to_string()),
            Err(e) => return Err(e),
        }
    }
    Ok(())
}

/// Get a single entity by id and print it as YAML.
pub fn get(config_file: &Path, entity_id: &str) -> Result<()> {
    let mut session = Session::open(config_file)?;

    match session.get(&format!("/entities/{}/", urlencode(entity_id))) {
        Ok(response) if !response.body.is_empty() => {
            let document = codec::decode(&response.body)?;
            print!("{}", codec::encode(&document)?);
            Ok(())
        }
        Ok(_) | Err(Error::Http(_)) => {
            output::action(&format!("getting entity {}... ", entity_id));
            output::error("not found");
            Ok(())
        }
        Err(e) => Err(e),
    }
}

/// Delete a single entity by id.
///
/// The API signals success with a response body equal to the literal
/// string "1"; anything else means the delete did not happen.
pub fn delete(config_file: &Path, entity_id: &str) -> Result<()> {
    let mut session = Session::open(config_file)?;

    output::action(&format!("delete entity... {} ", entity_id));
    let response = session.delete(&format!("/entities/?id={}", urlencode(entity_id)))?;

    if response.body == "1" {
        output::ok("");
    } else {
        output::error("Delete unsuccessful");
    }
    Ok(())
}
