//! Per-kind document validation.
//!
//! The codec stays generic over "a mapping plus an order list plus a
//! literal-field set"; required-field checks for each document kind live
//! here instead, applied once at the boundary before any network call.

use serde_yaml::Value;

use crate::core::codec::Document;
use crate::error::{FormatError, Result};

fn field(name: &str) -> Value {
    Value::from(name)
}

/// Require a field to be present and non-null.
fn require(document: &Document, name: &'static str) -> Result<()> {
    match document.get(&field(name)) {
        Some(value) if !value.is_null() => Ok(()),
        _ => Err(FormatError::MissingField(name).into()),
    }
}

/// Scalar id (number or string) rendered verbatim for use in a URL path.
fn scalar_id(document: &Document, name: &str) -> Option<String> {
    match document.get(&field(name)) {
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

/// Stamp `last_modified_by` and default `status` to ACTIVE.
fn stamp(document: &mut Document, modified_by: &str) {
    document.insert(field("last_modified_by"), Value::from(modified_by));

    let status = field("status");
    if !document.contains_key(&status) {
        document.insert(status, Value::from("ACTIVE"));
    }
}

/// An alert definition ready to be sent to the API.
#[derive(Debug)]
pub struct AlertDefinition {
    document: Document,
}

impl AlertDefinition {
    /// Validate a document for the create path (`check_definition_id`
    /// required).
    pub fn for_create(mut document: Document, modified_by: &str) -> Result<Self> {
        stamp(&mut document, modified_by);
        require(&document, "check_definition_id")?;
        Ok(Self { document })
    }

    /// Validate a document for the update path (`id` and
    /// `check_definition_id` required). The id may be a number or a
    /// string, as returned by the server.
    pub fn for_update(mut document: Document, modified_by: &str) -> Result<Self> {
        stamp(&mut document, modified_by);
        require(&document, "id")?;
        require(&document, "check_definition_id")?;
        if scalar_id(&document, "id").is_none() {
            return Err(
                FormatError::Malformed("'id' must be a number or a string".to_string()).into(),
            );
        }
        Ok(Self { document })
    }

    pub fn id(&self) -> Option<String> {
        scalar_id(&self.document, "id")
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.document)?)
    }
}

/// A check definition ready to be sent to the API.
#[derive(Debug)]
pub struct CheckDefinition {
    document: Document,
}

impl CheckDefinition {
    pub fn from_document(mut document: Document, modified_by: &str) -> Result<Self> {
        stamp(&mut document, modified_by);

        match document.get(&field("owning_team")) {
            None => return Err(FormatError::MissingField("owning_team").into()),
            Some(value) if value.is_null() || value.as_str() == Some("") => {
                return Err(FormatError::EmptyField("owning_team").into())
            }
            Some(_) => {}
        }

        Ok(Self { document })
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.document)?)
    }
}

/// A monitored entity ready to be pushed to the API.
pub struct Entity {
    document: Document,
}

impl Entity {
    pub fn from_document(document: Document) -> Result<Self> {
        require(&document, "id")?;
        require(&document, "type")?;
        Ok(Self { document })
    }

    /// The entity id, rendered as text for progress output.
    pub fn id(&self) -> String {
        match self.document.get(&field("id")) {
            Some(Value::String(id)) => id.clone(),
            Some(other) => serde_yaml::to_string(other)
                .map(|s| s.trim_end().to_string())
                .unwrap_or_default(),
            None => String::new(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.document)?)
    }
}

/// A dashboard document; `id` decides between create and update.
pub struct Dashboard {
    document: Document,
}

impl Dashboard {
    pub fn from_document(document: Document) -> Result<Self> {
        if document.is_empty() {
            return Err(FormatError::NotAMapping.into());
        }
        Ok(Self { document })
    }

    pub fn id(&self) -> Option<String> {
        scalar_id(&self.document, "id")
    }

    pub fn set_id(&mut self, id: i64) {
        self.document.insert(field("id"), Value::from(id));
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.document)?)
    }
}
