//! Group membership commands.
//!
//! The API signals success for membership mutations with a response body
//! equal to the literal string "1".

use std::path::Path;

use crate::cli::output;
use crate::core::session::{Method, Session};
use crate::error::Result;

fn mutate(
    config_file: &Path,
    method: Method,
    path: &str,
    action: &str,
    failure: &str,
) -> Result<()> {
    let mut session = Session::open(config_file)?;

    output::action(action);
    let response = session.execute(method, path, None)?;

    if response.body == "1" {
        output::ok("");
    } else {
        output::error(failure);
    }
    Ok(())
}

/// Add a member to a group.
pub fn add(config_file: &Path, group: &str, user: &str) -> Result<()> {
    mutate(
        config_file,
        Method::Put,
        &format!("/groups/{}/member/{}/", group, user),
        "Adding user .... ",
        "failed to insert",
    )
}

/// Remove a member from a group.
pub fn remove(config_file: &Path, group: &str, user: &str) -> Result<()> {
    mutate(
        config_file,
        Method::Delete,
        &format!("/groups/{}/member/{}/", group, user),
        "Removing user .... ",
        "failed to remove",
    )
}

/// Add a phone number to a member.
pub fn add_phone(config_file: &Path, email: &str, phone: &str) -> Result<()> {
    mutate(
        config_file,
        Method::Put,
        &format!("/groups/{}/phone/{}/", email, phone),
        "Adding phone .... ",
        "failed to set phone",
    )
}

/// Remove a phone number from a member.
pub fn remove_phone(config_file: &Path, email: &str, phone: &str) -> Result<()> {
    mutate(
        config_file,
        Method::Delete,
        &format!("/groups/{}/phone/{}/", email, phone),
        "Removing phone number .... ",
        "failed to remove phone",
    )
}

/// Change a member's display name.
pub fn change_name(config_file: &Path, email: &str, name: &str) -> Result<()> {
    let mut session = Session::open(config_file)?;

    output::action("Changing user name .... ");
    session.execute(
        Method::Put,
        &format!("/groups/{}/name/{}/", email, name),
        None,
    )?;
    output::ok("");
    Ok(())
}
