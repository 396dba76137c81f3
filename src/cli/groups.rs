//! Contact group commands.

use std::path::Path;

use crate::cli::output;
use crate::core::session::{Method, Session};
use crate::error::Result;

fn scalar(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn member_line(member: &serde_json::Value) -> String {
    let phones = member["phones"]
        .as_array()
        .map(|phones| {
            phones
                .iter()
                .map(|p| p.as_str().unwrap_or_default().to_string())
                .collect::<Vec<_>>()
                .join(", ")
        })
        .unwrap_or_default();

    format!(
        "\t\t{} {} {}",
        scalar(&member["name"]),
        scalar(&member["email"]),
        phones
    )
}

/// List all groups with their members and active members.
pub fn list(config_file: &Path) -> Result<()> {
    let mut session = Session::open(config_file)?;

    let groups = session.get("/groups/")?.json()?;
    for group in groups.as_array().cloned().unwrap_or_default() {
        println!(
            "Name: {} Id: {}",
            scalar(&group["name"]),
            scalar(&group["id"])
        );

        println!("\tMembers:");
        for member_id in group["members"].as_array().cloned().unwrap_or_default() {
            let member = session
                .get(&format!("/groups/member/{}/", scalar(&member_id)))?
                .json()?;
            println!("{}", member_line(&member));
        }

        println!("\tActive:");
        for member_id in group["active"].as_array().cloned().unwrap_or_default() {
            let member = session
                .get(&format!("/groups/member/{}/", scalar(&member_id)))?
                .json()?;
            println!("{}", member_line(&member));
        }
    }
    Ok(())
}

/// Switch the active user of a group.
pub fn switch_active(config_file: &Path, group: &str, user: &str) -> Result<()> {
    let mut session = Session::open(config_file)?;

    output::action("Switching active user .... ");
    session.delete(&format!("/groups/{}/active/", group))?;
    let response = session.execute(Method::Put, &format!("/groups/{}/active/{}/", group, user), None)?;

    if response.body == "1" {
        output::ok("");
    } else {
        output::error("failed to switch");
    }
    Ok(())
}
