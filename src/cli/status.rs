//! System status overview command.

use std::path::Path;

use chrono::Utc;

use crate::cli::output;
use crate::core::session::Session;
use crate::error::Result;

fn scalar(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Render a unix timestamp as a coarse "time ago" string.
fn time_ago(epoch_seconds: f64) -> String {
    let delta = (Utc::now().timestamp() - epoch_seconds as i64).max(0);
    if delta < 60 {
        format!("{}s ago", delta)
    } else if delta < 3600 {
        format!("{}m ago", delta / 60)
    } else if delta < 86400 {
        format!("{}h ago", delta / 3600)
    } else {
        format!("{}d ago", delta / 86400)
    }
}

/// Show workers and queues of the ZMON backend.
pub fn execute(config_file: &Path) -> Result<()> {
    let mut session = Session::open(config_file)?;
    let data = session.get("/status")?.json()?;

    output::header("Workers:");
    let mut workers = data["workers"].as_array().cloned().unwrap_or_default();
    workers.sort_by_key(|w| w["name"].as_str().unwrap_or_default().to_string());

    let rows: Vec<Vec<String>> = workers
        .iter()
        .map(|worker| {
            vec![
                worker["name"].as_str().unwrap_or_default().to_string(),
                scalar(&worker["check_invocations"]),
                worker["last_execution_time"]
                    .as_f64()
                    .map(time_ago)
                    .unwrap_or_default(),
            ]
        })
        .collect();
    output::print_table(&["name", "check_invocations", "last_execution_time"], &rows);

    output::header("Queues:");
    let mut queues = data["queues"].as_array().cloned().unwrap_or_default();
    queues.sort_by_key(|q| q["name"].as_str().unwrap_or_default().to_string());

    let rows: Vec<Vec<String>> = queues
        .iter()
        .map(|queue| {
            vec![
                queue["name"].as_str().unwrap_or_default().to_string(),
                scalar(&queue["size"]),
            ]
        })
        .collect();
    output::print_table(&["name", "size"], &rows);

    Ok(())
}
