//! Dashboard commands.

use std::path::Path;

use tracing::info;

use crate::cli::output;
use crate::core::codec;
use crate::core::document::Dashboard;
use crate::core::session::Session;
use crate::error::Result;

/// Get a single dashboard and print it as YAML.
pub fn get(config_file: &Path, dashboard_id: i64) -> Result<()> {
    let mut session = Session::open(config_file)?;
    print_dashboard(&mut session, dashboard_id)
}

/// Fetch and print one dashboard. HTTP failures propagate to the
/// caller, which reports them.
pub fn print_dashboard(session: &mut Session, dashboard_id: i64) -> Result<()> {
    let response = session.get(&format!("/dashboard/{}", dashboard_id))?;
    let document = codec::decode(&response.body)?;
    print!("{}", codec::encode(&document)?);
    Ok(())
}

/// Create or update a dashboard from a YAML file.
///
/// With an `id` in the document the dashboard is updated in place;
/// without one a new dashboard is created and the id returned by the
/// server is written back into the file.
pub fn update(config_file: &Path, file: &str) -> Result<()> {
    let mut session = Session::open(config_file)?;

    let contents = std::fs::read_to_string(file)?;
    let document = codec::decode(&contents)?;
    let mut dashboard = Dashboard::from_document(document)?;

    match dashboard.id() {
        Some(id) => {
            info!("updating dashboard {}", id);
            output::action(&format!("updating dashboard {} ... ", id));
            session.post(&format!("/dashboard/{}", id), &dashboard.to_json()?)?;
            output::ok("");
        }
        None => {
            info!("creating new dashboard");
            output::action("creating new dashboard ... ");
            let response = session.post("/dashboard/", &dashboard.to_json()?)?;

            let id: i64 = response.body.trim().parse().map_err(|_| {
                crate::error::FormatError::Malformed(format!(
                    "expected numeric dashboard id, got '{}'",
                    response.body
                ))
            })?;
            dashboard.set_id(id);
            std::fs::write(file, codec::encode(dashboard.document())?)?;
            output::ok(&format!("new id: {}", id));
        }
    }
    Ok(())
}
