//! Configure command - write the config file.

use std::path::Path;
use std::time::Duration;

use dialoguer::{Confirm, Input};
use tracing::debug;

use crate::cli::output;
use crate::core::config::Config;
use crate::error::Result;

/// Check that the URL answers at all; any HTTP status counts, only a
/// transport failure does not.
fn reachable(url: &str) -> bool {
    let client = match reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(5))
        .redirect(reqwest::redirect::Policy::none())
        .build()
    {
        Ok(client) => client,
        Err(_) => return false,
    };

    match client.get(url).send() {
        Ok(_) => true,
        Err(e) => {
            debug!("reachability check failed: {}", e);
            false
        }
    }
}

/// Interactively write the config file (base URL and optional token).
pub fn execute(config_file: &Path) -> Result<()> {
    let default_url = Config::load_file(config_file)
        .ok()
        .map(|config| config.url);

    let url = loop {
        let mut input =
            Input::<String>::new().with_prompt("Please enter the ZMON base URL (e.g. https://demo.zmon.io)");
        if let Some(default) = &default_url {
            input = input.default(default.clone());
        }
        let url = input.interact_text()?;

        output::action(&format!("Checking {}.. ", url));
        if reachable(&url) {
            output::ok("");
            break url;
        }
        output::error("not reachable");
    };

    let mut config = Config {
        url: url.trim_end_matches('/').to_string(),
        ..Config::default()
    };

    if Confirm::new()
        .with_prompt("Is your ZMON using GitHub for authentication?")
        .default(false)
        .interact()?
    {
        let token: String = Input::new()
            .with_prompt("Your personal access token")
            .interact_text()?;
        if !token.is_empty() {
            config.token = Some(token);
        }
    }

    output::action(&format!("Writing configuration to {}.. ", config_file.display()));
    config.save(config_file)?;
    output::ok("");
    Ok(())
}
