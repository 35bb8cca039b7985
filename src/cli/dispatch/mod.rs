use crate::cli::actions::Action;
use crate::host::ConsoleSettings;
use anyhow::{Context, Result};
use std::path::PathBuf;

pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let value = |name: &str| -> Result<String> {
        matches
            .get_one::<String>(name)
            .map(|s| s.trim().to_string())
            .with_context(|| format!("missing required argument: --{name}"))
    };

    let console = ConsoleSettings {
        api_base_url: value("api-base-url")?,
        app_name: value("app-name")?,
        organization_name: value("organization")?,
        default_favicon: value("default-favicon")?,
    };
    console.validate()?;

    Ok(Action::Server {
        port: matches.get_one::<u16>("port").copied().unwrap_or(8080),
        dist: PathBuf::from(value("dist")?),
        console,
    })
}
