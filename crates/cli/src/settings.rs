use std::{fs, path::Path};

use anyhow::{Context, Result};
use demand_consumer::Settings;

/// Loads solver settings from a TOML file, or the defaults when no file is given.
pub fn load(path: Option<&Path>) -> Result<Settings> {
    let Some(path) = path else {
        return Ok(Settings::default());
    };

    let text =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    parse(&text).with_context(|| format!("failed to parse {}", path.display()))
}

fn parse(text: &str) -> Result<Settings> {
    Ok(toml::from_str(text)?)
}
