//! Configuration commands.
//!
//! - `config show`: Display current configuration
//! - `config get`: Print one value
//! - `config set`: Set and persist one value

use owo_colors::OwoColorize;
use serde_json::json;

use super::CommandOutput;
use crate::config::{API_URL_ENV, Config, VALID_KEYS};
use crate::error::{BoxOfficeError, Result};

/// Reject unknown keys, suggesting dot notation for `api_base_url`-style typos
fn validate_config_key(key: &str) -> Result<&str> {
    if VALID_KEYS.contains(&key) {
        return Ok(key);
    }

    if let Some(pos) = key.find('_') {
        let dot_version = format!("{}.{}", &key[..pos], &key[pos + 1..]);
        if VALID_KEYS.contains(&dot_version.as_str()) {
            return Err(BoxOfficeError::Config(format!(
                "invalid config key '{key}'. Use dot notation: '{dot_version}'"
            )));
        }
    }

    Err(BoxOfficeError::Config(format!(
        "unknown config key '{key}'. Valid keys: {}",
        VALID_KEYS.join(", ")
    )))
}

/// Show current configuration
pub fn cmd_config_show(json: bool) -> Result<()> {
    let config = Config::load()?;
    let effective_url = config.api_base_url();
    let overridden = effective_url != config.api.base_url;

    let json_output = json!({
        "api": {
            "base_url": config.api.base_url,
            "effective_base_url": effective_url,
        },
        "listing_concurrency": config.listing_concurrency,
        "config_file": Config::config_path().to_string_lossy(),
    });

    let mut text = String::new();
    text.push_str(&format!("{}\n\n", "Configuration:".cyan().bold()));

    text.push_str(&format!("{}:\n", "api".cyan()));
    text.push_str(&format!("  base_url: {}\n", config.api.base_url));
    if overridden {
        text.push_str(&format!(
            "  {}\n",
            format!("(overridden by {API_URL_ENV}={effective_url})").yellow()
        ));
    }
    text.push('\n');

    text.push_str(&format!(
        "{}: {}\n\n",
        "listing_concurrency".cyan(),
        config.listing_concurrency
    ));
    text.push_str(&format!(
        "{}",
        format!("Config file: {}", Config::config_path().display()).dimmed()
    ));

    CommandOutput::new(json_output).with_text(text).print(json)
}

/// Set a configuration value
pub fn cmd_config_set(key: &str, value: &str, json: bool) -> Result<()> {
    let key = validate_config_key(key)?;

    let mut config = Config::load()?;
    config.set(key, value)?;
    config.save()?;
    tracing::info!(key, value, "configuration updated");

    CommandOutput::new(json!({
        "action": "config_set",
        "key": key,
        "value": config.get(key)?,
        "success": true,
    }))
    .with_text(format!("Set {} to {}", key.cyan(), value))
    .print(json)
}

/// Get a specific configuration value
pub fn cmd_config_get(key: &str, json: bool) -> Result<()> {
    let key = validate_config_key(key)?;

    let config = Config::load()?;
    let value = config.get(key)?;

    CommandOutput::new(json!({
        "key": key,
        "value": value,
    }))
    .with_text(value.clone())
    .print(json)
}
