//! `pkgwiz config`: inspect the resolved configuration.

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Keys accepted by `pkgwiz config get`.
const KNOWN_KEYS: &[&str] = &[
    "defaults.docker_image",
    "defaults.author",
    "defaults.author_email",
    "defaults.overrides",
    "output.no_color",
    "output.format",
];

/// Dispatch to the correct config subcommand.
pub fn execute(cmd: ConfigCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            if output.is_json() {
                output.json(&serde_json::json!({ "key": key, "value": value }))?;
            } else {
                output.print(&format!("{key} = {value}"))?;
            }
        }

        ConfigCommands::List => {
            if output.is_json() {
                output.json(&config)?;
            } else {
                output.header("Current Configuration:")?;
                let serialised = config.to_toml().map_err(|e| CliError::ConfigError {
                    message: format!("Failed to serialise config: {e}"),
                    source: Some(Box::new(e)),
                })?;
                output.print(serialised.trim_end())?;
            }
        }

        ConfigCommands::Path => {
            output.print(&AppConfig::config_path().display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    let defaults = &config.defaults;
    match key {
        "defaults.docker_image" => Ok(defaults.docker_image.clone()),
        "defaults.author" => Ok(defaults.author.clone().unwrap_or_default()),
        "defaults.author_email" => Ok(defaults.author_email.clone().unwrap_or_default()),
        "defaults.overrides" => Ok(defaults.overrides.join(",")),
        "output.no_color" => Ok(config.output.no_color.to_string()),
        "output.format" => Ok(config.output.format.clone()),
        _ => Err(CliError::InvalidInput {
            message: format!(
                "Unknown config key '{key}'. Known keys: {}",
                KNOWN_KEYS.join(", ")
            ),
        }),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
