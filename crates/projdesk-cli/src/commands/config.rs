//! Handlers for the `config` subcommands, plus TOML dotted-key helpers.

use std::path::PathBuf;

use crate::cli::ConfigAction;
use crate::config::{PROJECT_NAME, ProjdeskConfig};
use crate::error::{Error, Result};

/// Dispatch a config subcommand.
pub fn handle_config_command(config_path: Option<&str>, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Path => cmd_config_path(config_path),
        ConfigAction::Init { file, force } => {
            let target = file.as_deref().or(config_path);
            cmd_config_init(target, force).map(|path| {
                println!("Config file created at {}", path.display());
            })
        }
        ConfigAction::Get { key } => {
            println!("{}", cmd_config_get(config_path, &key)?);
            Ok(())
        }
        ConfigAction::Show => {
            print!("{}", cmd_config_show(config_path)?);
            Ok(())
        }
    }
}

/// Show the resolved config file path.
pub fn cmd_config_path(config_path: Option<&str>) -> Result<()> {
    let path = ProjdeskConfig::resolve_config_path(config_path).ok_or_else(|| {
        Error::config("Could not determine config directory for this platform")
    })?;
    println!("{}", path.display());
    if !path.exists() {
        eprintln!("(file does not exist; run `{PROJECT_NAME} config init` to create it)");
    }
    Ok(())
}

/// Look up a configuration value by dotted key.
///
/// Environment overrides are applied first, so this reports what the other
/// commands would use.
pub fn cmd_config_get(config_path: Option<&str>, key: &str) -> Result<String> {
    let config = ProjdeskConfig::load(config_path)?;
    let value = toml::Value::try_from(&config).map_err(|e| Error::config(e.to_string()))?;
    get_nested_value(&value, key)
        .map(format_toml_value)
        .ok_or_else(|| Error::config(format!("Key '{key}' not found in configuration")))
}

/// Stands in for the session token in `config show` output.
pub const REDACTED: &str = "<redacted>";

/// The effective configuration as TOML, with the session token masked.
pub fn cmd_config_show(config_path: Option<&str>) -> Result<String> {
    let mut config = ProjdeskConfig::load(config_path)?;
    if config.session.token.is_some() {
        config.session.token = Some(REDACTED.to_string());
    }
    config.to_toml_string()
}

/// Write a default configuration file and return its path.
pub fn cmd_config_init(file: Option<&str>, force: bool) -> Result<PathBuf> {
    let path = match file {
        Some(p) => PathBuf::from(p),
        None => ProjdeskConfig::default_config_path()
            .ok_or_else(|| Error::config("Could not determine config directory"))?,
    };

    if path.exists() && !force {
        return Err(Error::config(format!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        )));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| Error::io_with_path(e, parent))?;
    }

    let toml_str = ProjdeskConfig::default().to_toml_string()?;
    std::fs::write(&path, toml_str).map_err(|e| Error::io_with_path(e, &path))?;
    tracing::info!(path = %path.display(), "Wrote default config");
    Ok(path)
}

/// Navigate a dotted key path in a TOML value tree.
pub fn get_nested_value<'a>(value: &'a toml::Value, key: &str) -> Option<&'a toml::Value> {
    key.split('.')
        .try_fold(value, |current, part| current.as_table()?.get(part))
}

/// Format a TOML value for display on stdout.
pub fn format_toml_value(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        toml::Value::Integer(i) => i.to_string(),
        toml::Value::Float(f) => f.to_string(),
        toml::Value::Boolean(b) => b.to_string(),
        toml::Value::Datetime(dt) => dt.to_string(),
        toml::Value::Array(_) | toml::Value::Table(_) => {
            toml::to_string_pretty(value).unwrap_or_else(|_| format!("{value:?}"))
        }
    }
}
