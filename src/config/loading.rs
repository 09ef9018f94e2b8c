//! Configuration path resolution and loading.
//!
//! The config file location follows platform conventions with explicit
//! environment fallbacks; an OS this tool does not know about is an error,
//! never a silent default. The environment accessor is an explicit
//! capability so path resolution is testable without touching the process
//! environment.

use anyhow::{Context, Result, bail};
use std::fs;
use std::path::{Path, PathBuf};

use super::Config;
use super::validation::validate_config;

pub const APP_NAME: &str = "salah-cli";
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Environment variable accessor, injectable for tests.
pub trait EnvLookup {
    /// Value of a variable, `None` when unset.
    fn var(&self, key: &str) -> Option<String>;
}

/// The real process environment.
pub struct ProcessEnv;

impl EnvLookup for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Default config file path for the running process.
pub fn config_path() -> Result<PathBuf> {
    config_path_in(std::env::consts::OS, &ProcessEnv)
}

/// Resolve the config file path for a given OS identifier and environment.
///
/// Windows: `%APPDATA%\salah-cli\config.json`, falling back to
/// `%USERPROFILE%\AppData\Roaming` when `APPDATA` is unset. Linux and
/// macOS: `$XDG_CONFIG_HOME/salah-cli/config.json`, falling back to
/// `$HOME/.config`. Anything else is unsupported.
pub fn config_path_in(os: &str, env: &dyn EnvLookup) -> Result<PathBuf> {
    let non_empty = |key: &str| env.var(key).filter(|value| !value.is_empty());

    let base = match os {
        "windows" => match non_empty("APPDATA") {
            Some(app_data) => PathBuf::from(app_data),
            None => {
                let Some(profile) = non_empty("USERPROFILE") else {
                    bail!("APPDATA and USERPROFILE not set");
                };
                PathBuf::from(profile).join("AppData").join("Roaming")
            }
        },
        "linux" | "macos" => match non_empty("XDG_CONFIG_HOME") {
            Some(config_home) => PathBuf::from(config_home),
            None => {
                let Some(home) = non_empty("HOME") else {
                    bail!("XDG_CONFIG_HOME and HOME not set");
                };
                PathBuf::from(home).join(".config")
            }
        },
        other => bail!("unsupported OS: {other}"),
    };

    Ok(base.join(APP_NAME).join(CONFIG_FILE_NAME))
}

/// Load and validate the config from the default path.
pub fn load() -> Result<Config> {
    let path = config_path()?;

    // Ensure the config directory exists so a first-time user gets a clear
    // "no config file" error with a real directory to drop one into.
    if let Some(dir) = path.parent()
        && !dir.exists()
    {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create config directory {}", dir.display()))?;
    }

    load_from_path(&path)
}

/// Load and validate the config from a specific file path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("unable to open config file {}", path.display()))?;

    // Strict decode: unknown keys are a hard error, never ignored.
    let config: Config = serde_json::from_str(&content)
        .with_context(|| format!("error decoding JSON from {}", path.display()))?;

    validate_config(&config).with_context(|| format!("invalid config in {}", path.display()))?;

    Ok(config)
}
