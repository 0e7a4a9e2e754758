// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, fs, path::PathBuf, str::FromStr};

use agenda_core::{APP_NAME, Config as CoreConfig, get_config_dir};

const AGENDA_CONFIG_ENV: &str = "AGENDA_CONFIG";

/// Finds and reads the configuration.
///
/// Looks at the explicit path first, then `AGENDA_CONFIG`, then the user
/// config directory. Built-in defaults apply when nothing is found.
#[tracing::instrument]
pub fn parse_config(path: Option<PathBuf>) -> Result<(CoreConfig, Config), Box<dyn Error>> {
    let path = if let Some(path) = path {
        path
    } else if let Ok(env_path) = std::env::var(AGENDA_CONFIG_ENV) {
        PathBuf::from(env_path)
    } else {
        let config = get_config_dir()?.join(format!("{APP_NAME}/config.toml"));
        if !config.exists() {
            tracing::debug!(path = %config.display(), "no config file, using defaults");
            return Ok((CoreConfig::default(), Config::default()));
        }
        config
    };

    tracing::debug!(path = %path.display(), "reading config");
    fs::read_to_string(&path)
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
        .parse::<ConfigRaw>()
        .map(|a| (a.core, a.cli))
}

/// Settings of the interactive front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    /// Ask before overlapping, group deletion and recurrence.
    pub confirm: bool,
    /// Colorize the output.
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            confirm: true,
            color: true,
        }
    }
}

#[derive(Debug, serde::Deserialize)]
struct ConfigRaw {
    #[serde(default)]
    core: CoreConfig,
    #[serde(default)]
    cli: Config,
}

impl FromStr for ConfigRaw {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}
