// File: src/config.rs
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;

/// Environment variable the front ends read the config path from.
pub const CONFIG_ENV_VAR: &str = "KEYPAD_CONFIG";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config `{path}`: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed config `{path}`: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// User-facing texts shown by the presentation adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub empty_input: String,
    pub invalid_digits: String,
    pub no_combinations: String,
    /// `{count}` is replaced with the number of combinations.
    pub count_label: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            empty_input: "Please enter some digits.".to_string(),
            invalid_digits: "Only digits from 2 to 9 are allowed.".to_string(),
            no_combinations: "No combinations could be generated.".to_string(),
            count_label: "Total combinations: {count}".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdapterConfig {
    pub messages: Messages,
    /// Caps how many combinations the results view lists. The count is never capped.
    pub max_display: Option<usize>,
    pub log_level: String,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            messages: Messages::default(),
            max_display: None,
            log_level: crate::logging::default_log_level().to_string(),
        }
    }
}

impl AdapterConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let file = File::open(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_reader(BufReader::new(file)).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Loads from the path in `KEYPAD_CONFIG`, or defaults when it is unset.
    pub fn try_from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::from_file(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    /// Like `try_from_env`, but falls back to defaults on error after
    /// writing the reason to `report`. Front ends call this before logging
    /// is up, so the reason must not go only to the logger.
    pub fn from_env_or_report(report: &mut impl Write) -> Self {
        match Self::try_from_env() {
            Ok(config) => config,
            Err(err) => {
                let _ = writeln!(report, "[WARN] Config ignored, using defaults: {}", err);
                log::warn!("event=config_load module=config status=fallback reason=\"{err}\"");
                Self::default()
            }
        }
    }
}
