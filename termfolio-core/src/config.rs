//! User configuration (`config.json`).
//!
//! Every field has a default, so a missing file or a partial file is fine.

use crate::error::{Result, TermfolioError};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Overrides the config file location.
pub const CONFIG_ENV: &str = "TERMFOLIO_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Colour theme name, resolved by the UI.
    pub theme: String,
    /// Delay between a `cd` confirmation and the page scroll.
    pub scroll_delay_ms: u64,
    pub prompt: String,
    pub intro: IntroConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "default".to_string(),
            scroll_delay_ms: 500,
            prompt: "$".to_string(),
            intro: IntroConfig::default(),
        }
    }
}

/// Typewriter banner timing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntroConfig {
    pub enabled: bool,
    pub start_delay_ms: u64,
    pub min_char_ms: u64,
    pub max_char_ms: u64,
}

impl Default for IntroConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            start_delay_ms: 500,
            min_char_ms: 20,
            max_char_ms: 60,
        }
    }
}

impl Config {
    /// Load from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::info!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path).map_err(|source| TermfolioError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config =
            serde_json::from_str(&raw).map_err(|source| TermfolioError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;

        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load from `$TERMFOLIO_CONFIG`, else the platform config dir, else
    /// defaults.
    pub fn load_default() -> Result<Self> {
        if let Ok(p) = std::env::var(CONFIG_ENV) {
            return Self::load(Path::new(&p));
        }
        match Self::default_path() {
            Some(p) => Self::load(&p),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.intro.min_char_ms > self.intro.max_char_ms {
            return Err(TermfolioError::InvalidConfig(format!(
                "intro.min_char_ms ({}) exceeds intro.max_char_ms ({})",
                self.intro.min_char_ms, self.intro.max_char_ms
            )));
        }
        if self.prompt.trim().is_empty() {
            return Err(TermfolioError::InvalidConfig(
                "prompt must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn scroll_delay(&self) -> Duration {
        Duration::from_millis(self.scroll_delay_ms)
    }

    pub fn default_path() -> Option<PathBuf> {
        project_dirs().map(|d| d.config_dir().join("config.json"))
    }

    /// Where the log file goes.
    pub fn data_dir() -> Option<PathBuf> {
        project_dirs().map(|d| d.data_dir().to_path_buf())
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("tech", "sauravsingh", "termfolio")
}
