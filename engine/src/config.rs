use serde::Deserialize;
use std::{env, fs, path::PathBuf, time::Duration};
use thiserror::Error;

use vitrine_types::ui::UiOptions;

use crate::typewriter::Timings;

/// On-disk configuration. Every section and field is optional; absent
/// values fall back to the built-in content and timings.
#[derive(Debug, Default, Deserialize)]
pub struct VitrineConfig {
    pub app: Option<AppConfig>,
    pub typewriter: Option<TypewriterConfig>,
    pub contact: Option<ContactConfig>,
    pub content: Option<ContentConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ascii_only: bool,
    #[serde(default)]
    pub high_contrast: bool,
    #[serde(default)]
    pub reduced_motion: bool,
    /// Frame cadence override in milliseconds.
    pub frame_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TypewriterConfig {
    pub type_speed_ms: Option<u64>,
    pub delete_speed_ms: Option<u64>,
    pub pause_ms: Option<u64>,
    /// Replaces the built-in phrase script. An explicitly empty list is a
    /// configuration error and aborts startup.
    pub phrases: Option<Vec<String>>,
}

impl TypewriterConfig {
    #[must_use]
    pub fn timings(&self) -> Timings {
        let defaults = Timings::default();
        let ms = |v: Option<u64>, d: Duration| v.map_or(d, Duration::from_millis);
        Timings {
            type_speed: ms(self.type_speed_ms, defaults.type_speed),
            delete_speed: ms(self.delete_speed_ms, defaults.delete_speed),
            pause: ms(self.pause_ms, defaults.pause),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ContactConfig {
    /// Form relay URL the contact form POSTs to. Without it the form
    /// renders but submission reports that no endpoint is configured.
    pub endpoint: Option<String>,
}

/// Partial overrides for the static content tables.
#[derive(Debug, Default, Deserialize)]
pub struct ContentConfig {
    pub name: Option<String>,
    pub projects: Option<Vec<vitrine_types::Project>>,
    pub technologies: Option<Vec<vitrine_types::Technology>>,
    pub social: Option<Vec<vitrine_types::SocialLink>>,
}

impl VitrineConfig {
    /// Load the first config file that exists, in priority order:
    /// `$VITRINE_CONFIG`, `~/.vitrine/config.toml`, `./vitrine.toml`.
    /// `Ok(None)` when no file exists.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        for path in Self::candidates() {
            if !path.exists() {
                continue;
            }
            return Self::load_from(&path).map(Some);
        }
        Ok(None)
    }

    pub fn load_from(path: &PathBuf) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })
    }

    fn candidates() -> Vec<PathBuf> {
        let mut candidates = Vec::new();
        if let Ok(explicit) = env::var("VITRINE_CONFIG") {
            candidates.push(PathBuf::from(explicit));
        }
        if let Some(dir) = Self::dir() {
            candidates.push(dir.join("config.toml"));
        }
        candidates.push(PathBuf::from("vitrine.toml"));
        candidates
    }

    /// `~/.vitrine`, shared by the config file and the log directory.
    #[must_use]
    pub fn dir() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".vitrine"))
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.app.as_ref().map_or_else(UiOptions::default, |app| UiOptions {
            ascii_only: app.ascii_only,
            high_contrast: app.high_contrast,
            reduced_motion: app.reduced_motion,
        })
    }

    #[must_use]
    pub fn frame_duration(&self) -> Option<Duration> {
        self.app
            .as_ref()
            .and_then(|app| app.frame_ms)
            .map(Duration::from_millis)
    }
}
