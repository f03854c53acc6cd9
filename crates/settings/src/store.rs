//! Settings backends.
//!
//! Loading never fails: a missing, unreadable or malformed record falls back to
//! [`Settings::default`]. Saving overwrites the whole record.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::controls::Controls;

/// Environment variable that overrides the settings file location.
pub const SETTINGS_ENV: &str = "FALLING_BLOCKS_SETTINGS";

/// File name of the persisted record.
pub const SETTINGS_FILE: &str = "tetris-storage.json";

/// The persisted record. Transient game fields are never stored here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub high_score: u32,
    pub controls: Controls,
}

/// A key-value style backend holding one [`Settings`] record.
pub trait SettingsStore {
    /// Read the record, or defaults if there is none.
    fn load(&self) -> Settings;

    /// Overwrite the record.
    fn save(&mut self, settings: &Settings) -> Result<()>;
}

/// JSON file backend.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `$FALLING_BLOCKS_SETTINGS`, or in the platform config directory.
    pub fn at_default_location() -> Result<Self> {
        if let Some(path) = std::env::var_os(SETTINGS_ENV) {
            return Ok(Self::new(path));
        }
        let proj = ProjectDirs::from("dev", "falling-blocks", "falling-blocks")
            .context("could not resolve a config directory")?;
        Ok(Self::new(proj.config_dir().join(SETTINGS_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for JsonFileStore {
    fn load(&self) -> Settings {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("no settings at {}, using defaults", self.path.display());
                return Settings::default();
            }
            Err(e) => {
                log::warn!("failed to read {}: {}; using defaults", self.path.display(), e);
                return Settings::default();
            }
        };

        match serde_json::from_str(&data) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("malformed settings in {}: {}; using defaults", self.path.display(), e);
                Settings::default()
            }
        }
    }

    fn save(&mut self, settings: &Settings) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)
                    .with_context(|| format!("creating {}", dir.display()))?;
            }
        }

        let tmp = self.path.with_extension("json.tmp");
        let data = serde_json::to_vec_pretty(settings)?;
        fs::write(&tmp, data).with_context(|| format!("writing {}", tmp.display()))?;
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("replacing {}", self.path.display()))?;
        Ok(())
    }
}

/// In-memory backend for headless runs and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    record: Option<Settings>,
    saves: usize,
}

impl MemoryStore {
    /// A store that already holds `settings`.
    pub fn with(settings: Settings) -> Self {
        Self {
            record: Some(settings),
            saves: 0,
        }
    }

    pub fn record(&self) -> Option<&Settings> {
        self.record.as_ref()
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl SettingsStore for MemoryStore {
    fn load(&self) -> Settings {
        self.record.clone().unwrap_or_default()
    }

    fn save(&mut self, settings: &Settings) -> Result<()> {
        self.record = Some(settings.clone());
        self.saves += 1;
        Ok(())
    }
}
