//! Load-at-startup, save-on-mutation wrapper around a [`SettingsStore`].
//!
//! Create one `Preferences` per process and pass it to whatever needs it.
//! Every mutation writes the full record. A failed write is logged and kept
//! for the front end to show ([`Preferences::take_save_error`]); the
//! in-memory value stays, so play continues with the new setting.

use crate::controls::Controls;
use crate::store::{Settings, SettingsStore};
use crate::types::GameAction;

#[derive(Debug)]
pub struct Preferences<S: SettingsStore> {
    store: S,
    settings: Settings,
    save_error: Option<String>,
}

impl<S: SettingsStore> Preferences<S> {
    /// Read the current record from `store`.
    pub fn load(store: S) -> Self {
        let settings = store.load();
        Self {
            store,
            settings,
            save_error: None,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn controls(&self) -> &Controls {
        &self.settings.controls
    }

    pub fn high_score(&self) -> u32 {
        self.settings.high_score
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Bind `action` to `key` and persist.
    pub fn update_control(&mut self, action: GameAction, key: impl Into<String>) {
        let key = key.into();
        log::debug!("binding {} to {}", action.as_str(), key);
        self.settings.controls.set(action, key);
        self.persist();
    }

    /// Restore the default bindings and persist. The high score is kept.
    pub fn reset_controls(&mut self) {
        self.settings.controls = Controls::default();
        self.persist();
    }

    /// Raise the stored high score to `score` if it is higher.
    ///
    /// Returns whether the record changed.
    pub fn record_high_score(&mut self, score: u32) -> bool {
        if score <= self.settings.high_score {
            return false;
        }
        self.settings.high_score = score;
        self.persist();
        true
    }

    /// The most recent save failure, if any, cleared on read.
    pub fn take_save_error(&mut self) -> Option<String> {
        self.save_error.take()
    }

    fn persist(&mut self) {
        match self.store.save(&self.settings) {
            Ok(()) => self.save_error = None,
            Err(e) => {
                log::warn!("failed to save settings: {:#}", e);
                self.save_error = Some(format!("{:#}", e));
            }
        }
    }
}
