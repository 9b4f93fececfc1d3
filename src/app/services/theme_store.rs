//! Persisted light/dark preference.
//!
//! `ThemeStore` only tracks and persists the preference. Painting the
//! widgets is done by the caller (`AppState`) with `ui::theme::apply_theme`.

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use crate::app::domain::settings::{AppSettings, ThemeMode};
use crate::app::infrastructure::error::Result;

/// Backing storage for the settings file.
pub trait PreferenceStorage {
    fn load(&self) -> AppSettings;
    fn save(&self, settings: &AppSettings) -> Result<()>;
}

/// JSON file on disk, normally `<config_dir>/ferrislink/settings.json`.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn default_location() -> Self {
        Self::new(AppSettings::get_config_path())
    }
}

impl PreferenceStorage for JsonFileStorage {
    fn load(&self) -> AppSettings {
        AppSettings::load_from(&self.path)
    }

    fn save(&self, settings: &AppSettings) -> Result<()> {
        settings.save_to(&self.path)
    }
}

/// Shared in-memory storage. Clones see the same value, which lets a test
/// "reload" by building a second store over a clone.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    inner: Rc<RefCell<Option<AppSettings>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// What was last saved, if anything
    pub fn saved(&self) -> Option<AppSettings> {
        self.inner.borrow().clone()
    }
}

impl PreferenceStorage for MemoryStorage {
    fn load(&self) -> AppSettings {
        self.inner.borrow().clone().unwrap_or_default()
    }

    fn save(&self, settings: &AppSettings) -> Result<()> {
        *self.inner.borrow_mut() = Some(settings.clone());
        Ok(())
    }
}

pub struct ThemeStore {
    storage: Box<dyn PreferenceStorage>,
    settings: AppSettings,
}

impl ThemeStore {
    pub fn new(storage: impl PreferenceStorage + 'static) -> Self {
        let settings = storage.load();
        tracing::debug!("theme preference loaded: {}", settings.theme.as_str());
        Self {
            storage: Box::new(storage),
            settings,
        }
    }

    pub fn open_default() -> Self {
        Self::new(JsonFileStorage::default_location())
    }

    pub fn get(&self) -> ThemeMode {
        self.settings.theme
    }

    /// Persist `mode`. A write failure is logged; the in-memory value still changes.
    pub fn set(&mut self, mode: ThemeMode) {
        self.settings.theme = mode;
        if let Err(e) = self.storage.save(&self.settings) {
            tracing::warn!("Failed to save theme preference: {}", e);
        }
    }

    pub fn toggle(&mut self) -> ThemeMode {
        let next = self.get().toggled();
        self.set(next);
        tracing::debug!("theme switched to {}", next.as_str());
        next
    }
}
