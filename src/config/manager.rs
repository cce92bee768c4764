//! Settings management.

use std::path::Path;

use super::{
    ConfigError,
    I18nSettings,
    loader,
};
use crate::store::TranslationStore;

/// Holds the validated settings of a translation directory.
#[derive(Default, Debug, Clone)]
pub struct ConfigManager {
    current_settings: I18nSettings,
}

impl ConfigManager {
    #[must_use]
    pub fn new() -> Self {
        Self { current_settings: I18nSettings::default() }
    }

    /// Loads settings from `translation_dir`, falling back to defaults when
    /// there is no directory or no configuration file.
    ///
    /// On error the previous settings are kept.
    ///
    /// # Errors
    /// - File read error
    /// - JSON parse error
    /// - Validation error
    pub fn load_settings(&mut self, translation_dir: Option<&Path>) -> Result<(), ConfigError> {
        tracing::debug!(?translation_dir, "Loading settings");

        let settings = if let Some(dir) = translation_dir {
            loader::load_from_dir(dir)?.map_or_else(I18nSettings::default, |settings| {
                tracing::debug!(?settings, "Loaded directory settings");
                settings
            })
        } else {
            I18nSettings::default()
        };

        settings.validate().map_err(ConfigError::ValidationErrors)?;

        self.current_settings = settings;
        tracing::debug!(settings = ?self.current_settings, "Settings loaded successfully");

        Ok(())
    }

    #[must_use]
    pub const fn get_settings(&self) -> &I18nSettings {
        &self.current_settings
    }

    /// Applies the locale settings to `store`.
    ///
    /// Call after loading translations so that an auto-adjusted secondary
    /// locale can be matched against the available locales.
    pub fn apply(&self, store: &TranslationStore) {
        let settings = &self.current_settings;
        store.set_locale(
            Some(&settings.primary_locale),
            settings.secondary_locale.as_deref(),
            settings.auto_adjust,
        );
    }
}
