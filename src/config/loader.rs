//! Configuration file reading.

use std::path::Path;

use super::{
    ConfigError,
    I18nSettings,
};

/// Name of the configuration file inside a translation directory.
pub const CONFIG_FILE_NAME: &str = ".i18n-store.json";

/// Reads settings from `.i18n-store.json` in `dir`.
///
/// # Returns
/// - `Ok(Some(settings))`: the file exists and parses
/// - `Ok(None)`: no configuration file
///
/// # Errors
/// - File read error
/// - JSON parse error
pub(super) fn load_from_dir(dir: &Path) -> Result<Option<I18nSettings>, ConfigError> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "Configuration file not found");
        return Ok(None);
    }

    tracing::debug!(path = %config_path.display(), "Loading configuration");

    let content = std::fs::read_to_string(&config_path)?;
    let settings: I18nSettings = serde_json::from_str(&content)?;

    Ok(Some(settings))
}
