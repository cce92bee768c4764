use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::types::DEFAULT_LOCALE;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "excludePatterns[0]")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Settings of a translation directory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct I18nSettings {
    pub primary_locale: String,

    /// `None` lets the store pick the best match for the primary locale
    /// when `auto_adjust` is set.
    pub secondary_locale: Option<String>,

    pub auto_adjust: bool,

    /// Encoding label of translation files, e.g. `utf-8` or `gbk`.
    pub encoding: String,

    /// Paths, relative to the translation directory, skipped by the auto-loader.
    pub exclude_patterns: Vec<String>,
}

impl I18nSettings {
    /// # Errors
    /// - Locale is empty
    /// - Unknown encoding label
    /// - Invalid glob pattern
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.primary_locale.trim().is_empty() {
            errors.push(ValidationError::new(
                "primaryLocale",
                "The locale cannot be empty. Please specify a locale, for example: \"en_US\"",
            ));
        }

        if let Some(locale) = &self.secondary_locale
            && locale.trim().is_empty()
        {
            errors.push(ValidationError::new(
                "secondaryLocale",
                "The locale cannot be empty. Please specify a locale (e.g., \"zh_CN\"), or remove this field",
            ));
        }

        if encoding_rs::Encoding::for_label(self.encoding.trim().as_bytes()).is_none() {
            errors.push(ValidationError::new(
                "encoding",
                format!("Unknown encoding '{}'. Example: \"utf-8\", \"gbk\"", self.encoding),
            ));
        }

        for (index, pattern) in self.exclude_patterns.iter().enumerate() {
            if let Err(e) = globset::Glob::new(pattern) {
                errors.push(ValidationError::new(
                    format!("excludePatterns[{index}]"),
                    format!("Invalid glob pattern '{pattern}': {e}"),
                ));
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

impl Default for I18nSettings {
    fn default() -> Self {
        Self {
            primary_locale: DEFAULT_LOCALE.to_string(),
            secondary_locale: None,
            auto_adjust: true,
            encoding: "utf-8".to_string(),
            exclude_patterns: Vec::new(),
        }
    }
}
