//! Loading translation sources into a [`TranslationStore`].
//!
//! Every loader reads and parses its input completely before taking the store
//! lock, and inserts the resulting triples in one batch. A directory load
//! inserts file by file, so a failure part way through keeps what was already
//! loaded.

use std::fs;
use std::io;
use std::path::Path;

use encoding_rs::Encoding;
use globset::{
    Glob,
    GlobSet,
    GlobSetBuilder,
};
use ignore::WalkBuilder;
use serde_json::Value;

use super::source::{
    SourceFormat,
    encoding_for_label,
    read_source,
};
use super::{
    LoadError,
    csv,
    json,
    lang,
};
use crate::config::I18nSettings;
use crate::locale::looks_like_locale;
use crate::store::TranslationStore;
use crate::types::{
    LocaleCode,
    Triple,
};

/// Feeds translation sources into a store.
///
/// Methods return the number of entries inserted.
#[derive(Debug)]
pub struct Loader<'s> {
    store: &'s TranslationStore,
    encoding: &'static Encoding,
    exclude_set: GlobSet,
}

impl<'s> Loader<'s> {
    /// Creates a loader reading UTF-8 files with no exclusions.
    #[must_use]
    pub fn new(store: &'s TranslationStore) -> Self {
        Self { store, encoding: encoding_rs::UTF_8, exclude_set: GlobSet::empty() }
    }

    /// Creates a loader configured from `settings`.
    pub fn from_settings(
        store: &'s TranslationStore,
        settings: &I18nSettings,
    ) -> Result<Self, LoadError> {
        Self::new(store)
            .with_encoding(&settings.encoding)?
            .with_exclude_patterns(&settings.exclude_patterns)
    }

    /// Sets the encoding used to decode files, e.g. `utf-8` or `gbk`.
    pub fn with_encoding(mut self, label: &str) -> Result<Self, LoadError> {
        self.encoding = encoding_for_label(label)?;
        Ok(self)
    }

    /// Sets glob patterns, relative to the auto-loaded directory, for paths to skip.
    pub fn with_exclude_patterns(mut self, patterns: &[String]) -> Result<Self, LoadError> {
        self.exclude_set = build_glob_set(patterns)?;
        Ok(self)
    }

    /// Loads `.lang` content.
    ///
    /// `locale` defaults to the current primary locale.
    pub fn load_lang_str(&self, content: &str, locale: Option<&str>, superiors: &str) -> usize {
        let locale = self.locale_or_primary(locale);
        self.insert(lang::parse_lang(content, &locale, superiors))
    }

    /// Loads a `.lang` file.
    pub fn load_lang(
        &self,
        path: &Path,
        locale: Option<&str>,
        superiors: &str,
    ) -> Result<usize, LoadError> {
        let content = read_source(path, self.encoding)?;
        Ok(self.load_lang_str(&content, locale, superiors))
    }

    /// Loads a nested object whose string leaves are texts of one locale.
    ///
    /// `locale` defaults to the current primary locale; keys are placed under
    /// `prefix` when it is not empty.
    pub fn load_dict(&self, value: &Value, locale: Option<&str>, prefix: &str) -> usize {
        let locale = self.locale_or_primary(locale);
        self.insert(json::flatten_json(value, &locale, prefix))
    }

    /// Loads a JSON file holding a nested object for one locale.
    pub fn load_json(&self, path: &Path, locale: Option<&str>) -> Result<usize, LoadError> {
        let value = self.read_json_object(path)?;
        Ok(self.load_dict(&value, locale, ""))
    }

    /// Loads a `{ locale: { nested object } }` value.
    pub fn load_json_i18n_value(&self, value: &Value) -> usize {
        self.insert(json::flatten_json_by_locale(value))
    }

    /// Loads a JSON file holding a `{ locale: { nested object } }` document.
    pub fn load_json_i18n(&self, path: &Path) -> Result<usize, LoadError> {
        let value = self.read_json_object(path)?;
        Ok(self.load_json_i18n_value(&value))
    }

    /// Loads `locale,key,value` CSV rows. Nothing is inserted if any row is malformed.
    pub fn load_csv_reader<R: io::Read>(&self, reader: R) -> Result<usize, LoadError> {
        let triples = csv::read_rows(reader)?;
        Ok(self.insert(triples))
    }

    /// Loads a `locale,key,value` CSV file.
    pub fn load_csv(&self, path: &Path) -> Result<usize, LoadError> {
        let content = read_source(path, self.encoding)?;
        self.load_csv_reader(content.as_bytes()).map_err(|error| error.in_file(path))
    }

    /// Loads every recognised file in `dir`.
    ///
    /// Without a `locale`, the locale is taken from names: `zh_CN.lang` and
    /// `zh_CN.json` are loaded for `zh_CN`, and a `zh_CN/` subdirectory is
    /// loaded with `zh_CN` bound. With a `locale`, `.json` files are loaded for
    /// it, `.lang` files are loaded for it with their stem as key prefix, and
    /// subdirectories are skipped. `.csv` files carry their own locales.
    ///
    /// Hidden entries, names that do not look like a locale where one is
    /// inferred, and paths matching the exclude patterns are skipped.
    pub fn auto_load(&self, dir: &Path, locale: Option<&str>) -> Result<usize, LoadError> {
        let metadata = fs::metadata(dir).map_err(|source| LoadError::io(dir, source))?;
        if !metadata.is_dir() {
            return Err(LoadError::io(
                dir,
                io::Error::new(io::ErrorKind::NotADirectory, "not a directory"),
            ));
        }

        tracing::debug!(dir = %dir.display(), ?locale, "Auto-loading translations");
        let count = self.auto_load_dir(dir, dir, locale)?;
        tracing::debug!(dir = %dir.display(), count, "Auto-load finished");
        Ok(count)
    }

    fn auto_load_dir(
        &self,
        root: &Path,
        dir: &Path,
        locale: Option<&str>,
    ) -> Result<usize, LoadError> {
        let mut count = 0;

        for result in WalkBuilder::new(dir)
            .standard_filters(false)
            .hidden(true)
            .follow_links(true)
            .max_depth(Some(1))
            .sort_by_file_name(|a, b| a.cmp(b))
            .build()
        {
            let entry = result?;
            if entry.depth() == 0 {
                continue;
            }

            let path = entry.path();
            let relative = path.strip_prefix(root).unwrap_or(path);
            if self.exclude_set.is_match(relative) {
                tracing::trace!(path = %relative.display(), "Excluded");
                continue;
            }

            let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
                continue;
            };

            if entry.file_type().is_some_and(|file_type| file_type.is_dir()) {
                match locale {
                    None if looks_like_locale(name) => {
                        count += self.auto_load_dir(root, path, Some(name))?;
                    }
                    None => tracing::warn!(
                        path = %relative.display(),
                        "Directory name is not a locale; skipping"
                    ),
                    Some(_) => tracing::trace!(path = %relative.display(), "Skipping directory"),
                }
                continue;
            }

            count += self.auto_load_file(path, locale)?;
        }

        Ok(count)
    }

    fn auto_load_file(&self, path: &Path, locale: Option<&str>) -> Result<usize, LoadError> {
        let Some(format) = SourceFormat::from_path(path) else {
            return Ok(0);
        };
        let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
            return Ok(0);
        };

        let count = match (format, locale) {
            (SourceFormat::Csv, _) => self.load_csv(path)?,
            (SourceFormat::Json, Some(locale)) => self.load_json(path, Some(locale))?,
            (SourceFormat::Lang, Some(locale)) => self.load_lang(path, Some(locale), stem)?,
            (SourceFormat::Json, None) if looks_like_locale(stem) => {
                self.load_json(path, Some(stem))?
            }
            (SourceFormat::Lang, None) if looks_like_locale(stem) => {
                self.load_lang(path, Some(stem), "")?
            }
            (_, None) => {
                tracing::warn!(path = %path.display(), "File name is not a locale; skipping");
                return Ok(0);
            }
        };

        tracing::debug!(path = %path.display(), ?format, count, "Loaded translation file");
        Ok(count)
    }

    fn read_json_object(&self, path: &Path) -> Result<Value, LoadError> {
        let content = read_source(path, self.encoding)?;
        let value: Value = serde_json::from_str(&content)
            .map_err(|source| LoadError::Json { path: path.to_path_buf(), source })?;
        if !value.is_object() {
            return Err(LoadError::NotAnObject { path: path.to_path_buf() });
        }
        Ok(value)
    }

    fn locale_or_primary(&self, locale: Option<&str>) -> LocaleCode {
        locale.map_or_else(|| self.store.primary_locale(), ToString::to_string)
    }

    fn insert(&self, triples: Vec<Triple>) -> usize {
        self.store.insert_triples(triples)
    }
}

fn build_glob_set(patterns: &[String]) -> Result<GlobSet, LoadError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern)
            .map_err(|source| LoadError::InvalidPattern { pattern: pattern.clone(), source })?;
        builder.add(glob);
    }
    builder
        .build()
        .map_err(|source| LoadError::InvalidPattern { pattern: patterns.join(", "), source })
}
