//! Loading a translation directory with its configuration file.

#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]

use std::fs;
use std::path::Path;

use googletest::prelude::*;
use i18n_store::config::{
    CONFIG_FILE_NAME,
    ConfigManager,
};
use i18n_store::{
    Loader,
    TranslationStore,
};
use rstest::*;
use tempfile::TempDir;

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// A directory mixing flat files, locale subdirectories and CSV rows.
#[fixture]
fn translations() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    write(root, "en_US.lang", "#define superiors app\ntitle = Translator\nquit = Quit");
    write(root, "zh_CN.json", r#"{"app": {"title": "翻译器"}}"#);
    write(root, "zh_TW/app.lang", "title = 翻譯器\nquit = 離開");
    write(root, "extra.csv", "locale,key,value\nfr_FR,app.title,Traducteur\n");
    write(root, "drafts/zh_CN.lang", "app.title = should not load");

    temp_dir
}

fn load(dir: &Path) -> TranslationStore {
    let mut config_manager = ConfigManager::new();
    config_manager.load_settings(Some(dir)).unwrap();

    let store = TranslationStore::new();
    Loader::from_settings(&store, config_manager.get_settings())
        .unwrap()
        .auto_load(dir, None)
        .unwrap();
    config_manager.apply(&store);
    store
}

#[rstest]
fn loads_every_format(translations: TempDir) {
    let store = load(translations.path());

    assert_that!(
        store.available_locales(),
        elements_are![eq("en_US"), eq("fr_FR"), eq("zh_CN"), eq("zh_TW")]
    );
    assert_that!(store.translate("app.title", Some("en_US")).as_str(), eq("Translator"));
    assert_that!(store.translate("app.title", Some("zh_CN")).as_str(), eq("翻译器"));
    assert_that!(store.translate("app.title", Some("zh_TW")).as_str(), eq("翻譯器"));
    assert_that!(store.translate("app.title", Some("fr_FR")).as_str(), eq("Traducteur"));
}

#[rstest]
fn config_file_sets_locales(translations: TempDir) {
    write(translations.path(), CONFIG_FILE_NAME, r#"{"primaryLocale": "zh_CN"}"#);

    let store = load(translations.path());

    assert_that!(store.get_locale(), eq(&("zh_CN".to_string(), "zh_TW".to_string())));
    assert_that!(store.translate("app.title", None).as_str(), eq("翻译器"));
    assert_that!(store.translate("app.quit", None).as_str(), eq("離開"));
    assert_that!(store.translate("app.missing", None).as_str(), eq("app.missing"));
}

#[rstest]
fn config_file_excludes_paths(translations: TempDir) {
    write(translations.path(), "ja_JP.lang", "app.title = 翻訳者");
    write(translations.path(), CONFIG_FILE_NAME, r#"{"excludePatterns": ["ja_*.lang", "*.csv"]}"#);

    let store = load(translations.path());

    assert_that!(
        store.available_locales(),
        elements_are![eq("en_US"), eq("zh_CN"), eq("zh_TW")]
    );
}

#[rstest]
fn config_file_selects_encoding() {
    let temp_dir = TempDir::new().unwrap();
    let (bytes, _, _) = encoding_rs::SHIFT_JIS.encode("title = 翻訳者");
    fs::write(temp_dir.path().join("ja_JP.lang"), &bytes).unwrap();
    write(temp_dir.path(), CONFIG_FILE_NAME, r#"{"encoding": "shift_jis", "primaryLocale": "ja_JP"}"#);

    let store = load(temp_dir.path());

    assert_that!(store.translate("title", None).as_str(), eq("翻訳者"));
}

#[rstest]
fn best_locale_follows_preference(translations: TempDir) {
    let store = load(translations.path());

    store.set_best_locale_for("zh_SG");

    assert_that!(store.primary_locale(), eq("zh_CN"));
    assert_that!(store.secondary_locale(), eq("zh_TW"));
}

#[rstest]
fn invalid_config_is_reported(translations: TempDir) {
    write(translations.path(), CONFIG_FILE_NAME, r#"{"excludePatterns": ["[broken"]}"#);

    let mut config_manager = ConfigManager::new();
    let result = config_manager.load_settings(Some(translations.path()));

    assert_that!(result, err(displays_as(contains_substring("excludePatterns[0]"))));
}
