//! Looks a key up in a translation directory.
//!
//! ```text
//! i18n-store <dir> <key> [locale]
//! ```
#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::path::PathBuf;
use std::process::ExitCode;

use i18n_store::config::ConfigManager;
use i18n_store::{
    Loader,
    TranslationStore,
};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (Some(dir), Some(key)) = (args.first(), args.get(1)) else {
        eprintln!("Usage: i18n-store <dir> <key> [locale]");
        return ExitCode::from(2);
    };
    let locale = args.get(2).map(String::as_str);

    match run(PathBuf::from(dir), key, locale) {
        Ok(text) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(dir: PathBuf, key: &str, locale: Option<&str>) -> Result<String, String> {
    let mut config_manager = ConfigManager::new();
    config_manager.load_settings(Some(&dir)).map_err(|e| e.to_string())?;

    let store = TranslationStore::new();
    let loader =
        Loader::from_settings(&store, config_manager.get_settings()).map_err(|e| e.to_string())?;
    let count = loader.auto_load(&dir, None).map_err(|e| e.to_string())?;
    tracing::info!(count, locales = ?store.available_locales(), "Translations loaded");

    config_manager.apply(&store);

    Ok(store.translate(key, locale).into_string())
}
