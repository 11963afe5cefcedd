use dirs::home_dir;
use std::{env, path::PathBuf};

const DEFAULT_DIR_NAME: &str = ".subtrack";
const BOOK_DIR: &str = "books";
const EXPORT_DIR: &str = "exports";
const CONFIG_FILE: &str = "config.json";

/// Returns the application-specific data directory, defaulting to `~/.subtrack`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("SUBTRACK_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Absolute path to the managed expense-book directory.
pub fn books_dir() -> PathBuf {
    app_data_dir().join(BOOK_DIR)
}

/// Resolves the canonical file path for a book name (slug applied upstream).
pub fn book_file(name: &str) -> PathBuf {
    books_dir().join(format!("{}.json", name))
}

/// Default directory for JSON exports.
pub fn exports_dir() -> PathBuf {
    app_data_dir().join(EXPORT_DIR)
}

/// Path to the configuration file.
pub fn config_file() -> PathBuf {
    app_data_dir().join(CONFIG_FILE)
}
