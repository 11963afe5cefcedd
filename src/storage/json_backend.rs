//! JSON persistence for expense books and the dashboard export.

use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::NaiveDate;

use crate::core::paths;
use crate::domain::{Expense, ExpenseBook};
use crate::errors::TrackerError;

use super::{Result, StorageBackend};

const BOOK_EXTENSION: &str = "json";

/// Stores each book as one pretty-printed JSON document under the managed
/// books directory.
pub struct JsonStorage {
    books_dir: PathBuf,
}

impl JsonStorage {
    pub fn new() -> Self {
        Self {
            books_dir: paths::books_dir(),
        }
    }

    pub fn with_books_dir(books_dir: PathBuf) -> Self {
        Self { books_dir }
    }

    fn book_path(&self, name: &str) -> PathBuf {
        self.books_dir.join(format!("{}.{}", name, BOOK_EXTENSION))
    }
}

impl Default for JsonStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl StorageBackend for JsonStorage {
    fn save(&self, book: &ExpenseBook, name: &str) -> Result<()> {
        fs::create_dir_all(&self.books_dir)?;
        save_book_to_path(book, &self.book_path(name))
    }

    fn load(&self, name: &str) -> Result<ExpenseBook> {
        let path = self.book_path(name);
        if !path.exists() {
            return Err(TrackerError::BookNotFound(name.to_string()));
        }
        load_book_from_path(&path)
    }

    fn list_books(&self) -> Result<Vec<String>> {
        if !self.books_dir.exists() {
            return Ok(Vec::new());
        }
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.books_dir)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(BOOK_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }
}

/// Writes the book atomically by staging to a temporary file.
pub fn save_book_to_path(book: &ExpenseBook, path: &Path) -> Result<()> {
    let tmp = path.with_extension("tmp");
    let json = serde_json::to_string_pretty(book)?;
    fs::write(&tmp, json)?;
    fs::rename(tmp, path)?;
    Ok(())
}

/// Loads a book snapshot from disk, returning structured errors on failure.
pub fn load_book_from_path(path: &Path) -> Result<ExpenseBook> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

/// Serializes the full expense collection to `expenses-<ISO-date>.json` in
/// `dir` and returns the written path. This is the tracker's only external
/// persistence format; import stays an open extension point.
pub fn export_expenses(expenses: &[Expense], dir: &Path, today: NaiveDate) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(format!("expenses-{}.json", today.format("%Y-%m-%d")));
    let json = serde_json::to_string_pretty(expenses)?;
    fs::write(&path, json)?;
    Ok(path)
}
