pub mod json_backend;

use std::path::Path;

use crate::{domain::ExpenseBook, errors::TrackerError};

pub type Result<T> = std::result::Result<T, TrackerError>;

/// Abstraction over persistence backends capable of storing expense books.
pub trait StorageBackend: Send + Sync {
    fn save(&self, book: &ExpenseBook, name: &str) -> Result<()>;
    fn load(&self, name: &str) -> Result<ExpenseBook>;
    fn list_books(&self) -> Result<Vec<String>>;

    /// Ad-hoc file operations; default implementations forward to the JSON
    /// codec so a backend only overrides them when its format differs.
    fn save_to_path(&self, book: &ExpenseBook, path: &Path) -> Result<()> {
        json_backend::save_book_to_path(book, path)
    }

    fn load_from_path(&self, path: &Path) -> Result<ExpenseBook> {
        json_backend::load_book_from_path(path)
    }
}

pub use json_backend::{export_expenses, JsonStorage};
