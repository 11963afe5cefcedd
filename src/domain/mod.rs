//! Expense domain models, persistence-friendly types, and helpers.

pub mod book;
pub mod category;
pub mod common;
pub mod expense;
pub mod settings;

pub use book::ExpenseBook;
pub use category::{CategoryTotals, ExpenseCategory};
pub use common::{Displayable, Identifiable, NamedEntity};
pub use expense::{BillingCycle, Expense, ExpenseType};
pub use settings::{ThemePreference, UserSettings};
