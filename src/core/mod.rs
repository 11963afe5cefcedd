//! Aggregation, filtering, and repository logic over the expense collection.

pub mod dates;
pub mod filter;
pub mod paths;
pub mod services;
pub mod store;

pub use filter::{ExpenseFilter, SortOrder};
pub use store::{ExpensePatch, ExpenseStore, InMemoryStore};
