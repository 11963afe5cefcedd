use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::expense::Expense;

const CURRENT_SCHEMA_VERSION: u8 = 1;

/// A named collection of expenses, persisted as one JSON document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseBook {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub expenses: Vec<Expense>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default = "ExpenseBook::schema_version_default")]
    pub schema_version: u8,
}

impl ExpenseBook {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            expenses: Vec::new(),
            created_at: now,
            updated_at: now,
            schema_version: CURRENT_SCHEMA_VERSION,
        }
    }

    pub fn add_expense(&mut self, expense: Expense) -> Uuid {
        let id = expense.id;
        self.expenses.push(expense);
        self.touch();
        id
    }

    pub fn expense(&self, id: Uuid) -> Option<&Expense> {
        self.expenses.iter().find(|expense| expense.id == id)
    }

    pub fn expense_count(&self) -> usize {
        self.expenses.len()
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn schema_version_default() -> u8 {
        CURRENT_SCHEMA_VERSION
    }
}
