//! Repository seam between the UI state and the aggregation core.
//!
//! The in-memory collection stands in for a database; keeping all access
//! behind [`ExpenseStore`] lets a real persistence backend replace it without
//! touching the derivation functions, which only ever see `&[Expense]`.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::{
    BillingCycle, Expense, ExpenseBook, ExpenseCategory, ExpenseType,
};
use crate::errors::TrackerError;

/// Minimal create/read/update/delete surface over an expense collection.
pub trait ExpenseStore {
    fn list(&self) -> &[Expense];
    fn get(&self, id: Uuid) -> Option<&Expense>;
    fn add(&mut self, expense: Expense) -> Uuid;
    fn update(&mut self, id: Uuid, patch: ExpensePatch) -> Result<(), TrackerError>;
    fn remove(&mut self, id: Uuid) -> Result<Expense, TrackerError>;
}

/// Partial update applied over an existing expense; unset fields keep their
/// current value, matching the edit form's merge semantics.
#[derive(Debug, Clone, Default)]
pub struct ExpensePatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub amount: Option<f64>,
    pub currency: Option<String>,
    pub category: Option<ExpenseCategory>,
    pub kind: Option<ExpenseType>,
    pub billing_cycle: Option<BillingCycle>,
    pub next_renewal: Option<NaiveDate>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub active: Option<bool>,
    pub notes: Option<String>,
    pub tags: Option<Vec<String>>,
    pub usefulness: Option<u8>,
}

impl ExpensePatch {
    fn apply(self, expense: &mut Expense) {
        if let Some(name) = self.name {
            expense.name = name;
        }
        if let Some(description) = self.description {
            expense.description = Some(description);
        }
        if let Some(amount) = self.amount {
            expense.amount = amount;
        }
        if let Some(currency) = self.currency {
            expense.currency = currency;
        }
        if let Some(category) = self.category {
            expense.category = category;
        }
        if let Some(kind) = self.kind {
            expense.kind = kind;
        }
        if let Some(cycle) = self.billing_cycle {
            expense.billing_cycle = Some(cycle);
        }
        if let Some(renewal) = self.next_renewal {
            expense.next_renewal = Some(renewal);
        }
        if let Some(start) = self.start_date {
            expense.start_date = start;
        }
        if let Some(end) = self.end_date {
            expense.end_date = Some(end);
        }
        if let Some(active) = self.active {
            expense.active = active;
        }
        if let Some(notes) = self.notes {
            expense.notes = Some(notes);
        }
        if let Some(tags) = self.tags {
            expense.tags = tags;
        }
        if let Some(rating) = self.usefulness {
            expense.usefulness = Some(rating);
        }
    }
}

/// Store backed by a single [`ExpenseBook`] held in memory.
#[derive(Debug, Clone)]
pub struct InMemoryStore {
    book: ExpenseBook,
}

impl InMemoryStore {
    pub fn new(book: ExpenseBook) -> Self {
        Self { book }
    }

    pub fn book(&self) -> &ExpenseBook {
        &self.book
    }

    pub fn into_book(self) -> ExpenseBook {
        self.book
    }
}

impl ExpenseStore for InMemoryStore {
    fn list(&self) -> &[Expense] {
        &self.book.expenses
    }

    fn get(&self, id: Uuid) -> Option<&Expense> {
        self.book.expense(id)
    }

    fn add(&mut self, expense: Expense) -> Uuid {
        self.book.add_expense(expense)
    }

    fn update(&mut self, id: Uuid, patch: ExpensePatch) -> Result<(), TrackerError> {
        let expense = self
            .book
            .expenses
            .iter_mut()
            .find(|expense| expense.id == id)
            .ok_or(TrackerError::ExpenseNotFound(id))?;
        patch.apply(expense);
        self.book.touch();
        Ok(())
    }

    fn remove(&mut self, id: Uuid) -> Result<Expense, TrackerError> {
        let position = self
            .book
            .expenses
            .iter()
            .position(|expense| expense.id == id)
            .ok_or(TrackerError::ExpenseNotFound(id))?;
        let removed = self.book.expenses.remove(position);
        self.book.touch();
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with_one_expense() -> (InMemoryStore, Uuid) {
        let mut store = InMemoryStore::new(ExpenseBook::new("Test"));
        let id = store.add(Expense::new(
            "Mixpanel",
            25.0,
            ExpenseCategory::Marketing,
            ExpenseType::Recurring,
            NaiveDate::from_ymd_opt(2024, 4, 8).unwrap(),
        ));
        (store, id)
    }

    #[test]
    fn patch_merges_only_set_fields() {
        let (mut store, id) = store_with_one_expense();
        store
            .update(
                id,
                ExpensePatch {
                    amount: Some(30.0),
                    usefulness: Some(6),
                    ..Default::default()
                },
            )
            .unwrap();

        let expense = store.get(id).unwrap();
        assert_eq!(expense.amount, 30.0);
        assert_eq!(expense.usefulness, Some(6));
        assert_eq!(expense.name, "Mixpanel");
        assert_eq!(expense.category, ExpenseCategory::Marketing);
    }

    #[test]
    fn update_unknown_id_reports_the_missing_expense() {
        let (mut store, _) = store_with_one_expense();
        let unknown = Uuid::new_v4();
        let err = store
            .update(unknown, ExpensePatch::default())
            .unwrap_err();
        assert!(matches!(err, TrackerError::ExpenseNotFound(id) if id == unknown));
    }

    #[test]
    fn remove_returns_the_expense_and_shrinks_the_list() {
        let (mut store, id) = store_with_one_expense();
        let removed = store.remove(id).unwrap();
        assert_eq!(removed.name, "Mixpanel");
        assert!(store.list().is_empty());
        assert!(store.remove(id).is_err());
    }
}
