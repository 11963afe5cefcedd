//! CRUD façade over the expense repository.

use uuid::Uuid;

use crate::core::store::{ExpensePatch, ExpenseStore};
use crate::domain::Expense;
use crate::errors::TrackerError;

use super::{ServiceError, ServiceResult};

pub struct ExpenseService;

impl ExpenseService {
    pub fn add(store: &mut impl ExpenseStore, expense: Expense) -> ServiceResult<Uuid> {
        if expense.amount < 0.0 {
            return Err(ServiceError::Invalid(
                "expense amount must be non-negative".into(),
            ));
        }
        if let Some(rating) = expense.usefulness {
            if !(1..=10).contains(&rating) {
                return Err(ServiceError::Invalid(
                    "usefulness rating must be between 1 and 10".into(),
                ));
            }
        }
        Ok(store.add(expense))
    }

    pub fn edit(store: &mut impl ExpenseStore, id: Uuid, patch: ExpensePatch) -> ServiceResult<()> {
        if let Some(amount) = patch.amount {
            if amount < 0.0 {
                return Err(ServiceError::Invalid(
                    "expense amount must be non-negative".into(),
                ));
            }
        }
        if let Some(rating) = patch.usefulness {
            if !(1..=10).contains(&rating) {
                return Err(ServiceError::Invalid(
                    "usefulness rating must be between 1 and 10".into(),
                ));
            }
        }
        store.update(id, patch).map_err(ServiceError::from)
    }

    pub fn remove(store: &mut impl ExpenseStore, id: Uuid) -> ServiceResult<Expense> {
        store.remove(id).map_err(ServiceError::from)
    }

    /// Flips the active flag, returning the new state.
    pub fn toggle_active(store: &mut impl ExpenseStore, id: Uuid) -> ServiceResult<bool> {
        let current = store
            .get(id)
            .map(|expense| expense.active)
            .ok_or(TrackerError::ExpenseNotFound(id))
            .map_err(ServiceError::from)?;
        store.update(
            id,
            ExpensePatch {
                active: Some(!current),
                ..Default::default()
            },
        )?;
        Ok(!current)
    }
}
