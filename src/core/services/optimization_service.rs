//! Rule-based cost-optimization heuristics.

use crate::domain::{BillingCycle, Expense, ExpenseCategory};

/// Usefulness ratings below this trigger the cancellation suggestion.
const LOW_USEFULNESS_THRESHOLD: u8 = 6;
/// Development spend above this suggests hunting for alternatives.
const DEV_ALTERNATIVE_THRESHOLD: f64 = 20.0;
/// Monthly spend above this suggests switching to annual billing.
const ANNUAL_BILLING_THRESHOLD: f64 = 15.0;

/// A heuristic cost-saving recommendation tied to one expense.
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub expense: Expense,
    pub suggestion: String,
}

pub struct OptimizationService;

impl OptimizationService {
    /// Evaluates each active expense against three independent rules, in
    /// order: low usefulness, pricey development tooling, and
    /// annual-billing candidates. Rules are not mutually exclusive, so one
    /// expense can produce several suggestions; output follows input order.
    pub fn suggestions(expenses: &[Expense]) -> Vec<Suggestion> {
        let mut suggestions = Vec::new();

        for expense in expenses.iter().filter(|expense| expense.active) {
            if let Some(rating) = expense.usefulness {
                if rating < LOW_USEFULNESS_THRESHOLD {
                    suggestions.push(Suggestion {
                        expense: expense.clone(),
                        suggestion: format!(
                            "Consider canceling or finding alternatives - usefulness rating is low ({}/10)",
                            rating
                        ),
                    });
                }
            }

            if expense.category == ExpenseCategory::Development
                && expense.amount > DEV_ALTERNATIVE_THRESHOLD
            {
                suggestions.push(Suggestion {
                    expense: expense.clone(),
                    suggestion:
                        "Check for more affordable alternatives or open-source options".into(),
                });
            }

            if expense.billing_cycle == Some(BillingCycle::Monthly)
                && expense.amount > ANNUAL_BILLING_THRESHOLD
            {
                suggestions.push(Suggestion {
                    expense: expense.clone(),
                    suggestion:
                        "Consider annual billing to save money (typically 10-20% discount)".into(),
                });
            }
        }

        suggestions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ExpenseType;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn low_usefulness_and_annual_billing_fire_together_in_rule_order() {
        let expense = Expense::new(
            "ConvertKit",
            29.0,
            ExpenseCategory::Marketing,
            ExpenseType::Recurring,
            date(2024, 3, 18),
        )
        .with_billing_cycle(BillingCycle::Monthly)
        .with_usefulness(3);

        let suggestions = OptimizationService::suggestions(&[expense]);
        assert_eq!(suggestions.len(), 2);
        assert!(suggestions[0].suggestion.contains("usefulness rating is low (3/10)"));
        assert!(suggestions[1].suggestion.contains("annual billing"));
    }

    #[test]
    fn development_rule_requires_amount_above_twenty() {
        let at_threshold = Expense::new(
            "Vercel",
            20.0,
            ExpenseCategory::Development,
            ExpenseType::Recurring,
            date(2024, 1, 15),
        )
        .with_billing_cycle(BillingCycle::Monthly)
        .with_usefulness(9);
        assert!(OptimizationService::suggestions(&[at_threshold.clone()])
            .iter()
            .all(|s| !s.suggestion.contains("open-source")));

        let mut above = at_threshold;
        above.amount = 25.0;
        let suggestions = OptimizationService::suggestions(&[above]);
        assert!(suggestions
            .iter()
            .any(|s| s.suggestion.contains("open-source")));
    }

    #[test]
    fn inactive_and_unrated_expenses_stay_quiet() {
        let mut inactive = Expense::new(
            "Old tool",
            50.0,
            ExpenseCategory::Development,
            ExpenseType::Recurring,
            date(2024, 1, 1),
        )
        .with_billing_cycle(BillingCycle::Monthly)
        .with_usefulness(1);
        inactive.active = false;

        let unrated = Expense::new(
            "Domain",
            12.0,
            ExpenseCategory::Domains,
            ExpenseType::Recurring,
            date(2024, 1, 10),
        )
        .with_billing_cycle(BillingCycle::Yearly);

        assert!(OptimizationService::suggestions(&[inactive, unrated]).is_empty());
    }
}
