use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::category::ExpenseCategory;
use crate::domain::common::{Displayable, Identifiable, NamedEntity};

/// Whether an expense charges repeatedly or exactly once.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ExpenseType {
    #[serde(rename = "recurring")]
    Recurring,
    #[serde(rename = "one-time")]
    OneTime,
}

/// Cadence of a recurring charge.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BillingCycle {
    Monthly,
    Quarterly,
    Yearly,
    Custom,
}

impl BillingCycle {
    /// Fraction of the cycle amount attributable to a single month.
    ///
    /// `Custom` cycles carry no interval length, so they normalize to zero
    /// rather than guessing.
    pub fn monthly_factor(self) -> f64 {
        match self {
            BillingCycle::Monthly => 1.0,
            BillingCycle::Quarterly => 1.0 / 3.0,
            BillingCycle::Yearly => 1.0 / 12.0,
            BillingCycle::Custom => 0.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BillingCycle::Monthly => "Monthly",
            BillingCycle::Quarterly => "Quarterly",
            BillingCycle::Yearly => "Yearly",
            BillingCycle::Custom => "Custom",
        }
    }
}

/// A single tracked expense: one subscription or one-off purchase.
///
/// `billing_cycle` and `next_renewal` are logically required for recurring
/// expenses but the schema does not enforce it; every aggregation treats
/// their absence as "excluded from this calculation", never as an error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub amount: f64,
    pub currency: String,
    pub category: ExpenseCategory,
    #[serde(rename = "type")]
    pub kind: ExpenseType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_cycle: Option<BillingCycle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_renewal: Option<NaiveDate>,
    pub start_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usefulness: Option<u8>,
}

impl Expense {
    pub fn new(
        name: impl Into<String>,
        amount: f64,
        category: ExpenseCategory,
        kind: ExpenseType,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: None,
            amount,
            currency: "USD".into(),
            category,
            kind,
            billing_cycle: None,
            next_renewal: None,
            start_date,
            end_date: None,
            active: true,
            notes: None,
            tags: Vec::new(),
            usefulness: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_billing_cycle(mut self, cycle: BillingCycle) -> Self {
        self.billing_cycle = Some(cycle);
        self
    }

    pub fn with_next_renewal(mut self, date: NaiveDate) -> Self {
        self.next_renewal = Some(date);
        self
    }

    pub fn with_usefulness(mut self, rating: u8) -> Self {
        self.usefulness = Some(rating);
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn is_recurring(&self) -> bool {
        self.kind == ExpenseType::Recurring
    }

    /// This expense's contribution to normalized monthly burn.
    ///
    /// One-time expenses and recurring expenses without a billing cycle
    /// contribute nothing.
    pub fn monthly_equivalent(&self) -> f64 {
        if !self.is_recurring() {
            return 0.0;
        }
        self.billing_cycle
            .map(|cycle| self.amount * cycle.monthly_factor())
            .unwrap_or(0.0)
    }
}

impl Identifiable for Expense {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Expense {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for Expense {
    fn display_label(&self) -> String {
        format!("{} ({} {:.2})", self.name, self.currency, self.amount)
    }
}
