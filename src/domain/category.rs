//! The closed set of expense categories and category-keyed accumulation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Categorises spending for breakdowns and optimization heuristics.
///
/// The set is closed on purpose: every category-keyed aggregation enumerates
/// [`ExpenseCategory::ALL`] instead of inferring keys from data, so a new
/// category is a compile-visible change everywhere it matters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    Development,
    Ai,
    Domains,
    Design,
    Marketing,
    Other,
}

impl ExpenseCategory {
    pub const COUNT: usize = 6;

    /// Every category, in canonical display order.
    pub const ALL: [ExpenseCategory; Self::COUNT] = [
        ExpenseCategory::Development,
        ExpenseCategory::Ai,
        ExpenseCategory::Domains,
        ExpenseCategory::Design,
        ExpenseCategory::Marketing,
        ExpenseCategory::Other,
    ];

    /// Stable slot index; the exhaustive match keeps `ALL` honest.
    pub const fn slot(self) -> usize {
        match self {
            ExpenseCategory::Development => 0,
            ExpenseCategory::Ai => 1,
            ExpenseCategory::Domains => 2,
            ExpenseCategory::Design => 3,
            ExpenseCategory::Marketing => 4,
            ExpenseCategory::Other => 5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ExpenseCategory::Development => "Development",
            ExpenseCategory::Ai => "AI",
            ExpenseCategory::Domains => "Domains",
            ExpenseCategory::Design => "Design",
            ExpenseCategory::Marketing => "Marketing",
            ExpenseCategory::Other => "Other",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ExpenseCategory {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(ExpenseCategory::Development),
            "ai" => Ok(ExpenseCategory::Ai),
            "domains" | "domain" => Ok(ExpenseCategory::Domains),
            "design" => Ok(ExpenseCategory::Design),
            "marketing" => Ok(ExpenseCategory::Marketing),
            "other" => Ok(ExpenseCategory::Other),
            other => Err(format!("unknown category `{}`", other)),
        }
    }
}

/// Fixed-slot accumulator over the full category set.
///
/// Categories with no contributions stay at zero instead of going missing,
/// which is what the dashboard breakdowns rely on.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CategoryTotals {
    amounts: [f64; ExpenseCategory::COUNT],
    counts: [u32; ExpenseCategory::COUNT],
}

impl CategoryTotals {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, category: ExpenseCategory, amount: f64) {
        let slot = category.slot();
        self.amounts[slot] += amount;
        self.counts[slot] += 1;
    }

    pub fn amount(&self, category: ExpenseCategory) -> f64 {
        self.amounts[category.slot()]
    }

    pub fn count(&self, category: ExpenseCategory) -> u32 {
        self.counts[category.slot()]
    }

    pub fn grand_total(&self) -> f64 {
        self.amounts.iter().sum()
    }

    /// Iterates `(category, amount, count)` in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (ExpenseCategory, f64, u32)> + '_ {
        ExpenseCategory::ALL
            .iter()
            .map(|&category| (category, self.amount(category), self.count(category)))
    }
}
