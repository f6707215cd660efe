use std::collections::BTreeMap;

use rust_decimal::Decimal;

use super::{Amounts, Month};

static NO_LIMITS: Amounts = BTreeMap::new();

/// Monthly spending limits by category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BudgetTable {
    limits: BTreeMap<Month, Amounts>,
}

impl BudgetTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the limit for a category, replacing any earlier one.
    /// Returns the replaced limit.
    pub fn set(&mut self, month: Month, category: &str, limit: Decimal) -> Option<Decimal> {
        self.limits
            .entry(month)
            .or_default()
            .insert(category.to_string(), limit)
    }

    pub fn limits(&self, month: Month) -> &Amounts {
        self.limits.get(&month).unwrap_or(&NO_LIMITS)
    }
}
