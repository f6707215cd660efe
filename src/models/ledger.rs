use std::collections::BTreeMap;
use std::fmt;

use rust_decimal::Decimal;

use super::Month;

/// Category name to accumulated amount, ordered by category name.
pub type Amounts = BTreeMap<String, Decimal>;

static NO_AMOUNTS: Amounts = BTreeMap::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EntryKind {
    Income,
    Expenses,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expenses => "expenses",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonthEntries {
    pub income: Amounts,
    pub expenses: Amounts,
}

impl MonthEntries {
    pub fn amounts(&self, kind: EntryKind) -> &Amounts {
        match kind {
            EntryKind::Income => &self.income,
            EntryKind::Expenses => &self.expenses,
        }
    }

    fn amounts_mut(&mut self, kind: EntryKind) -> &mut Amounts {
        match kind {
            EntryKind::Income => &mut self.income,
            EntryKind::Expenses => &mut self.expenses,
        }
    }
}

/// A category hit from [`Ledger::search`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryMatch<'a> {
    pub month: Month,
    pub kind: EntryKind,
    pub category: &'a str,
    pub amount: Decimal,
}

/// Income and expense totals per month and category.
///
/// Months only appear once something has been recorded for them. Every read
/// accessor treats a missing month or category as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    months: BTreeMap<Month, MonthEntries>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount` to a category, returning the new category total.
    /// Repeated entries accumulate.
    ///
    /// Returns `None` and records nothing when either the category total or
    /// the month's total for `kind` would overflow.
    pub fn add(
        &mut self,
        month: Month,
        kind: EntryKind,
        category: &str,
        amount: Decimal,
    ) -> Option<Decimal> {
        self.total(month, kind).checked_add(amount)?;
        let total = self.amount(month, kind, category).checked_add(amount)?;
        self.months
            .entry(month)
            .or_default()
            .amounts_mut(kind)
            .insert(category.to_string(), total);
        Some(total)
    }

    pub fn month(&self, month: Month) -> Option<&MonthEntries> {
        self.months.get(&month)
    }

    pub fn amounts(&self, month: Month, kind: EntryKind) -> &Amounts {
        self.month(month)
            .map_or(&NO_AMOUNTS, |entries| entries.amounts(kind))
    }

    pub fn amount(&self, month: Month, kind: EntryKind, category: &str) -> Decimal {
        self.amounts(month, kind)
            .get(category)
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    pub fn total(&self, month: Month, kind: EntryKind) -> Decimal {
        self.amounts(month, kind)
            .values()
            .fold(Decimal::ZERO, |acc, amount| acc.saturating_add(*amount))
    }

    pub fn latest_month(&self) -> Option<Month> {
        self.months.keys().next_back().copied()
    }

    /// Find a stored category by name, ignoring case. Returns the stored spelling.
    pub fn find_category(&self, name: &str) -> Option<&str> {
        let lower = name.to_lowercase();
        self.months
            .values()
            .flat_map(|entries| entries.income.keys().chain(entries.expenses.keys()))
            .find(|c| c.to_lowercase() == lower)
            .map(String::as_str)
    }

    /// Every entry whose category contains `query`, ignoring case.
    /// Ordered by month, then income before expenses, then category.
    pub fn search(&self, query: &str) -> Vec<CategoryMatch<'_>> {
        let needle = query.trim().to_lowercase();
        let mut matches = Vec::new();
        for (month, entries) in &self.months {
            for kind in [EntryKind::Income, EntryKind::Expenses] {
                for (category, amount) in entries.amounts(kind) {
                    if category.to_lowercase().contains(&needle) {
                        matches.push(CategoryMatch {
                            month: *month,
                            kind,
                            category,
                            amount: *amount,
                        });
                    }
                }
            }
        }
        matches
    }
}
