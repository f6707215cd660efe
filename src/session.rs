use std::path::PathBuf;

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{BudgetError, Result};
use crate::models::{BudgetTable, EntryKind, Ledger, Month};
use crate::report::{self, Report, Summary, Trend};

/// Owns the ledger and budget table for one run of the program.
///
/// All mutation goes through here. Every input is checked before anything
/// is written, so a rejected call leaves the session exactly as it was.
#[derive(Debug, Clone, Default)]
pub(crate) struct Session {
    ledger: Ledger,
    budgets: BudgetTable,
    config: Config,
}

impl Session {
    pub(crate) fn new(config: Config) -> Self {
        Self {
            ledger: Ledger::new(),
            budgets: BudgetTable::new(),
            config,
        }
    }

    pub(crate) fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    #[cfg(test)]
    pub(crate) fn budgets(&self) -> &BudgetTable {
        &self.budgets
    }

    pub(crate) fn config(&self) -> &Config {
        &self.config
    }

    pub(crate) fn add_income(
        &mut self,
        month: Month,
        category: &str,
        amount: Decimal,
    ) -> Result<Decimal> {
        self.add(month, EntryKind::Income, category, amount)
    }

    pub(crate) fn add_expense(
        &mut self,
        month: Month,
        category: &str,
        amount: Decimal,
    ) -> Result<Decimal> {
        self.add(month, EntryKind::Expenses, category, amount)
    }

    fn add(
        &mut self,
        month: Month,
        kind: EntryKind,
        category: &str,
        amount: Decimal,
    ) -> Result<Decimal> {
        let category = checked_category(category)?;
        if amount < Decimal::ZERO {
            warn!("Rejected negative {kind} amount {amount} for '{category}'");
            return Err(BudgetError::NegativeAmount {
                category: category.to_string(),
                amount,
            });
        }

        let Some(total) = self.ledger.add(month, kind, category, amount) else {
            warn!("Rejected {kind} amount {amount} for '{category}': total would overflow");
            return Err(BudgetError::AmountOverflow {
                category: category.to_string(),
                amount,
            });
        };
        debug!("Added {kind} {category} {amount} for {month}, total now {total}");
        Ok(total)
    }

    /// Set (or replace) the spending limit for a category. Limits must be
    /// greater than zero.
    pub(crate) fn set_budget(
        &mut self,
        month: Month,
        category: &str,
        limit: Decimal,
    ) -> Result<()> {
        let category = checked_category(category)?;
        if limit <= Decimal::ZERO {
            warn!("Rejected budget limit {limit} for '{category}'");
            return Err(BudgetError::NonPositiveLimit {
                category: category.to_string(),
                limit,
            });
        }

        if let Some(previous) = self.budgets.set(month, category, limit) {
            debug!("Replaced budget for {category} in {month}: {previous} -> {limit}");
        } else {
            debug!("Set budget for {category} in {month}: {limit}");
        }
        Ok(())
    }

    pub(crate) fn summary(&self, month: Month) -> Summary {
        report::summarize(&self.ledger, month)
    }

    pub(crate) fn report(&self, month: Month) -> Report {
        report::compose(&self.ledger, &self.budgets, month, &self.config)
    }

    /// Trend of one category over the window ending at `month`. The category
    /// is matched ignoring case.
    pub(crate) fn trend(&self, category: &str, month: Month, kind: EntryKind) -> Trend {
        let category = self.ledger.find_category(category).unwrap_or(category);
        let window = report::trend_window(month, self.config.trend_months);
        report::trend(&self.ledger, category, &window, kind)
    }

    /// Export the month's report to the configured directory.
    pub(crate) fn export(&self, month: Month) -> Result<PathBuf> {
        self.report(month).export(&self.config.export_dir)
    }

    /// The newest month with entries, or the current month for an empty ledger.
    pub(crate) fn default_month(&self) -> Month {
        self.ledger.latest_month().unwrap_or_else(Month::current)
    }
}

fn checked_category(category: &str) -> Result<&str> {
    let trimmed = category.trim();
    if trimmed.is_empty() {
        warn!("Rejected empty category");
        return Err(BudgetError::EmptyCategory);
    }
    Ok(trimmed)
}
