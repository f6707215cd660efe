use std::fmt;

use rust_decimal::Decimal;
use tracing::warn;

use crate::models::Amounts;
use crate::util::{format_amount, format_percent, percent};

pub(crate) const NO_ALERTS: &str = "No budget alerts.";

/// A category whose spending went over its limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BudgetAlert {
    pub category: String,
    pub limit: Decimal,
    pub over_amount: Decimal,
    /// `None` when the limit is zero.
    pub percent_of_limit: Option<Decimal>,
}

impl fmt::Display for BudgetAlert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} over budget",
            self.category,
            format_amount(self.over_amount)
        )?;
        match self.percent_of_limit {
            Some(pct) => write!(f, " ({}% of limit)", format_percent(pct)),
            None => write!(f, " (limit is {})", format_amount(self.limit)),
        }
    }
}

/// Check every limit against what was spent. Categories without a limit are
/// never alerted; categories with a limit but no spending count as zero.
pub(crate) fn evaluate(expenses: &Amounts, limits: &Amounts) -> Vec<BudgetAlert> {
    limits
        .iter()
        .filter_map(|(category, &limit)| {
            let spent = expenses.get(category).copied().unwrap_or(Decimal::ZERO);
            if spent <= limit {
                return None;
            }

            let percent_of_limit = if limit.is_zero() {
                warn!("Budget limit for '{category}' is zero, skipping percent of limit");
                None
            } else {
                Some(percent(spent, limit))
            };

            Some(BudgetAlert {
                category: category.clone(),
                limit,
                over_amount: spent - limit,
                percent_of_limit,
            })
        })
        .collect()
}
