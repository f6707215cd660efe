use std::path::PathBuf;

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised by the ledger, the session and the report engine.
#[derive(Debug, Error)]
pub enum BudgetError {
    #[error("Invalid month '{0}'. Use YYYY-MM (e.g. 2024-01)")]
    InvalidMonth(String),
    #[error("Category must not be empty")]
    EmptyCategory,
    #[error("Amount for '{category}' must be zero or positive, got {amount}")]
    NegativeAmount { category: String, amount: Decimal },
    #[error("Adding {amount} to '{category}' would overflow the month's total")]
    AmountOverflow { category: String, amount: Decimal },
    #[error("Budget limit for '{category}' must be greater than zero, got {limit}")]
    NonPositiveLimit { category: String, limit: Decimal },
    #[error("Failed to export summary to {}: {source}", path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, BudgetError>;
