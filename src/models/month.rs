use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use chrono::{Datelike, Months, NaiveDate};
use regex::Regex;

use crate::error::BudgetError;

static MONTH_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}$").ok());

/// A calendar month, the only time bucket the ledger knows about.
///
/// Stored as the first day of the month so that month arithmetic can lean on
/// chrono. Parses from and displays as `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month(NaiveDate);

impl Month {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if year < 1 {
            return None;
        }
        NaiveDate::from_ymd_opt(year, month, 1).map(Self)
    }

    /// The local calendar month.
    pub fn current() -> Self {
        let today = chrono::Local::now().date_naive();
        Self(today.with_day(1).unwrap_or(today))
    }

    /// Walk back `n` calendar months. `2024-01` minus one is `2023-12`.
    pub fn months_before(&self, n: u32) -> Option<Self> {
        self.0.checked_sub_months(Months::new(n)).map(Self)
    }

    /// e.g. `January 2024`
    pub fn long_name(&self) -> String {
        self.0.format("%B %Y").to_string()
    }
}

impl FromStr for Month {
    type Err = BudgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || BudgetError::InvalidMonth(trimmed.to_string());

        let well_formed = MONTH_PATTERN
            .as_ref()
            .is_some_and(|re| re.is_match(trimmed));
        if !well_formed {
            return Err(invalid());
        }

        let year: i32 = trimmed[..4].parse().map_err(|_| invalid())?;
        let month: u32 = trimmed[5..].parse().map_err(|_| invalid())?;
        Self::new(year, month).ok_or_else(invalid)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m"))
    }
}
