use rust_decimal::Decimal;

use crate::models::{EntryKind, Ledger, Month};
use crate::util::percent;

/// Income, expense and savings totals for one month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Summary {
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    /// Income minus expenses. Negative when the month overspent.
    pub net: Decimal,
    /// `net` as a percentage of income, or zero when there was no income.
    pub net_percent_of_income: Decimal,
}

pub(crate) fn summarize(ledger: &Ledger, month: Month) -> Summary {
    let total_income = ledger.total(month, EntryKind::Income);
    let total_expenses = ledger.total(month, EntryKind::Expenses);
    let net = total_income - total_expenses;
    let net_percent_of_income = if total_income > Decimal::ZERO {
        percent(net, total_income)
    } else {
        Decimal::ZERO
    };

    Summary {
        total_income,
        total_expenses,
        net,
        net_percent_of_income,
    }
}
