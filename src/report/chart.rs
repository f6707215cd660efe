use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::util::{format_amount, format_percent, percent};

pub(crate) const NO_DATA: &str = "(No data)";

const FILLED: &str = "█";
const EMPTY: &str = "░";

/// What the percentage column of a bar chart is relative to.
///
/// Bars are always scaled to the largest value; the percentage column can
/// be relative to something else, such as the month's total spending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PercentOf {
    Largest,
    /// A zero total is treated as one.
    Total(Decimal),
}

/// Renders `(label, value)` pairs as fixed-width text bars.
///
/// ```text
/// Housing      ████████████████████ $800.00 (55.9%)
/// Food         ██████████░░░░░░░░░░ $430.00 (30.1%)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BarChart {
    width: usize,
    label_width: usize,
    percent_of: PercentOf,
}

impl BarChart {
    pub(crate) fn new(width: usize) -> Self {
        Self {
            width,
            label_width: 12,
            percent_of: PercentOf::Largest,
        }
    }

    pub(crate) fn label_width(mut self, label_width: usize) -> Self {
        self.label_width = label_width;
        self
    }

    pub(crate) fn percent_of(mut self, percent_of: PercentOf) -> Self {
        self.percent_of = percent_of;
        self
    }

    /// One line per item, in the order given. Empty input renders as a
    /// single [`NO_DATA`] line.
    pub(crate) fn render<S: AsRef<str>>(&self, items: &[(S, Decimal)]) -> Vec<String> {
        if items.is_empty() {
            return vec![NO_DATA.to_string()];
        }

        let largest = items
            .iter()
            .map(|(_, value)| *value)
            .max()
            .unwrap_or(Decimal::ZERO);
        let scale = non_zero(largest);
        let denominator = match self.percent_of {
            PercentOf::Largest => scale,
            PercentOf::Total(total) => non_zero(total),
        };

        items
            .iter()
            .map(|(label, value)| {
                format!(
                    "{:<width$} {} {} ({}%)",
                    label.as_ref(),
                    self.bar(*value, scale),
                    format_amount(*value),
                    format_percent(percent(*value, denominator)),
                    width = self.label_width,
                )
            })
            .collect()
    }

    fn bar(&self, value: Decimal, scale: Decimal) -> String {
        let filled = (value / scale * Decimal::from(self.width))
            .floor()
            .to_usize()
            .unwrap_or(0)
            .min(self.width);
        let empty = self.width - filled;
        format!("{}{}", FILLED.repeat(filled), EMPTY.repeat(empty))
    }
}

fn non_zero(val: Decimal) -> Decimal {
    if val.is_zero() {
        Decimal::ONE
    } else {
        val
    }
}
