use std::fmt;

use crate::models::{EntryKind, Ledger, Month};

/// Direction of a category across a trend window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Trend {
    Increasing,
    Decreasing,
    Stable,
    InsufficientData,
}

impl Trend {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Increasing => "Increasing",
            Self::Decreasing => "Decreasing",
            Self::Stable => "Stable",
            Self::InsufficientData => "No trend data",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Compare the first and last value of `category` over `window`, oldest
/// month first. Months without an entry count as zero. Only the endpoints
/// matter; values in between are ignored.
pub(crate) fn trend(ledger: &Ledger, category: &str, window: &[Month], kind: EntryKind) -> Trend {
    let (Some(first), Some(last)) = (window.first(), window.last()) else {
        return Trend::InsufficientData;
    };
    if window.len() < 2 {
        return Trend::InsufficientData;
    }

    let first = ledger.amount(*first, kind, category);
    let last = ledger.amount(*last, kind, category);
    if last > first {
        Trend::Increasing
    } else if last < first {
        Trend::Decreasing
    } else {
        Trend::Stable
    }
}

/// `[month - back, …, month - 1, month]`. Falls back to `[month]` when the
/// calendar runs out before `back` months.
pub(crate) fn trend_window(month: Month, back: u32) -> Vec<Month> {
    (1..=back)
        .rev()
        .map(|n| month.months_before(n))
        .chain(std::iter::once(Some(month)))
        .collect::<Option<Vec<_>>>()
        .unwrap_or_else(|| vec![month])
}
